use pin_core::screen::{NavigationState, SettingsAction};
use pin_core::wifi::{WifiCredentials, WifiSecurity};

use crate::error::CliError;

pub fn run_wifi(
    ssid: String,
    password: Option<String>,
    security: WifiSecurity,
    hidden: bool,
) -> Result<(), CliError> {
    let credentials = WifiCredentials {
        ssid,
        password,
        security,
        hidden,
    };
    tracing::debug!("Encoding {credentials:?}");

    let mut navigation = NavigationState::default();
    println!("{}", wifi_sheet_payload(&mut navigation, &credentials)?);
    Ok(())
}

/// Opens the Wi-Fi code sheet, reads its payload and closes it again.
pub fn wifi_sheet_payload(
    navigation: &mut NavigationState,
    credentials: &WifiCredentials,
) -> Result<String, CliError> {
    navigation.handle_action(SettingsAction::AddWifiNetwork)?;
    let payload = navigation.wifi_code_payload(credentials);
    navigation.dismiss_wifi_code_generator();
    Ok(payload?)
}
