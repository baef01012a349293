//! Platform-neutral description of the settings screen.
//!
//! [`ScreenModel::build`] turns the controller's state and the stored
//! appearance preferences into ordered sections of rows; shells only have to
//! draw them.

use serde::Serialize;

use crate::controller::ViewState;
use crate::error::{Error, Result};
use crate::models::AppIcon;
use crate::preferences::AppearancePreferences;
use crate::wifi::WifiCredentials;

pub const SCREEN_TITLE: &str = "Settings";

const LOST_DEVICE_FOOTER: &str = "Marking your Ai Pin as lost or stolen keeps your .Center data safe and remotely locks your Pin. If your Pin is successfully unlocked while in this state, access to any of your .Center data will still be blocked. Once you recover your Pin, remember to disable this setting.";

/// Buttons the screen exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsAction {
    AddWifiNetwork,
    UpdatePasscode,
    MarkAsLost,
}

impl SettingsAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddWifiNetwork => "Add Wi-Fi Network",
            Self::UpdatePasscode => "Update Passcode",
            Self::MarkAsLost => "Mark As Lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    Labeled {
        label: &'static str,
        value: String,
    },
    Toggle {
        label: &'static str,
        on: bool,
        disabled: bool,
    },
    Button {
        action: SettingsAction,
        label: &'static str,
        destructive: bool,
    },
    Color {
        label: &'static str,
        hex: String,
    },
    IconChoice {
        icon: AppIcon,
        title: &'static str,
        image_name: &'static str,
        selected: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub header: &'static str,
    pub rows: Vec<Row>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<&'static str>,
    /// Row values can be copied by the user
    pub text_selectable: bool,
}

impl Section {
    const fn new(header: &'static str, rows: Vec<Row>) -> Self {
        Self {
            header,
            rows,
            footer: None,
            text_selectable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenModel {
    pub title: &'static str,
    pub show_progress_overlay: bool,
    pub sections: Vec<Section>,
}

impl ScreenModel {
    pub fn build(state: &ViewState, appearance: &AppearancePreferences) -> Self {
        let sections = state
            .subscription
            .as_ref()
            .map(|subscription| {
                let mut sections = vec![
                    Section {
                        text_selectable: true,
                        ..Section::new(
                            "Device",
                            vec![
                                labeled("Account Number", &subscription.account_number),
                                labeled("Phone Number", &subscription.phone_number),
                                labeled("Status", &subscription.status),
                                labeled("Plan", &subscription.plan_type),
                                labeled("Monthly Price", &subscription.monthly_price_label()),
                            ],
                        )
                    },
                    Section::new(
                        "Features",
                        vec![
                            Row::Toggle {
                                label: "Vision (Beta)",
                                on: state.is_feature_beta_enabled,
                                disabled: state.is_loading,
                            },
                            button(SettingsAction::AddWifiNetwork, false),
                            button(SettingsAction::UpdatePasscode, false),
                        ],
                    ),
                    Section {
                        footer: Some(LOST_DEVICE_FOOTER),
                        ..Section::new("Security", vec![button(SettingsAction::MarkAsLost, true)])
                    },
                ];

                if let Some(info) = &state.extended_device_info {
                    sections.push(Section {
                        text_selectable: true,
                        ..Section::new(
                            "Miscellaneous",
                            vec![
                                labeled("Identifier", &info.id),
                                labeled("Serial Number", &info.serial_number),
                                labeled("eSIM", &info.iccid),
                                labeled("Color", &info.color),
                            ],
                        )
                    });
                }

                sections.push(Section::new(
                    "Appearance",
                    vec![Row::Color {
                        label: "Theme",
                        hex: appearance.accent_color.to_hex(),
                    }],
                ));
                sections.push(Section::new(
                    "App Icon",
                    AppIcon::ALL
                        .into_iter()
                        .map(|icon| {
                            let description = icon.description();
                            Row::IconChoice {
                                icon,
                                title: description.title,
                                image_name: description.image_name,
                                selected: icon == appearance.app_icon,
                            }
                        })
                        .collect(),
                ));
                sections
            })
            .unwrap_or_default();

        Self {
            title: SCREEN_TITLE,
            show_progress_overlay: state.shows_progress_overlay(),
            sections,
        }
    }

    pub fn section(&self, header: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.header == header)
    }
}

/// Flags the presentation host reads to show secondary sheets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub wifi_code_generator_presented: bool,
}

impl NavigationState {
    /// Dispatch a button press from the screen.
    pub fn handle_action(&mut self, action: SettingsAction) -> Result<()> {
        match action {
            SettingsAction::AddWifiNetwork => {
                self.wifi_code_generator_presented = true;
                Ok(())
            }
            SettingsAction::UpdatePasscode | SettingsAction::MarkAsLost => {
                tracing::info!("{} pressed without backend support", action.label());
                Err(Error::Unsupported(action.label()))
            }
        }
    }

    /// Content of the Wi-Fi code sheet; only available while it is presented.
    pub fn wifi_code_payload(&self, credentials: &WifiCredentials) -> Result<String> {
        if !self.wifi_code_generator_presented {
            return Err(Error::InvalidInput(
                "the Wi-Fi code generator is not open".to_string(),
            ));
        }
        credentials.payload()
    }

    pub fn dismiss_wifi_code_generator(&mut self) {
        self.wifi_code_generator_presented = false;
    }
}

fn labeled(label: &'static str, value: &str) -> Row {
    Row::Labeled {
        label,
        value: value.to_string(),
    }
}

const fn button(action: SettingsAction, destructive: bool) -> Row {
    Row::Button {
        action,
        label: action.label(),
        destructive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccentColor, DeviceInfo, Subscription};
    use pretty_assertions::assert_eq;

    fn loaded_state() -> ViewState {
        ViewState {
            subscription: Some(Subscription {
                account_number: "A-100".to_string(),
                phone_number: "+15555550100".to_string(),
                status: "active".to_string(),
                plan_type: "standard".to_string(),
                plan_price: 2499,
            }),
            extended_device_info: Some(DeviceInfo {
                id: "device-1".to_string(),
                serial_number: "SN-1".to_string(),
                iccid: "8901".to_string(),
                color: "eclipse".to_string(),
            }),
            is_loading: false,
            is_feature_beta_enabled: true,
        }
    }

    fn headers(model: &ScreenModel) -> Vec<&'static str> {
        model.sections.iter().map(|section| section.header).collect()
    }

    #[test]
    fn no_sections_without_subscription() {
        let model = ScreenModel::build(&ViewState::default(), &AppearancePreferences::default());
        assert_eq!(model.title, "Settings");
        assert!(model.sections.is_empty());
        assert!(!model.show_progress_overlay);
    }

    #[test]
    fn overlay_only_while_first_load_is_pending() {
        let loading = ViewState {
            is_loading: true,
            ..ViewState::default()
        };
        let model = ScreenModel::build(&loading, &AppearancePreferences::default());
        assert!(model.show_progress_overlay);

        let reloading = ViewState {
            is_loading: true,
            ..loaded_state()
        };
        let model = ScreenModel::build(&reloading, &AppearancePreferences::default());
        assert!(!model.show_progress_overlay);
    }

    #[test]
    fn full_state_renders_sections_in_order() {
        let model = ScreenModel::build(&loaded_state(), &AppearancePreferences::default());
        assert_eq!(
            headers(&model),
            vec![
                "Device",
                "Features",
                "Security",
                "Miscellaneous",
                "Appearance",
                "App Icon"
            ]
        );

        let device = model.section("Device").unwrap();
        assert!(device.text_selectable);
        assert_eq!(
            device.rows.last(),
            Some(&Row::Labeled {
                label: "Monthly Price",
                value: "$24".to_string(),
            })
        );

        let security = model.section("Security").unwrap();
        assert_eq!(security.footer, Some(LOST_DEVICE_FOOTER));
        assert_eq!(
            security.rows,
            vec![Row::Button {
                action: SettingsAction::MarkAsLost,
                label: "Mark As Lost",
                destructive: true,
            }]
        );
    }

    #[test]
    fn miscellaneous_hidden_without_device_info() {
        let state = ViewState {
            extended_device_info: None,
            ..loaded_state()
        };
        let model = ScreenModel::build(&state, &AppearancePreferences::default());
        assert!(model.section("Miscellaneous").is_none());
        assert!(model.section("Appearance").is_some());
    }

    #[test]
    fn beta_toggle_disabled_while_loading() {
        let state = ViewState {
            is_loading: true,
            ..loaded_state()
        };
        let model = ScreenModel::build(&state, &AppearancePreferences::default());
        assert_eq!(
            model.section("Features").unwrap().rows[0],
            Row::Toggle {
                label: "Vision (Beta)",
                on: true,
                disabled: true,
            }
        );
    }

    #[test]
    fn appearance_reflects_preferences() {
        let appearance = AppearancePreferences {
            accent_color: AccentColor::rgb(0x12, 0x34, 0x56),
            app_icon: AppIcon::DeviceIcon,
        };
        let model = ScreenModel::build(&loaded_state(), &appearance);

        assert_eq!(
            model.section("Appearance").unwrap().rows,
            vec![Row::Color {
                label: "Theme",
                hex: "#123456".to_string(),
            }]
        );
        let selected: Vec<_> = model
            .section("App Icon")
            .unwrap()
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::IconChoice {
                    icon,
                    selected: true,
                    ..
                } => Some(*icon),
                _ => None,
            })
            .collect();
        assert_eq!(selected, vec![AppIcon::DeviceIcon]);
    }

    #[test]
    fn add_wifi_presents_generator_sheet() {
        let mut navigation = NavigationState::default();
        navigation.handle_action(SettingsAction::AddWifiNetwork).unwrap();
        assert!(navigation.wifi_code_generator_presented);

        navigation.dismiss_wifi_code_generator();
        assert!(!navigation.wifi_code_generator_presented);
    }

    #[test]
    fn wifi_payload_requires_presented_sheet() {
        let credentials = WifiCredentials {
            ssid: "Home".to_string(),
            password: Some("hunter22".to_string()),
            security: crate::wifi::WifiSecurity::Wpa,
            hidden: false,
        };
        let mut navigation = NavigationState::default();
        assert!(navigation.wifi_code_payload(&credentials).is_err());

        navigation.handle_action(SettingsAction::AddWifiNetwork).unwrap();
        assert_eq!(
            navigation.wifi_code_payload(&credentials).unwrap(),
            "WIFI:T:WPA;S:Home;P:hunter22;;"
        );

        navigation.dismiss_wifi_code_generator();
        assert!(navigation.wifi_code_payload(&credentials).is_err());
    }

    #[test]
    fn security_actions_are_unsupported() {
        let mut navigation = NavigationState::default();
        assert!(matches!(
            navigation.handle_action(SettingsAction::MarkAsLost),
            Err(Error::Unsupported("Mark As Lost"))
        ));
        assert!(navigation
            .handle_action(SettingsAction::UpdatePasscode)
            .is_err());
        assert!(!navigation.wifi_code_generator_presented);
    }
}
