use crate::commands::common::{ensure_loaded, CommandContext};
use crate::error::CliError;

pub async fn run_beta(context: &CommandContext, enabled: bool) -> Result<(), CliError> {
    let controller = context.controller()?;

    let outcome = controller.refresh().await;
    ensure_loaded(outcome, &controller.state())?;

    let was_enabled = controller.state().is_feature_beta_enabled;
    controller.set_feature_beta_enabled(enabled)?;

    println!("{}", beta_message(was_enabled, enabled));
    Ok(())
}

pub fn beta_message(was_enabled: bool, enabled: bool) -> String {
    let state = if enabled { "on" } else { "off" };
    if was_enabled == enabled {
        format!("Vision (Beta) is already {state}")
    } else {
        format!("Vision (Beta) turned {state} for this session (not saved to your account)")
    }
}
