use pin_core::AppIcon;

use crate::cli::IconCommands;
use crate::commands::common::{CommandContext, TerminalIconHost};
use crate::error::CliError;

pub async fn run_icon(
    context: &CommandContext,
    command: Option<IconCommands>,
) -> Result<(), CliError> {
    let preferences = context.preferences().await?;

    if let Some(IconCommands::Set { icon }) = command {
        preferences
            .select_app_icon(icon.into(), &TerminalIconHost)
            .await?;
    }

    for line in format_icon_lines(preferences.app_icon().await?) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_icon_lines(selected: AppIcon) -> Vec<String> {
    AppIcon::ALL
        .into_iter()
        .map(|icon| {
            let marker = if icon == selected { "*" } else { " " };
            format!("{marker} {icon:<12} {}", icon.description().title)
        })
        .collect()
}
