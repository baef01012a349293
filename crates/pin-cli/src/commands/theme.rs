use pin_core::AccentColor;

use crate::cli::ThemeCommands;
use crate::commands::common::CommandContext;
use crate::error::CliError;

pub async fn run_theme(
    context: &CommandContext,
    command: Option<ThemeCommands>,
) -> Result<(), CliError> {
    let preferences = context.preferences().await?;

    match command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => {}
        ThemeCommands::Set { color } => {
            let color = color.parse::<AccentColor>()?;
            preferences.set_accent_color(color).await?;
            tracing::info!("Accent colour set to {}", color.to_hex());
        }
        ThemeCommands::Reset => preferences.reset_accent_color().await?,
    }

    println!("{}", preferences.accent_color().await?.to_hex());
    Ok(())
}
