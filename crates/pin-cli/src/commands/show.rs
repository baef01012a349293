use pin_core::screen::ScreenModel;

use crate::commands::common::{ensure_loaded, format_screen_lines, CommandContext};
use crate::error::CliError;

pub async fn run_show(context: &CommandContext, as_json: bool) -> Result<(), CliError> {
    let preferences = context.preferences().await?;
    let controller = context.controller()?;

    let outcome = controller.refresh().await;
    let state = controller.state();
    ensure_loaded(outcome, &state)?;

    let model = ScreenModel::build(&state, &preferences.appearance().await?);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        for line in format_screen_lines(&model) {
            println!("{line}");
        }
    }

    Ok(())
}
