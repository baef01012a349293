//! Pin CLI - Inspect and adjust Ai Pin companion settings from the terminal

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::beta::run_beta;
use crate::commands::common::CommandContext;
use crate::commands::completions::run_completions;
use crate::commands::config::{run_config_init, run_config_show};
use crate::commands::icon::run_icon;
use crate::commands::show::run_show;
use crate::commands::theme::run_theme;
use crate::commands::wifi::run_wifi;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "pin=info".parse::<Directive>() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        command,
        db_path,
        api_url,
        token,
    } = Cli::parse();
    let context = || CommandContext::resolve(db_path, api_url, token);

    match command {
        Some(Commands::Show { json }) => run_show(&context()?, json).await?,
        Some(Commands::Theme { command }) => run_theme(&context()?, command).await?,
        Some(Commands::Icon { command }) => run_icon(&context()?, command).await?,
        Some(Commands::Beta { state }) => run_beta(&context()?, state.enabled()).await?,
        Some(Commands::Wifi {
            ssid,
            password,
            security,
            hidden,
        }) => run_wifi(ssid, password, security.into(), hidden)?,
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { timeout } => run_config_init(&context()?, timeout)?,
            ConfigCommands::Show => run_config_show(&context()?)?,
        },
        Some(Commands::Completions { shell, output_dir }) => {
            run_completions(shell, output_dir.as_deref())?;
        }
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
