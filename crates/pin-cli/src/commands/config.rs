use pin_core::config::{ClientConfig, ConfigOverrides};
use serde::Serialize;

use crate::commands::common::CommandContext;
use crate::error::CliError;

const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Serialize)]
pub struct ConfigReport {
    pub path: String,
    pub api_base_url: Option<String>,
    pub access_token: Option<&'static str>,
    pub request_timeout_secs: u64,
}

impl ConfigReport {
    pub fn new(context: &CommandContext, config: &ClientConfig) -> Self {
        Self {
            path: context.config_path.display().to_string(),
            api_base_url: config.api_base_url.clone(),
            access_token: config.access_token.as_ref().map(|_| REDACTED),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Writes the file config with `--api-url`, `--token` and `timeout` layered on top.
pub fn run_config_init(context: &CommandContext, timeout: Option<u64>) -> Result<(), CliError> {
    let existing = ClientConfig::load_from_path(&context.config_path)?;
    let updated = existing.merge(ConfigOverrides {
        request_timeout_secs: timeout,
        ..context.flag_overrides()
    });

    updated.save_to_path(&context.config_path)?;
    println!("{}", context.config_path.display());
    Ok(())
}

pub fn run_config_show(context: &CommandContext) -> Result<(), CliError> {
    let config = context.client_config()?;
    let report = ConfigReport::new(context, &config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
