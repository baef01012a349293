use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pin_core::api::{ApiError, HttpCompanionApi};
use pin_core::config::{ClientConfig, ConfigOverrides};
use pin_core::db::{Database, LibSqlPreferenceStore};
use pin_core::preferences::{IconHost, Preferences};
use pin_core::screen::{Row, ScreenModel};
use pin_core::{RefreshOutcome, SettingsController, ViewState};

use crate::error::CliError;

const APP_DIR_NAME: &str = "pin";
const CONFIG_FILE_NAME: &str = "config.json";
const DB_FILE_NAME: &str = "preferences.db";

/// Global options shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub db_path: PathBuf,
    pub config_path: PathBuf,
    pub api_url: Option<String>,
    pub token: Option<String>,
}

impl CommandContext {
    pub fn resolve(
        db_path: Option<PathBuf>,
        api_url: Option<String>,
        token: Option<String>,
    ) -> Result<Self, CliError> {
        Ok(Self {
            db_path: resolve_db_path(db_path)?,
            config_path: resolve_config_path()?,
            api_url,
            token,
        })
    }

    /// Config file, then environment, then command-line flags.
    pub fn client_config(&self) -> Result<ClientConfig, CliError> {
        let config = ClientConfig::load_from_path(&self.config_path)?
            .merge(ConfigOverrides::from_env())
            .merge(self.flag_overrides());
        config.validate()?;
        Ok(config)
    }

    /// The global `--api-url` and `--token` flags
    pub fn flag_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_base_url: self.api_url.clone(),
            access_token: self.token.clone(),
            request_timeout_secs: None,
        }
    }

    pub async fn preferences(&self) -> Result<Preferences<LibSqlPreferenceStore>, CliError> {
        open_preferences(&self.db_path).await
    }

    pub fn controller(&self) -> Result<SettingsController<HttpCompanionApi>, CliError> {
        let config = self.client_config()?;
        let api = HttpCompanionApi::from_config(&config).map_err(|error| match error {
            ApiError::NotConfigured => CliError::ApiNotConfigured,
            other => CliError::Api(other),
        })?;
        tracing::debug!("Using companion API at {}", api.base_url());
        Ok(SettingsController::new(api))
    }
}

pub fn resolve_db_path(cli_db_path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(path) = cli_db_path.or_else(|| env::var_os("PIN_DB_PATH").map(PathBuf::from)) {
        return Ok(path);
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(DB_FILE_NAME))
        .ok_or_else(|| CliError::Config("Failed to resolve data directory".to_string()))
}

pub fn resolve_config_path() -> Result<PathBuf, CliError> {
    if let Some(path) = env::var_os("PIN_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or_else(|| CliError::Config("Failed to resolve config directory".to_string()))
}

pub async fn open_preferences(
    path: &Path,
) -> Result<Preferences<LibSqlPreferenceStore>, CliError> {
    let db = Database::open(path).await?;
    Ok(Preferences::new(LibSqlPreferenceStore::new(Arc::new(db))))
}

/// Terminal stand-in for the platform icon API
pub struct TerminalIconHost;

impl IconHost for TerminalIconHost {
    fn set_alternate_icon_name(&self, name: Option<&str>) -> pin_core::Result<()> {
        match name {
            Some(name) => tracing::info!("Alternate app icon requested: {name}"),
            None => tracing::info!("Primary app icon requested"),
        }
        Ok(())
    }
}

pub fn format_screen_lines(model: &ScreenModel) -> Vec<String> {
    let mut lines = vec![model.title.to_string()];
    if model.show_progress_overlay {
        lines.push("  Loading...".to_string());
    }

    for section in &model.sections {
        lines.push(String::new());
        lines.push(format!("[{}]", section.header));
        for row in &section.rows {
            lines.push(format!("  {}", format_row(row)));
        }
        if let Some(footer) = section.footer {
            lines.push(format!("  {footer}"));
        }
    }
    lines
}

fn format_row(row: &Row) -> String {
    match row {
        Row::Labeled { label, value } => format!("{label}: {value}"),
        Row::Toggle {
            label,
            on,
            disabled,
        } => {
            let state = if *on { "on" } else { "off" };
            if *disabled {
                format!("{label}: {state} (disabled)")
            } else {
                format!("{label}: {state}")
            }
        }
        Row::Button {
            label, destructive, ..
        } => {
            if *destructive {
                format!("<{label}> (destructive)")
            } else {
                format!("<{label}>")
            }
        }
        Row::Color { label, hex } => format!("{label}: {hex}"),
        Row::IconChoice {
            title,
            icon,
            selected,
            ..
        } => {
            let marker = if *selected { "*" } else { " " };
            format!("{marker} {title} ({icon})")
        }
    }
}

/// Turns a one-shot refresh into a command result.
///
/// A missing device record still lets the account sections print.
pub fn ensure_loaded(outcome: RefreshOutcome, state: &ViewState) -> Result<(), CliError> {
    match outcome {
        RefreshOutcome::Completed => Ok(()),
        RefreshOutcome::DeviceInfoFailed => {
            tracing::warn!("Device details are unavailable; showing account data only");
            Ok(())
        }
        RefreshOutcome::SubscriptionFailed if state.subscription.is_some() => Ok(()),
        RefreshOutcome::SubscriptionFailed => {
            Err(CliError::Refresh("the subscription request failed"))
        }
        RefreshOutcome::Cancelled => Err(CliError::Refresh("the refresh was cancelled")),
        RefreshOutcome::AlreadyRunning => {
            Err(CliError::Refresh("another refresh is already running"))
        }
    }
}
