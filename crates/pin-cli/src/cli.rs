use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::aot::Shell;
use pin_core::wifi::WifiSecurity;
use pin_core::AppIcon;

#[derive(Parser)]
#[command(name = "pin")]
#[command(about = "Inspect and adjust Pin companion settings from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to local preferences database
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    /// Companion API base URL (overrides config and PIN_API_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Bearer token for the companion API (overrides config and PIN_ACCESS_TOKEN)
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load account and device data and print the settings screen
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or change the accent colour
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// List or select the app icon
    Icon {
        #[command(subcommand)]
        command: Option<IconCommands>,
    },
    /// Toggle the Vision beta feature
    Beta {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Print the Wi-Fi provisioning payload for the device to scan
    Wifi {
        /// Network name
        #[arg(long)]
        ssid: String,
        /// Network password (omit for open networks)
        #[arg(long)]
        password: Option<String>,
        /// Network security
        #[arg(long, value_enum, default_value_t = SecurityChoice::Wpa)]
        security: SecurityChoice,
        /// Network does not broadcast its SSID
        #[arg(long)]
        hidden: bool,
    },
    /// Configure the companion API client
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Directory to install the script into, under the shell's conventional
        /// file name (stdout when omitted)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current accent colour
    Show,
    /// Set the accent colour (#rgb or #rrggbb)
    Set { color: String },
    /// Restore the default accent colour
    Reset,
}

#[derive(Subcommand)]
pub enum IconCommands {
    /// List available icons
    List,
    /// Select an icon
    Set {
        #[arg(value_enum)]
        icon: IconChoice,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write API settings (--api-url, --token) to the config file
    Init {
        /// Request timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,
    },
    /// Print the resolved configuration (token redacted)
    Show,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub const fn enabled(self) -> bool {
        matches!(self, Self::On)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum IconChoice {
    Initial,
    DeviceIcon,
}

impl From<IconChoice> for AppIcon {
    fn from(choice: IconChoice) -> Self {
        match choice {
            IconChoice::Initial => Self::Initial,
            IconChoice::DeviceIcon => Self::DeviceIcon,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SecurityChoice {
    Wpa,
    Wep,
    Open,
}

impl From<SecurityChoice> for WifiSecurity {
    fn from(choice: SecurityChoice) -> Self {
        match choice {
            SecurityChoice::Wpa => Self::Wpa,
            SecurityChoice::Wep => Self::Wep,
            SecurityChoice::Open => Self::Open,
        }
    }
}
