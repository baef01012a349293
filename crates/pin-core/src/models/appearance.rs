//! Appearance preferences: accent colour and app icon

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Icon name that maps to the bundle's primary icon
pub const DEFAULT_APP_ICON_NAME: &str = "";

/// Opaque RGB accent colour (no alpha channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl AccentColor {
    /// The accent colour used until the user picks one
    pub const DEFAULT: Self = Self::rgb(0xF2, 0x5D, 0x2A);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Lowercase `#rrggbb` form used for storage and display
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for AccentColor {
    type Err = Error;

    /// Accepts `#rgb` or `#rrggbb`, with or without the leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidInput(format!("invalid colour: {trimmed}")));
        }

        let channel = |hex: &str| {
            u8::from_str_radix(hex, 16)
                .map_err(|_| Error::InvalidInput(format!("invalid colour: {trimmed}")))
        };

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            8 => Err(Error::InvalidInput(
                "accent colour must not carry an alpha channel".to_string(),
            )),
            _ => Err(Error::InvalidInput(format!("invalid colour: {trimmed}"))),
        }
    }
}

impl Serialize for AccentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Display metadata for an app icon choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescription {
    pub title: &'static str,
    /// Alternate icon name registered with the platform
    pub icon_name: &'static str,
    /// Preview image asset
    pub image_name: &'static str,
}

/// App icon options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AppIcon {
    /// Bundle default
    #[default]
    Initial,
    /// Icon showing the device itself
    DeviceIcon,
}

impl AppIcon {
    /// All choices in picker order
    pub const ALL: [Self; 2] = [Self::Initial, Self::DeviceIcon];

    pub const fn description(self) -> IconDescription {
        match self {
            Self::Initial => IconDescription {
                title: "Sensors",
                icon_name: DEFAULT_APP_ICON_NAME,
                image_name: "AppIconPreview",
            },
            Self::DeviceIcon => IconDescription {
                title: "Ai Pin",
                icon_name: "DeviceAppIcon",
                image_name: "DeviceAppIconPreview",
            },
        }
    }

    /// Raw value persisted in the preference store
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::DeviceIcon => "deviceIcon",
        }
    }

    /// Name to hand to the platform, `None` restores the primary icon.
    pub fn alternate_icon_name(self) -> Option<&'static str> {
        let name = self.description().icon_name;
        if name == DEFAULT_APP_ICON_NAME {
            None
        } else {
            Some(name)
        }
    }
}

impl fmt::Display for AppIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AppIcon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s.trim())
            .ok_or_else(|| Error::InvalidInput(format!("unknown app icon: {s}")))
    }
}
