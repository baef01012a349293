//! Wi-Fi provisioning payload shown by the QR code sheet.
//!
//! The device scans a code encoding the `WIFI:` URI scheme understood by
//! common QR readers: `WIFI:T:WPA;S:<ssid>;P:<password>;;`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WifiSecurity {
    #[default]
    Wpa,
    Wep,
    Open,
}

impl WifiSecurity {
    const fn code(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::Open => "nopass",
        }
    }
}

impl FromStr for WifiSecurity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" | "wpa3" => Ok(Self::Wpa),
            "wep" => Ok(Self::Wep),
            "open" | "none" | "nopass" => Ok(Self::Open),
            other => Err(Error::InvalidInput(format!(
                "unknown Wi-Fi security: {other}"
            ))),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: Option<String>,
    pub security: WifiSecurity,
    pub hidden: bool,
}

impl fmt::Debug for WifiCredentials {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("security", &self.security)
            .field("hidden", &self.hidden)
            .finish()
    }
}

impl WifiCredentials {
    /// Encode the credentials for the provisioning QR code.
    pub fn payload(&self) -> Result<String> {
        if self.ssid.is_empty() {
            return Err(Error::InvalidInput("SSID must not be empty".to_string()));
        }

        let mut payload = format!(
            "WIFI:T:{};S:{};",
            self.security.code(),
            escape(&self.ssid)
        );
        match (self.security, self.password.as_deref()) {
            (WifiSecurity::Open, _) => {}
            (_, Some(password)) if !password.is_empty() => {
                payload.push_str(&format!("P:{};", escape(password)));
            }
            _ => {
                return Err(Error::InvalidInput(
                    "a password is required for secured networks".to_string(),
                ))
            }
        }
        if self.hidden {
            payload.push_str("H:true;");
        }
        payload.push(';');
        Ok(payload)
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(ssid: &str, password: Option<&str>, security: WifiSecurity) -> WifiCredentials {
        WifiCredentials {
            ssid: ssid.to_string(),
            password: password.map(str::to_string),
            security,
            hidden: false,
        }
    }

    #[test]
    fn wpa_payload_includes_password() {
        let payload = credentials("Home", Some("hunter22"), WifiSecurity::Wpa)
            .payload()
            .unwrap();
        assert_eq!(payload, "WIFI:T:WPA;S:Home;P:hunter22;;");
    }

    #[test]
    fn open_network_omits_password() {
        let payload = credentials("Cafe", Some("ignored"), WifiSecurity::Open)
            .payload()
            .unwrap();
        assert_eq!(payload, "WIFI:T:nopass;S:Cafe;;");
    }

    #[test]
    fn hidden_network_is_flagged() {
        let mut creds = credentials("Lab", Some("pw"), WifiSecurity::Wep);
        creds.hidden = true;
        assert_eq!(creds.payload().unwrap(), "WIFI:T:WEP;S:Lab;P:pw;H:true;;");
    }

    #[test]
    fn special_characters_are_escaped() {
        let payload = credentials(r#"My;Net:"5G""#, Some(r"a\b,c"), WifiSecurity::Wpa)
            .payload()
            .unwrap();
        assert_eq!(payload, r#"WIFI:T:WPA;S:My\;Net\:\"5G\";P:a\\b\,c;;"#);
    }

    #[test]
    fn rejects_missing_ssid_or_password() {
        assert!(credentials("", Some("pw"), WifiSecurity::Wpa).payload().is_err());
        assert!(credentials("Home", None, WifiSecurity::Wpa).payload().is_err());
        assert!(credentials("Home", Some(""), WifiSecurity::Wpa).payload().is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", credentials("Home", Some("hunter22"), WifiSecurity::Wpa));
        assert!(!rendered.contains("hunter22"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn security_parses_common_spellings() {
        assert_eq!("WPA2".parse::<WifiSecurity>().unwrap(), WifiSecurity::Wpa);
        assert_eq!("none".parse::<WifiSecurity>().unwrap(), WifiSecurity::Open);
        assert!("psk".parse::<WifiSecurity>().is_err());
    }
}
