//! Typed appearance preferences on top of a [`PreferenceStore`].

use crate::db::PreferenceStore;
use crate::error::Result;
use crate::models::{AccentColor, AppIcon};

/// Storage key for the accent colour
pub const ACCENT_COLOR_KEY: &str = "UI_CUSTOM_ACCENT_COLOR_V1";
/// Storage key for the selected app icon
pub const APP_ICON_KEY: &str = "UI_CUSTOM_APP_ICON_V1";

/// Appearance values rendered by the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppearancePreferences {
    pub accent_color: AccentColor,
    pub app_icon: AppIcon,
}

/// Platform hook that swaps the launcher icon
pub trait IconHost: Send + Sync {
    /// `None` restores the primary icon
    fn set_alternate_icon_name(&self, name: Option<&str>) -> Result<()>;
}

/// Preference service injected into the screen
pub struct Preferences<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn accent_color(&self) -> Result<AccentColor> {
        let Some(raw) = self.store.get(ACCENT_COLOR_KEY).await? else {
            return Ok(AccentColor::default());
        };
        Ok(raw.parse().unwrap_or_else(|error| {
            tracing::warn!("Ignoring stored accent colour {raw:?}: {error}");
            AccentColor::default()
        }))
    }

    pub async fn set_accent_color(&self, color: AccentColor) -> Result<()> {
        self.store.set(ACCENT_COLOR_KEY, &color.to_hex()).await
    }

    /// Forget the stored colour so the default applies again
    pub async fn reset_accent_color(&self) -> Result<()> {
        self.store.remove(ACCENT_COLOR_KEY).await?;
        Ok(())
    }

    pub async fn app_icon(&self) -> Result<AppIcon> {
        let Some(raw) = self.store.get(APP_ICON_KEY).await? else {
            return Ok(AppIcon::default());
        };
        Ok(raw.parse().unwrap_or_else(|error| {
            tracing::warn!("Ignoring stored app icon {raw:?}: {error}");
            AppIcon::default()
        }))
    }

    pub async fn set_app_icon(&self, icon: AppIcon) -> Result<()> {
        self.store.set(APP_ICON_KEY, icon.as_str()).await
    }

    pub async fn appearance(&self) -> Result<AppearancePreferences> {
        Ok(AppearancePreferences {
            accent_color: self.accent_color().await?,
            app_icon: self.app_icon().await?,
        })
    }

    /// Persist `icon` and apply it through the platform icon host.
    pub async fn select_app_icon(&self, icon: AppIcon, host: &dyn IconHost) -> Result<()> {
        self.set_app_icon(icon).await?;
        host.set_alternate_icon_name(icon.alternate_icon_name())?;
        tracing::info!("App icon changed to {icon}");
        Ok(())
    }
}
