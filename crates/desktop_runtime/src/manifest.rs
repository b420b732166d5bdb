//! Application manifest: the launcher catalog behind desktop icons, the taskbar and the start menu.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{config::ConfigError, model::WindowId};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Manifest schema version understood by this runtime.
pub const APP_MANIFEST_SCHEMA_VERSION: u32 = 1;
/// Icon used for windows whose app is missing from the manifest.
pub const FALLBACK_APP_ICON: &str = "fas fa-cogs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One launchable application.
pub struct AppEntry {
    /// Display name; also the source of the window id.
    pub name: String,
    /// Content loaded into the window's embedded frame.
    pub launch_reference: String,
    /// Symbolic icon identifier.
    pub icon: String,
    /// Show an icon on the desktop.
    #[serde(default)]
    pub show_on_desktop: bool,
    /// Keep an icon on the taskbar even when not running.
    #[serde(default)]
    pub pinned_to_taskbar: bool,
}

impl AppEntry {
    /// Window id this app opens under.
    pub fn window_id(&self) -> WindowId {
        WindowId::from_app_name(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered app catalog.
pub struct AppManifest {
    /// Catalog format version.
    pub schema_version: u32,
    /// Entries in display order.
    #[serde(rename = "app", default)]
    pub apps: Vec<AppEntry>,
}

impl AppManifest {
    /// Returns the catalog compiled into the crate from `apps.manifest.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalog`] if the generated catalog cannot be decoded.
    pub fn builtin() -> Result<Self, ConfigError> {
        let manifest: Self = serde_json::from_str(APP_MANIFEST_CATALOG_JSON)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parses and validates a manifest in the `[[app]]` TOML format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and [`ConfigError::InvalidManifest`] for
    /// an unknown schema version, a blank name, or two names deriving the same window id.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let manifest: Self = toml::from_str(raw)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != APP_MANIFEST_SCHEMA_VERSION {
            return Err(ConfigError::InvalidManifest(format!(
                "unsupported schema version {}",
                self.schema_version
            )));
        }
        let mut seen = BTreeSet::new();
        for app in &self.apps {
            let id = app.window_id();
            if id.as_str().is_empty() {
                return Err(ConfigError::InvalidManifest("blank app name".to_string()));
            }
            if !seen.insert(id.clone()) {
                return Err(ConfigError::InvalidManifest(format!(
                    "`{}` collides with another app on window id `{id}`",
                    app.name
                )));
            }
        }
        Ok(())
    }

    /// Looks up an app by display name.
    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.apps.iter().find(|app| app.name == name)
    }

    /// Looks up the app that opens under `id`.
    pub fn by_window_id(&self, id: &WindowId) -> Option<&AppEntry> {
        self.apps.iter().find(|app| &app.window_id() == id)
    }

    /// Icon for `name`, or [`FALLBACK_APP_ICON`] when unlisted.
    pub fn icon_for(&self, name: &str) -> &str {
        self.get(name)
            .map(|app| app.icon.as_str())
            .unwrap_or(FALLBACK_APP_ICON)
    }

    /// Apps with a desktop icon.
    pub fn desktop_apps(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter().filter(|app| app.show_on_desktop)
    }

    /// Apps pinned to the taskbar.
    pub fn pinned_apps(&self) -> impl Iterator<Item = &AppEntry> {
        self.apps.iter().filter(|app| app.pinned_to_taskbar)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_catalog_lists_seven_apps_in_order() {
        let manifest = AppManifest::builtin().expect("builtin manifest");
        let names: Vec<_> = manifest.apps.iter().map(|app| app.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "File Explorer",
                "Edge Browser",
                "Telegram",
                "Microsoft Store",
                "Recycle Bin",
                "VS Code",
                "Settings",
            ]
        );
        let pinned: Vec<_> = manifest.pinned_apps().map(|app| app.name.as_str()).collect();
        assert_eq!(
            pinned,
            vec!["File Explorer", "Edge Browser", "Telegram", "Microsoft Store"]
        );
        assert_eq!(manifest.desktop_apps().count(), 5);
        assert_eq!(
            manifest.get("Telegram").map(|app| app.launch_reference.as_str()),
            Some("apps/telegram.html")
        );
    }

    #[test]
    fn unknown_apps_fall_back_to_the_generic_icon() {
        let manifest = AppManifest::builtin().expect("builtin manifest");
        assert_eq!(manifest.icon_for("Settings"), "fas fa-cog");
        assert_eq!(manifest.icon_for("Paint"), FALLBACK_APP_ICON);
        assert_eq!(
            manifest
                .by_window_id(&WindowId::from_app_name("Microsoft Store"))
                .map(|app| app.name.as_str()),
            Some("Microsoft Store")
        );
    }

    #[test]
    fn whitespace_collisions_are_rejected() {
        let raw = r#"
schema_version = 1

[[app]]
name = "VS Code"
launch_reference = "apps/vscode.html"
icon = "fas fa-code"

[[app]]
name = "VSCode"
launch_reference = "apps/other.html"
icon = "fas fa-code"
"#;
        assert!(matches!(
            AppManifest::from_toml_str(raw),
            Err(ConfigError::InvalidManifest(_))
        ));
    }

    #[test]
    fn unknown_schema_version_is_rejected() {
        assert!(matches!(
            AppManifest::from_toml_str("schema_version = 2"),
            Err(ConfigError::InvalidManifest(_))
        ));
        assert!(matches!(
            AppManifest::from_toml_str("schema_version = [1]"),
            Err(ConfigError::Parse(_))
        ));
    }
}
