//! User settings for fleetdesk
//!
//! Display preferences persisted as JSON next to the data directory.

use serde::{Deserialize, Serialize};

use super::paths::FleetPaths;
use crate::error::{FleetError, FleetResult};

/// User settings for fleetdesk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in report and fare displays
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Name recorded in the "Exported by" line of report exports
    #[serde(default)]
    pub exported_by: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₱".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            exported_by: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file
    /// doesn't exist yet
    pub fn load_or_create(paths: &FleetPaths) -> FleetResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FleetError::Config(format!("Failed to read settings: {}", e)))?;
            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FleetError::Config(format!("Malformed settings file: {}", e)))?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FleetPaths) -> FleetResult<()> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), json)
            .map_err(|e| FleetError::Config(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "₱");
        assert!(settings.exported_by.is_empty());
    }

    #[test]
    fn test_load_or_create_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());

        // First load creates the file with defaults
        let created = Settings::load_or_create(&paths).unwrap();
        assert!(paths.settings_file().exists());

        // Second load reads it back
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, created.currency_symbol);
    }

    #[test]
    fn test_partial_settings_file_gets_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{ "exported_by": "Juan" }"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.exported_by, "Juan");
        assert_eq!(settings.currency_symbol, "₱");
    }
}
