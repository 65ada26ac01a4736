use std::fs;

use serde::Deserialize;

const SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:3000".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
}

/// Defaults, then `catalog.toml`, then environment overrides. The CLI flag
/// handled in `main` wins over all of these.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.server_url {
                    settings.server_url = v;
                }
            }
            Err(err) => tracing::warn!("ignoring malformed {SETTINGS_FILE}: {err}"),
        }
    }

    if let Ok(v) = std::env::var("CATALOG_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    settings
}
