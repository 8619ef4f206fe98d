//! App configuration loaded from `mediaclean.ron` in the working directory.
//!
//! A missing file means defaults; a malformed file is logged and also
//! falls back to defaults, so a bad edit never blocks startup.

use std::fs;
use std::path::Path;

use app_logging::{app_info, app_warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "mediaclean.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root endpoint of the processing backend.
    pub server_url: String,
    /// Mirror log output into ./mediaclean.log in addition to the terminal.
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080/".to_string(),
            log_to_file: true,
        }
    }
}

pub fn load(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            app_warn!("Failed to read configuration from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            app_info!("Loaded configuration from {:?}", path);
            config
        }
        Err(err) => {
            app_warn!("Failed to parse configuration from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}
