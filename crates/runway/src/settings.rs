use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use runway_platform::AppPaths;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub debug_logging: bool,

    #[serde(default = "default_max_log_size_bytes")]
    pub max_log_size_bytes: u64,

    /// Overrides the shims directory excluded from PATH searches.
    #[serde(default)]
    pub shims_dir: Option<PathBuf>,

    /// Provider names left out of the registry.
    #[serde(default)]
    pub disabled_providers: Vec<String>,
}

fn default_max_log_size_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            max_log_size_bytes: default_max_log_size_bytes(),
            shims_dir: None,
            disabled_providers: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        let Ok(paths) = AppPaths::new() else {
            return Self::default();
        };
        Self::load_from(&paths.settings_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|error| {
                log::warn!("Ignoring invalid settings file {}: {error}", path.display());
                Self::default()
            }),
            Err(error) => {
                log::warn!("Could not read settings file {}: {error}", path.display());
                Self::default()
            }
        }
    }

    /// The shims directory: explicit setting first, then the platform default.
    pub fn resolved_shims_dir(&self) -> Option<PathBuf> {
        self.shims_dir
            .clone()
            .or_else(|| AppPaths::new().ok().map(|paths| paths.shims_dir()))
    }

    pub fn is_disabled(&self, provider: &str) -> bool {
        self.disabled_providers.iter().any(|name| name == provider)
    }
}
