use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use runway_provider::{DetectError, DetectedVersion, Provider, runtime};

const MANIFEST: &str = "rubies.json";

/// Rubies registered with uru. uru does not install rubies itself, so the
/// versions come from its `rubies.json` registry.
#[derive(Debug, Clone, Default)]
pub struct UruProvider {
    uru_home: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(rename = "Rubies", default)]
    rubies: BTreeMap<String, RegisteredRuby>,
}

#[derive(Debug, Deserialize)]
struct RegisteredRuby {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "TagLabel", default)]
    tag_label: String,
    #[serde(rename = "Exe", default = "default_exe")]
    exe: String,
    #[serde(rename = "Home")]
    home: PathBuf,
}

fn default_exe() -> String {
    "ruby".to_string()
}

impl UruProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_home(uru_home: impl Into<PathBuf>) -> Self {
        Self {
            uru_home: Some(uru_home.into()),
        }
    }

    fn uru_home(&self) -> Option<PathBuf> {
        self.uru_home.clone().or_else(|| {
            std::env::var_os("URU_HOME")
                .map(PathBuf::from)
                .or_else(|| runway_platform::home_dir().map(|home| home.join(".uru")))
        })
    }
}

fn load_manifest(path: &Path) -> Option<Manifest> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            log::debug!("uru: cannot read {}: {error}", path.display());
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(manifest) => Some(manifest),
        Err(error) => {
            log::warn!("uru: ignoring unparsable {}: {error}", path.display());
            None
        }
    }
}

/// `2.7.2-p137` becomes `2.7.2`.
fn version_from_id(id: &str) -> &str {
    id.split_once("-p").map_or(id, |(version, _)| version)
}

fn ruby_executable(ruby: &RegisteredRuby) -> PathBuf {
    if cfg!(windows) && Path::new(&ruby.exe).extension().is_none() {
        ruby.home.join(format!("{}.exe", ruby.exe))
    } else {
        ruby.home.join(&ruby.exe)
    }
}

impl Provider for UruProvider {
    fn name(&self) -> &'static str {
        "uru"
    }

    fn display_name(&self) -> &'static str {
        "uru"
    }

    fn runtime(&self) -> &'static str {
        runtime::RUBY
    }

    fn is_present(&self) -> bool {
        self.uru_home().is_some_and(|home| home.is_dir())
    }

    fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError> {
        let Some(manifest) = self
            .uru_home()
            .and_then(|home| load_manifest(&home.join(MANIFEST)))
        else {
            return Ok(Vec::new());
        };

        Ok(manifest
            .rubies
            .values()
            .map(|ruby| {
                let source = if ruby.tag_label.is_empty() {
                    self.name().to_string()
                } else {
                    format!("{} ({})", self.name(), ruby.tag_label)
                };
                DetectedVersion::inferred(version_from_id(&ruby.id), ruby_executable(ruby), source)
            })
            .collect())
    }

    fn manual_instructions(&self) -> String {
        "uru only registers rubies installed elsewhere. Run `uru admin rm <tag>` to \
         unregister a ruby, then remove the ruby itself with the installer or package manager \
         that installed it. To remove uru entirely, delete the uru binary and ~/.uru."
            .to_string()
    }
}
