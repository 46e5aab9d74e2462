use std::path::{Path, PathBuf};

use runway_platform::scan_version_dirs;
use runway_provider::{DetectError, DetectedVersion, Provider, runtime};

#[derive(Debug, Clone, Default)]
pub struct RbenvProvider {
    root: Option<PathBuf>,
}

impl RbenvProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn root(&self) -> Option<PathBuf> {
        self.root.clone().or_else(|| {
            std::env::var_os("RBENV_ROOT")
                .map(PathBuf::from)
                .or_else(|| runway_platform::home_dir().map(|home| home.join(".rbenv")))
        })
    }
}

fn ruby_executable(version_dir: &Path) -> PathBuf {
    let bin = version_dir.join("bin");
    if cfg!(windows) {
        bin.join("ruby.exe")
    } else {
        bin.join("ruby")
    }
}

impl Provider for RbenvProvider {
    fn name(&self) -> &'static str {
        "rbenv"
    }

    fn display_name(&self) -> &'static str {
        "rbenv"
    }

    fn runtime(&self) -> &'static str {
        runtime::RUBY
    }

    fn is_present(&self) -> bool {
        self.root().is_some_and(|root| root.join("versions").is_dir())
    }

    fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError> {
        let Some(root) = self.root() else {
            return Ok(Vec::new());
        };

        let versions = root.join("versions");
        let found = scan_version_dirs(&versions, ruby_executable)
            .map_err(|error| DetectError::io(&versions, &error))?;

        Ok(found
            .into_iter()
            .map(|dir| DetectedVersion::inferred(dir.version, dir.executable, self.name()))
            .collect())
    }

    fn can_auto_uninstall(&self) -> bool {
        true
    }

    fn uninstall_command(&self, version: &str) -> Option<String> {
        Some(format!("rbenv uninstall -f {version}"))
    }

    fn manual_instructions(&self) -> String {
        "Run `rbenv uninstall <version>`, or delete the version directory under \
         $RBENV_ROOT/versions. To remove rbenv entirely, delete $RBENV_ROOT (usually ~/.rbenv) \
         and the `rbenv init` line in your shell profile."
            .to_string()
    }
}
