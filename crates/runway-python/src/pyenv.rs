use std::path::{Path, PathBuf};

use runway_platform::scan_version_dirs;
use runway_provider::{DetectError, DetectedVersion, Provider, runtime};

/// Python versions installed by pyenv (or pyenv-win).
#[derive(Debug, Clone, Default)]
pub struct PyenvProvider {
    root: Option<PathBuf>,
}

impl PyenvProvider {
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
        self.root.clone().or_else(detect_pyenv_root)
    }
}

#[cfg(not(windows))]
fn detect_pyenv_root() -> Option<PathBuf> {
    std::env::var_os("PYENV_ROOT")
        .map(PathBuf::from)
        .or_else(|| runway_platform::home_dir().map(|home| home.join(".pyenv")))
}

#[cfg(windows)]
fn detect_pyenv_root() -> Option<PathBuf> {
    std::env::var_os("PYENV")
        .map(PathBuf::from)
        .or_else(|| {
            runway_platform::home_dir().map(|home| home.join(".pyenv").join("pyenv-win"))
        })
}

#[cfg(not(windows))]
fn python_executable(version_dir: &Path) -> PathBuf {
    let bin = version_dir.join("bin");
    let python3 = bin.join("python3");
    if python3.is_file() {
        python3
    } else {
        bin.join("python")
    }
}

#[cfg(windows)]
fn python_executable(version_dir: &Path) -> PathBuf {
    version_dir.join("python.exe")
}

impl Provider for PyenvProvider {
    fn name(&self) -> &'static str {
        "pyenv"
    }

    fn display_name(&self) -> &'static str {
        "pyenv"
    }

    fn runtime(&self) -> &'static str {
        runtime::PYTHON
    }

    fn is_present(&self) -> bool {
        self.root().is_some_and(|root| root.join("versions").is_dir())
    }

    fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError> {
        let Some(root) = self.root() else {
            log::debug!("pyenv: no home directory, nothing to detect");
            return Ok(Vec::new());
        };

        let versions = root.join("versions");
        let found = scan_version_dirs(&versions, python_executable)
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
        Some(format!("pyenv uninstall -f {version}"))
    }

    fn manual_instructions(&self) -> String {
        if cfg!(windows) {
            "Run `pyenv uninstall <version>`, or delete the version folder under \
             %USERPROFILE%\\.pyenv\\pyenv-win\\versions. To remove pyenv-win entirely, delete \
             %USERPROFILE%\\.pyenv and remove the PYENV, PYENV_HOME and PYENV_ROOT user \
             environment variables and their PATH entries."
                .to_string()
        } else {
            "Run `pyenv uninstall <version>`, or delete the version directory under \
             $PYENV_ROOT/versions. To remove pyenv entirely, delete $PYENV_ROOT (usually \
             ~/.pyenv) and the `pyenv init` lines in your shell profile."
                .to_string()
        }
    }
}
