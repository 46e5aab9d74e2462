use std::path::{Path, PathBuf};

use runway_platform::scan_version_dirs;
use runway_provider::{DetectError, DetectedVersion, Provider, runtime};

const VERSIONS_DIR: &str = "node-versions";

/// Node versions installed by fnm (Fast Node Manager).
#[derive(Debug, Clone, Default)]
pub struct FnmProvider {
    fnm_dir: Option<PathBuf>,
}

impl FnmProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dir(fnm_dir: impl Into<PathBuf>) -> Self {
        Self {
            fnm_dir: Some(fnm_dir.into()),
        }
    }

    fn fnm_dir(&self) -> Option<PathBuf> {
        self.fnm_dir.clone().or_else(detect_fnm_dir)
    }
}

fn detect_fnm_dir() -> Option<PathBuf> {
    let env_dir = std::env::var_os("FNM_DIR").map(PathBuf::from);
    select_fnm_dir(env_dir, fnm_dir_candidates())
}

fn select_fnm_dir(env_dir: Option<PathBuf>, candidates: Vec<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = env_dir.filter(|path| path.exists()) {
        return Some(path);
    }

    candidates
        .iter()
        .find(|candidate| candidate.join(VERSIONS_DIR).is_dir())
        .cloned()
        .or_else(|| candidates.into_iter().find(|candidate| candidate.exists()))
}

fn fnm_dir_candidates() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(xdg_data) = std::env::var_os("XDG_DATA_HOME") {
        paths.push(PathBuf::from(xdg_data).join("fnm"));
    }

    if let Some(home) = runway_platform::home_dir() {
        paths.push(home.join(".local").join("share").join("fnm"));
        paths.push(home.join(".fnm"));
    }

    if let Some(data_dir) = dirs::data_local_dir() {
        paths.push(data_dir.join("fnm"));
    }

    paths
}

#[cfg(not(windows))]
fn node_executable(version_dir: &Path) -> PathBuf {
    version_dir.join("installation").join("bin").join("node")
}

#[cfg(windows)]
fn node_executable(version_dir: &Path) -> PathBuf {
    version_dir.join("installation").join("node.exe")
}

impl Provider for FnmProvider {
    fn name(&self) -> &'static str {
        "fnm"
    }

    fn display_name(&self) -> &'static str {
        "fnm (Fast Node Manager)"
    }

    fn runtime(&self) -> &'static str {
        runtime::NODE
    }

    fn is_present(&self) -> bool {
        self.fnm_dir()
            .is_some_and(|dir| dir.join(VERSIONS_DIR).is_dir())
    }

    fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError> {
        let Some(fnm_dir) = self.fnm_dir() else {
            log::debug!("fnm: no data directory found, nothing to detect");
            return Ok(Vec::new());
        };

        let versions = fnm_dir.join(VERSIONS_DIR);
        let found = scan_version_dirs(&versions, node_executable)
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
        Some(format!("fnm uninstall {}", version.trim_start_matches('v')))
    }

    fn manual_instructions(&self) -> String {
        if cfg!(windows) {
            "Run `fnm uninstall <version>`, or delete the version folder under \
             %LOCALAPPDATA%\\fnm\\node-versions. To remove fnm entirely, uninstall it with \
             the package manager you installed it with (winget, scoop or choco) and remove \
             `fnm env` from your PowerShell profile."
                .to_string()
        } else {
            "Run `fnm uninstall <version>`, or delete the version directory under \
             $FNM_DIR/node-versions. To remove fnm entirely, delete the fnm binary and data \
             directory and remove the `fnm env` line from your shell profile."
                .to_string()
        }
    }
}
