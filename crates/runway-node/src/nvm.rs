use std::path::{Path, PathBuf};

use runway_platform::scan_version_dirs;
use runway_provider::{DetectError, DetectedVersion, Provider, runtime};

/// Node versions installed by nvm (or NVM for Windows).
#[derive(Debug, Clone, Default)]
pub struct NvmProvider {
    nvm_dir: Option<PathBuf>,
}

impl NvmProvider {
    /// Resolve the nvm directory from the environment on every call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dir(nvm_dir: impl Into<PathBuf>) -> Self {
        Self {
            nvm_dir: Some(nvm_dir.into()),
        }
    }

    fn nvm_dir(&self) -> Option<PathBuf> {
        self.nvm_dir.clone().or_else(detect_nvm_dir)
    }
}

#[cfg(not(windows))]
fn detect_nvm_dir() -> Option<PathBuf> {
    std::env::var_os("NVM_DIR")
        .map(PathBuf::from)
        .or_else(|| runway_platform::home_dir().map(|home| home.join(".nvm")))
}

#[cfg(windows)]
fn detect_nvm_dir() -> Option<PathBuf> {
    std::env::var_os("NVM_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::data_dir().map(|appdata| appdata.join("nvm")))
}

#[cfg(not(windows))]
fn versions_dir(nvm_dir: &Path) -> PathBuf {
    nvm_dir.join("versions").join("node")
}

#[cfg(windows)]
fn versions_dir(nvm_dir: &Path) -> PathBuf {
    nvm_dir.to_path_buf()
}

#[cfg(not(windows))]
fn node_executable(version_dir: &Path) -> PathBuf {
    version_dir.join("bin").join("node")
}

#[cfg(windows)]
fn node_executable(version_dir: &Path) -> PathBuf {
    version_dir.join("node.exe")
}

#[cfg(not(windows))]
fn marker(nvm_dir: &Path) -> PathBuf {
    nvm_dir.join("nvm.sh")
}

#[cfg(windows)]
fn marker(nvm_dir: &Path) -> PathBuf {
    nvm_dir.join("nvm.exe")
}

impl Provider for NvmProvider {
    fn name(&self) -> &'static str {
        "nvm"
    }

    fn display_name(&self) -> &'static str {
        "nvm (Node Version Manager)"
    }

    fn runtime(&self) -> &'static str {
        runtime::NODE
    }

    fn is_present(&self) -> bool {
        self.nvm_dir()
            .is_some_and(|dir| marker(&dir).is_file() || versions_dir(&dir).is_dir())
    }

    fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError> {
        let Some(nvm_dir) = self.nvm_dir() else {
            log::debug!("nvm: no home directory, nothing to detect");
            return Ok(Vec::new());
        };

        let versions = versions_dir(&nvm_dir);
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
        Some(format!("nvm uninstall {}", version.trim_start_matches('v')))
    }

    fn manual_instructions(&self) -> String {
        if cfg!(windows) {
            "Run `nvm uninstall <version>` in a new terminal, or delete the version folder \
             under %NVM_HOME%. To remove nvm entirely, uninstall \"NVM for Windows\" from \
             Settings > Apps."
                .to_string()
        } else {
            "Run `nvm uninstall <version>` in a shell where nvm is loaded, or delete the \
             version directory under $NVM_DIR/versions/node. To remove nvm entirely, delete \
             $NVM_DIR (usually ~/.nvm) and the NVM_DIR lines in your shell profile."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use runway_provider::Provider;

    use super::{NvmProvider, marker, node_executable, versions_dir};

    fn install(nvm_dir: &Path, version: &str) {
        let exe = node_executable(&versions_dir(nvm_dir).join(version));
        std::fs::create_dir_all(exe.parent().expect("executable has parent"))
            .expect("create version dir");
        std::fs::write(exe, "").expect("create node executable");
    }

    #[test]
    fn provider_metadata_is_stable() {
        let provider = NvmProvider::new();

        assert_eq!(provider.name(), "nvm");
        assert_eq!(provider.display_name(), "nvm (Node Version Manager)");
        assert_eq!(provider.runtime(), "node");
        assert!(provider.can_auto_uninstall());
        assert!(!provider.manual_instructions().is_empty());
    }

    #[test]
    fn uninstall_command_strips_v_prefix() {
        let provider = NvmProvider::new();

        assert_eq!(
            provider.uninstall_command("v20.11.0").as_deref(),
            Some("nvm uninstall 20.11.0")
        );
        assert_eq!(
            provider.uninstall_command("18.19.1").as_deref(),
            Some("nvm uninstall 18.19.1")
        );
    }

    #[test]
    fn missing_dir_is_absent_and_empty() {
        let root = tempfile::tempdir().expect("create temp dir");
        let provider = NvmProvider::with_dir(root.path().join(".nvm"));

        assert!(!provider.is_present());
        assert_eq!(provider.detect_versions(), Ok(Vec::new()));
    }

    #[test]
    fn marker_file_marks_nvm_present() {
        let root = tempfile::tempdir().expect("create temp dir");
        let nvm_dir = root.path().join(".nvm");
        std::fs::create_dir_all(&nvm_dir).expect("create nvm dir");
        std::fs::write(marker(&nvm_dir), "").expect("create marker");

        assert!(NvmProvider::with_dir(&nvm_dir).is_present());
    }

    #[test]
    fn detects_installed_versions() {
        let root = tempfile::tempdir().expect("create temp dir");
        let nvm_dir = root.path().join(".nvm");
        install(&nvm_dir, "v20.11.0");
        install(&nvm_dir, "v18.19.1");
        let provider = NvmProvider::with_dir(&nvm_dir);

        let detected = provider.detect_versions().expect("detection succeeds");

        assert!(provider.is_present());
        assert_eq!(detected.len(), 2);
        assert_eq!(detected[0].version, "18.19.1");
        assert_eq!(detected[1].version, "20.11.0");
        assert!(detected.iter().all(|v| v.source == "nvm" && !v.validated));
        assert_eq!(
            detected[1].path,
            node_executable(&versions_dir(&nvm_dir).join("v20.11.0"))
        );
    }
}
