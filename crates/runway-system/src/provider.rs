use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

use runway_platform::{probe_version, search_path};
use runway_provider::{DetectError, DetectedVersion, Provider, runtime};

#[derive(Debug, Clone, Copy)]
struct Descriptor {
    name: &'static str,
    display_name: &'static str,
    runtime: &'static str,
    binaries: &'static [&'static str],
    manual_unix: &'static str,
    manual_windows: &'static str,
}

const NODE: Descriptor = Descriptor {
    name: "system-node",
    display_name: "Node.js (system install)",
    runtime: runtime::NODE,
    binaries: &["node"],
    manual_unix: "Remove Node.js with the package manager that installed it \
                  (for example `brew uninstall node` or `sudo apt remove nodejs`). \
                  Installs from the nodejs.org .pkg live in /usr/local/bin and \
                  /usr/local/lib/node_modules.",
    manual_windows: "Uninstall \"Node.js\" from Settings > Apps, or with the package \
                     manager that installed it (winget, scoop or choco).",
};

const PYTHON: Descriptor = Descriptor {
    name: "system-python",
    display_name: "Python (system install)",
    runtime: runtime::PYTHON,
    binaries: &["python3", "python"],
    manual_unix: "Remove Python with the package manager that installed it \
                  (for example `brew uninstall python`). Do not remove the Python \
                  shipped with your operating system; other system tools depend on it.",
    manual_windows: "Uninstall \"Python <version>\" from Settings > Apps, or with the \
                     package manager that installed it. The Microsoft Store alias can be \
                     disabled under App execution aliases.",
};

const RUBY: Descriptor = Descriptor {
    name: "system-ruby",
    display_name: "Ruby (system install)",
    runtime: runtime::RUBY,
    binaries: &["ruby"],
    manual_unix: "Remove Ruby with the package manager that installed it \
                  (for example `brew uninstall ruby`). Leave the Ruby shipped with \
                  macOS in /usr/bin in place.",
    manual_windows: "Uninstall \"Ruby <version>\" (RubyInstaller) from Settings > Apps.",
};

/// Runtime executables found on `PATH`, excluding Runway's shims directory.
#[derive(Debug, Clone)]
pub struct SystemProvider {
    descriptor: Descriptor,
    shims_dir: Option<PathBuf>,
    path_var: Option<OsString>,
}

impl SystemProvider {
    fn from_descriptor(descriptor: Descriptor, shims_dir: Option<PathBuf>) -> Self {
        Self {
            descriptor,
            shims_dir,
            path_var: None,
        }
    }

    #[must_use]
    pub fn node(shims_dir: Option<PathBuf>) -> Self {
        Self::from_descriptor(NODE, shims_dir)
    }

    #[must_use]
    pub fn python(shims_dir: Option<PathBuf>) -> Self {
        Self::from_descriptor(PYTHON, shims_dir)
    }

    #[must_use]
    pub fn ruby(shims_dir: Option<PathBuf>) -> Self {
        Self::from_descriptor(RUBY, shims_dir)
    }

    /// Search `path_var` instead of the process `PATH`.
    #[must_use]
    pub fn with_path_var(mut self, path_var: impl Into<OsString>) -> Self {
        self.path_var = Some(path_var.into());
        self
    }

    fn candidates(&self) -> Vec<PathBuf> {
        let path_var = self
            .path_var
            .clone()
            .or_else(|| std::env::var_os("PATH"));
        let mut seen = HashSet::new();

        self.descriptor
            .binaries
            .iter()
            .flat_map(|binary| {
                search_path(binary, path_var.as_deref(), self.shims_dir.as_deref())
            })
            .filter(|candidate| {
                seen.insert(std::fs::canonicalize(candidate).unwrap_or_else(|_| candidate.clone()))
            })
            .collect()
    }
}

impl Provider for SystemProvider {
    fn name(&self) -> &'static str {
        self.descriptor.name
    }

    fn display_name(&self) -> &'static str {
        self.descriptor.display_name
    }

    fn runtime(&self) -> &'static str {
        self.descriptor.runtime
    }

    fn is_present(&self) -> bool {
        !self.candidates().is_empty()
    }

    fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError> {
        Ok(self
            .candidates()
            .into_iter()
            .filter_map(|exe| {
                let Some(version) = probe_version(&exe) else {
                    log::debug!(
                        "{}: could not read a version from {}",
                        self.name(),
                        exe.display()
                    );
                    return None;
                };
                Some(DetectedVersion::validated(version, exe, self.name()))
            })
            .collect())
    }

    fn manual_instructions(&self) -> String {
        if cfg!(windows) {
            self.descriptor.manual_windows.to_string()
        } else {
            self.descriptor.manual_unix.to_string()
        }
    }
}
