use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::commands::HideWindow;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.\d+(?:\.\d+)?)").expect("version pattern should compile")
});

/// First `N.N` or `N.N.N` in `output`.
///
/// Handles the usual shapes: `v20.11.0`, `Python 3.12.1`,
/// `ruby 3.2.2p53 (2023-03-30 revision e51014f9c0) [x86_64-linux]`.
#[must_use]
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_PATTERN
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Run `<exe> --version` and parse the reported version.
///
/// Blocks until the process exits. Returns `None` when the executable cannot
/// be started, exits unsuccessfully, or prints nothing recognisable.
#[must_use]
pub fn probe_version(exe: &Path) -> Option<String> {
    let output = match Command::new(exe).arg("--version").hide_window().output() {
        Ok(output) => output,
        Err(error) => {
            log::debug!("Failed to run {} --version: {error}", exe.display());
            return None;
        }
    };

    if !output.status.success() {
        log::debug!(
            "{} --version exited with {}",
            exe.display(),
            output.status
        );
        return None;
    }

    // Python 2 prints its version on stderr.
    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_version(&stdout)
        .or_else(|| extract_version(&String::from_utf8_lossy(&output.stderr)))
}
