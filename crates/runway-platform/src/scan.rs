use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

static VERSION_DIR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?\d+\.\d+").expect("version directory pattern should compile")
});

/// A version directory whose executable exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionDir {
    /// Directory name with any leading `v` removed.
    pub version: String,
    pub dir: PathBuf,
    pub executable: PathBuf,
}

#[must_use]
pub fn looks_like_version(name: &str) -> bool {
    VERSION_DIR_NAME.is_match(name)
}

/// List version directories under `dir`.
///
/// `executable` maps a version directory to the executable expected inside
/// it; directories whose executable is missing, or whose name is not
/// version-like (`system`, `miniconda3-latest`, ...), are skipped. Results
/// are in file-name order.
///
/// # Errors
/// A missing `dir` yields an empty list. Any other failure to read `dir`
/// is returned.
pub fn scan_version_dirs<F>(dir: &Path, executable: F) -> io::Result<Vec<VersionDir>>
where
    F: Fn(&Path) -> PathBuf,
{
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::debug!("Version directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(error) => return Err(error),
    };

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !looks_like_version(&name) {
            log::debug!("Skipping non-version directory {}", path.display());
            continue;
        }

        let exe = executable(&path);
        if !exe.is_file() {
            log::debug!("No executable at {}", exe.display());
            continue;
        }

        found.push(VersionDir {
            version: name.strip_prefix('v').unwrap_or(&name).to_string(),
            dir: path,
            executable: exe,
        });
    }

    found.sort_by(|a, b| a.dir.file_name().cmp(&b.dir.file_name()));
    Ok(found)
}
