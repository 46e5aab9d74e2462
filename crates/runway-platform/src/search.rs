use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Every `binary` on `path_var`, in PATH order, skipping anything that lives
/// in `exclude_dir`.
///
/// `exclude_dir` is Runway's own shims directory: a shim is not a system
/// install. Entries reached through symlinks are reported once, at their
/// first PATH position.
#[must_use]
pub fn search_path(
    binary: &str,
    path_var: Option<&OsStr>,
    exclude_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let Some(path_var) = path_var else {
        return Vec::new();
    };
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let matches = match which::which_in_all(binary, Some(path_var), cwd) {
        Ok(matches) => matches,
        Err(error) => {
            log::debug!("PATH search for {binary} failed: {error}");
            return Vec::new();
        }
    };

    let excluded = exclude_dir.map(canonical);
    let mut seen = HashSet::new();
    matches
        .filter(|candidate| {
            let in_excluded = excluded.as_ref().is_some_and(|excluded| {
                candidate
                    .parent()
                    .is_some_and(|parent| canonical(parent) == *excluded)
            });
            if in_excluded {
                log::debug!("Ignoring shim {}", candidate.display());
            }
            !in_excluded
        })
        .filter(|candidate| seen.insert(canonical(candidate)))
        .collect()
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
