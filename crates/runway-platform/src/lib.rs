//! Filesystem, PATH and process helpers shared by Runway providers.

mod commands;
mod paths;
mod probe;
mod scan;
mod search;

pub use commands::HideWindow;
pub use paths::{AppPaths, AppPathsError, home_dir};
pub use probe::{extract_version, probe_version};
pub use scan::{VersionDir, looks_like_version, scan_version_dirs};
pub use search::search_path;
