#[cfg(debug_assertions)]
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use simplelog::{CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, WriteLogger};
use std::fs::OpenOptions;
use std::path::Path;
use runway_platform::AppPaths;

fn trim_log_file_if_oversized(log_path: &Path, max_log_size: u64) {
    if let Ok(metadata) = std::fs::metadata(log_path)
        && metadata.len() > max_log_size
        && let Ok(contents) = std::fs::read(log_path)
    {
        let half = contents.len() / 2;
        let keep_from = contents[half..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(half, |pos| half + pos + 1);
        let _ = std::fs::write(log_path, &contents[keep_from..]);
    }
}

fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Log to `<data dir>/debug.log` and, in debug builds, to the terminal.
///
/// Warnings always reach the file; `debug_enabled` raises the level to Debug.
pub fn init_logging(debug_enabled: bool, max_log_size: u64) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("runway")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    #[cfg(debug_assertions)]
    loggers.push(TermLogger::new(
        level_for(debug_enabled),
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));

    if let Ok(paths) = AppPaths::new()
        && paths.ensure_dirs().is_ok()
    {
        let log_path = paths.log_file();
        trim_log_file_if_oversized(&log_path, max_log_size);

        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
        }
    }

    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
    set_logging_level(debug_enabled);

    log::debug!("Debug logging enabled");
}

pub fn set_logging_level(debug_enabled: bool) {
    log::set_max_level(level_for(debug_enabled));
}

#[cfg(test)]
mod tests {
    use super::{set_logging_level, trim_log_file_if_oversized};

    #[test]
    fn trim_log_file_keeps_recent_half() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("debug.log");
        let original = "line-1\nline-2\nline-3\nline-4\nline-5\n";
        std::fs::write(&log_path, original).expect("test log file should be written");

        trim_log_file_if_oversized(&log_path, 10);

        let trimmed =
            std::fs::read_to_string(&log_path).expect("trimmed log file should be readable");
        assert!(trimmed.starts_with("line-4\n") || trimmed.starts_with("line-3\n"));
        assert!(!trimmed.contains("line-1"));
    }

    #[test]
    fn small_log_file_is_left_alone() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("debug.log");
        std::fs::write(&log_path, "line-1\n").expect("test log file should be written");

        trim_log_file_if_oversized(&log_path, 1024);

        assert_eq!(
            std::fs::read_to_string(&log_path).expect("log file should be readable"),
            "line-1\n"
        );
    }

    #[test]
    fn set_logging_level_updates_global_level() {
        set_logging_level(true);
        assert_eq!(log::max_level(), log::LevelFilter::Debug);

        set_logging_level(false);
        assert_eq!(log::max_level(), log::LevelFilter::Warn);
    }
}
