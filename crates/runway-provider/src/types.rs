use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// One installation discovered by a provider.
///
/// `validated` is true only when `version` came from running the executable
/// itself; versions read from directory names are inferred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DetectedVersion {
    pub version: String,
    pub path: PathBuf,
    pub source: String,
    pub validated: bool,
}

impl DetectedVersion {
    #[must_use]
    pub fn inferred(
        version: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            path: path.into(),
            source: source.into(),
            validated: false,
        }
    }

    #[must_use]
    pub fn validated(
        version: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            validated: true,
            ..Self::inferred(version, path, source)
        }
    }
}

impl fmt::Display for DetectedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{} ({}) {}",
            self.version,
            self.source,
            self.path.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_version_source_and_path() {
        let detected = DetectedVersion::inferred("22.0.0", "/path/to/node", "nvm");

        assert_eq!(detected.to_string(), "v22.0.0 (nvm) /path/to/node");
    }

    #[test]
    fn display_keeps_decorated_source() {
        let detected = DetectedVersion::inferred("3.2.2", "/opt/ruby/bin/ruby", "uru (322)");

        assert_eq!(detected.to_string(), "v3.2.2 (uru (322)) /opt/ruby/bin/ruby");
    }

    #[test]
    fn constructors_set_validation_flag() {
        assert!(!DetectedVersion::inferred("20.11.0", "/a", "fnm").validated);
        assert!(DetectedVersion::validated("20.11.0", "/a", "system-node").validated);
    }

    #[test]
    fn serializes_all_fields() {
        let detected = DetectedVersion::validated("3.12.1", "/usr/bin/python3", "system-python");

        let value = serde_json::to_value(&detected).expect("detected version should serialize");

        assert_eq!(value["version"], "3.12.1");
        assert_eq!(value["path"], "/usr/bin/python3");
        assert_eq!(value["source"], "system-python");
        assert_eq!(value["validated"], true);
    }
}
