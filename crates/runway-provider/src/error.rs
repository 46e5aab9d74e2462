use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Provider already registered: {name}")]
    Duplicate { name: String },

    #[error("Provider not found: {name}")]
    NotFound { name: String },
}

impl RegistryError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}

/// Failure surfaced by [`crate::Provider::detect_versions`].
///
/// Absence of a version manager is never reported through this type; it is
/// an empty detection result instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("IO error reading {} ({kind}): {message}", .path.display())]
    Io {
        path: PathBuf,
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl DetectError {
    pub fn io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{DetectError, RegistryError};

    #[test]
    fn registry_error_display_names_the_provider() {
        assert_eq!(
            RegistryError::duplicate("nvm").to_string(),
            "Provider already registered: nvm"
        );
        assert_eq!(
            RegistryError::not_found("volta").to_string(),
            "Provider not found: volta"
        );
    }

    #[test]
    fn io_constructor_keeps_path_and_kind() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

        let mapped = DetectError::io("/home/user/.nvm/versions/node", &err);

        assert!(matches!(
            mapped,
            DetectError::Io { ref path, kind, ref message }
                if *path == PathBuf::from("/home/user/.nvm/versions/node")
                    && kind == std::io::ErrorKind::PermissionDenied
                    && message.contains("denied")
        ));
        assert!(mapped.to_string().starts_with("IO error reading /home/user/.nvm/versions/node"));
    }
}
