use runway_provider::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Not a version: {version}")]
    InvalidVersion { version: String },

    #[error("Failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use runway_provider::RegistryError;

    use super::AppError;

    #[test]
    fn registry_errors_display_transparently() {
        let error = AppError::from(RegistryError::duplicate("nvm"));

        assert_eq!(error.to_string(), "Provider already registered: nvm");
    }

    #[test]
    fn invalid_version_names_the_input() {
        let error = AppError::InvalidVersion {
            version: "latest".to_string(),
        };

        assert_eq!(error.to_string(), "Not a version: latest");
    }
}
