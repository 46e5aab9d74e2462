//! Free functions over [`default_registry`].

use std::sync::Arc;

use crate::error::RegistryError;
use crate::provider::Provider;
use crate::registry::default_registry;

/// # Errors
/// See [`crate::Registry::register`].
pub fn register(provider: Arc<dyn Provider>) -> Result<(), RegistryError> {
    default_registry().register(provider)
}

/// # Errors
/// See [`crate::Registry::unregister`].
pub fn unregister(name: &str) -> Result<(), RegistryError> {
    default_registry().unregister(name)
}

/// # Errors
/// See [`crate::Registry::get`].
pub fn get(name: &str) -> Result<Arc<dyn Provider>, RegistryError> {
    default_registry().get(name)
}

#[must_use]
pub fn has(name: &str) -> bool {
    default_registry().has(name)
}

#[must_use]
pub fn get_by_runtime(runtime: &str) -> Vec<Arc<dyn Provider>> {
    default_registry().get_by_runtime(runtime)
}

#[must_use]
pub fn list() -> Vec<String> {
    default_registry().list()
}

#[must_use]
pub fn get_all() -> Vec<Arc<dyn Provider>> {
    default_registry().get_all()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::error::{DetectError, RegistryError};
    use crate::provider::Provider;
    use crate::types::DetectedVersion;

    struct GlobalProbe;

    impl Provider for GlobalProbe {
        fn name(&self) -> &'static str {
            "global-probe"
        }

        fn display_name(&self) -> &'static str {
            "Global Probe"
        }

        fn runtime(&self) -> &'static str {
            "global-probe-runtime"
        }

        fn is_present(&self) -> bool {
            false
        }

        fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError> {
            Ok(Vec::new())
        }

        fn manual_instructions(&self) -> String {
            "Nothing to remove.".to_string()
        }
    }

    // The default registry is shared by every test in this binary, so this
    // test only touches a name nothing else uses.
    #[test]
    fn free_functions_delegate_to_default_registry() {
        super::register(Arc::new(GlobalProbe)).expect("register probe");

        assert!(super::has("global-probe"));
        assert!(super::list().contains(&"global-probe".to_string()));
        assert!(
            super::get_all()
                .iter()
                .any(|provider| provider.name() == "global-probe")
        );
        assert_eq!(super::get_by_runtime("global-probe-runtime").len(), 1);
        assert_eq!(
            super::get("global-probe").expect("probe registered").name(),
            "global-probe"
        );
        assert_eq!(
            super::register(Arc::new(GlobalProbe)),
            Err(RegistryError::duplicate("global-probe"))
        );

        super::unregister("global-probe").expect("unregister probe");
        assert!(!super::has("global-probe"));
        assert!(super::get_by_runtime("global-probe-runtime").is_empty());
    }
}
