use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RegistryError;
use crate::provider::Provider;

/// Concurrent-safe map of providers keyed by [`Provider::name`].
///
/// Every query returns an owned copy, so results never observe later
/// registrations. Iteration order of `list`, `get_all` and `get_by_runtime`
/// is unspecified.
#[derive(Default)]
pub struct Registry {
    providers: RwLock<HashMap<String, Arc<dyn Provider>>>,
}

static DEFAULT_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry. Starts empty and lives until exit.
#[must_use]
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A writer never leaves the map half-updated, so a poisoned lock still
    // guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn Provider>>> {
        self.providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn Provider>>> {
        self.providers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert `provider` under its name.
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if the name is taken; the
    /// registry is left unchanged.
    pub fn register(&self, provider: Arc<dyn Provider>) -> Result<(), RegistryError> {
        let name = provider.name();
        let mut providers = self.write();
        if providers.contains_key(name) {
            return Err(RegistryError::duplicate(name));
        }
        providers.insert(name.to_string(), provider);
        Ok(())
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no provider has this name.
    pub fn unregister(&self, name: &str) -> Result<(), RegistryError> {
        self.write()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RegistryError::not_found(name))
    }

    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no provider has this name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Provider>, RegistryError> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(name))
    }

    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    #[must_use]
    pub fn get_by_runtime(&self, runtime: &str) -> Vec<Arc<dyn Provider>> {
        self.read()
            .values()
            .filter(|provider| provider.runtime() == runtime)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn get_all(&self) -> Vec<Arc<dyn Provider>> {
        self.read().values().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.list();
        names.sort_unstable();
        f.debug_struct("Registry").field("providers", &names).finish()
    }
}
