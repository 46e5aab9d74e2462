use std::path::PathBuf;
use std::sync::Arc;

use runway_node::{FnmProvider, NvmProvider};
use runway_provider::{Provider, Registry, RegistryError};
use runway_python::PyenvProvider;
use runway_ruby::{RbenvProvider, UruProvider};
use runway_system::SystemProvider;

use crate::settings::Settings;

/// Every built-in provider, in registration order.
pub fn builtin_providers(shims_dir: Option<PathBuf>) -> Vec<Arc<dyn Provider>> {
    vec![
        Arc::new(NvmProvider::new()),
        Arc::new(FnmProvider::new()),
        Arc::new(SystemProvider::node(shims_dir.clone())),
        Arc::new(PyenvProvider::new()),
        Arc::new(SystemProvider::python(shims_dir.clone())),
        Arc::new(RbenvProvider::new()),
        Arc::new(UruProvider::new()),
        Arc::new(SystemProvider::ruby(shims_dir)),
    ]
}

/// Register `providers` into `registry`, skipping the names in
/// `settings.disabled_providers`. Returns how many were registered.
///
/// # Errors
/// Stops at the first [`RegistryError::Duplicate`]. Built-in names are
/// unique, so a duplicate means a provider was added twice.
pub fn register_providers(
    registry: &Registry,
    providers: Vec<Arc<dyn Provider>>,
    settings: &Settings,
) -> Result<usize, RegistryError> {
    let mut registered = 0;
    for provider in providers {
        if settings.is_disabled(provider.name()) {
            log::debug!("Skipping disabled provider {}", provider.name());
            continue;
        }
        registry.register(provider)?;
        registered += 1;
    }
    Ok(registered)
}

/// # Errors
/// See [`register_providers`].
pub fn register_builtin(
    registry: &Registry,
    settings: &Settings,
    shims_dir: Option<PathBuf>,
) -> Result<usize, RegistryError> {
    register_providers(registry, builtin_providers(shims_dir), settings)
}
