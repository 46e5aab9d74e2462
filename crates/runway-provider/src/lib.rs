//! Migration provider contract and registry for Runway.
//!
//! A provider detects runtime versions installed by one third-party version
//! manager (nvm, pyenv, rbenv, ...). Providers are assembled into a
//! [`Registry`] which answers lookups by name and by runtime:
//! - [`Provider`]: the capability contract every detector implements.
//! - [`DetectedVersion`]: one discovered installation.
//! - [`Registry`]: a concurrent-safe map of providers keyed by name.
//! - [`global`]: free functions delegating to the process-wide default registry.

mod error;
pub mod global;
mod provider;
mod registry;
mod types;

pub use error::{DetectError, RegistryError};
pub use provider::{Provider, runtime};
pub use registry::{Registry, default_registry};
pub use types::DetectedVersion;
