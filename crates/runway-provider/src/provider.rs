use crate::error::DetectError;
use crate::types::DetectedVersion;

/// Runtime identifiers shared by the built-in providers.
pub mod runtime {
    pub const NODE: &str = "node";
    pub const PYTHON: &str = "python";
    pub const RUBY: &str = "ruby";
}

/// A detector for versions installed by one third-party version manager.
///
/// Implementations hold no mutable state; every method is safe to call from
/// any thread and repeated calls to the identity methods return the same value.
pub trait Provider: Send + Sync {
    /// Unique lowercase identifier, used as the registry key.
    fn name(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// The runtime this provider detects versions for. Not unique.
    fn runtime(&self) -> &'static str;

    /// Cheap check for the version manager itself. May report a false
    /// negative for non-standard install locations.
    fn is_present(&self) -> bool;

    /// Scan known locations for installed versions.
    ///
    /// Finding nothing is `Ok(vec![])`, including when a prerequisite such as
    /// the home directory cannot be resolved.
    ///
    /// # Errors
    /// Returns [`DetectError`] for unexpected I/O failures while scanning.
    fn detect_versions(&self) -> Result<Vec<DetectedVersion>, DetectError>;

    fn can_auto_uninstall(&self) -> bool {
        false
    }

    /// Ready-to-run command that removes `version`, or `None` when this
    /// provider cannot uninstall automatically. Never `Some("")`.
    fn uninstall_command(&self, _version: &str) -> Option<String> {
        None
    }

    /// Human-readable fallback guidance. Never empty.
    fn manual_instructions(&self) -> String;
}
