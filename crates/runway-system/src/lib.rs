//! Runtimes installed outside any version manager, found on `PATH`.
//!
//! Versions reported here are validated: each executable is run with
//! `--version` and the output parsed.

mod provider;

pub use provider::SystemProvider;
