//! Logging setup shared by TurboCommerce binaries.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Config-friendly log settings
//! - `LogConfig` - The `[logging]` section of tool configuration
//! - `init` - Installs the process-wide `tracing` subscriber

mod logging;

pub use logging::*;
