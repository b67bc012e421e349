//! Input/output operations and error handling
//!
//! This module contains the replaceable outer surfaces of the generator:
//! - Error types shared across the crate
//! - Command-line interface and batch orchestration
//! - Runtime configuration defaults
//! - Progress display and PNG export

/// Command-line interface and batch bot generation
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types for generator operations
pub mod error;
/// PNG export for composited bots
pub mod image;
/// Batch progress display
pub mod progress;
