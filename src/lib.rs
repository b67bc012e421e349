//! Seeded procedural generation of composite robot avatars
//!
//! A declarative catalog of interchangeable visual parts is collapsed into a
//! concrete part tree by drawing uniform decisions from a deterministic
//! seeded stream, so the same seed string always reproduces the same bot.

#![forbid(unsafe_code)]

/// Arena catalog of templates and patterns, plus the built-in robot palette
pub mod catalog;
/// Input/output operations and error handling
pub mod io;
/// Part, anchor, and pattern data model
pub mod model;
/// Deterministic and system-backed decision sources
pub mod random;
/// Compositing of resolved part trees into raster images
pub mod render;
/// Resolution of declarative patterns into concrete part trees
pub mod resolve;

pub use io::error::{GeneratorError, Result};
pub use resolve::resolve_bot;
