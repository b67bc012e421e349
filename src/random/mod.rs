//! Deterministic and system-backed decision sources
//!
//! Resolution is polymorphic over one capability: "give me a uniform index
//! in `[0, bound)`". The seeded stream implementation makes a bot
//! reproducible from a string; the system source is the non-reproducible
//! "surprise me" mode.

/// The decision-source capability and the system-randomness implementation
pub mod source;
/// Finite bit stream derived deterministically from a seed string
pub mod stream;

pub use source::{IndexSource, SystemSource};
pub use stream::SeededStream;
