//! Part, anchor, and pattern data model
//!
//! This module contains the declarative building blocks of a bot:
//! - Relative attachment points with draw ordering
//! - Part templates with sockets, flips, and fixed attachments
//! - Choice groups and pattern nodes forming the decision graph
//! - The concrete resolved part tree handed to rendering

/// Relative attachment points
pub mod anchor;
/// Declarative pattern nodes and choice groups
pub mod pattern;
/// Concrete resolved part trees
pub mod resolved;
/// Declarative part templates and asset identity
pub mod template;

pub use anchor::Anchor;
pub use pattern::{ChoiceGroup, ColorSet, PatternNode};
pub use resolved::ResolvedPart;
pub use template::{AssetRef, PartTemplate};
