//! Compositing of resolved part trees into raster images
//!
//! The rendering collaborator consumes a resolved tree and produces pixels:
//! for each node, placement is the parent origin minus the socket offset,
//! children with a negative draw-order delta are drawn before the node's
//! own asset, structural nodes draw nothing, and flip flags mirror the
//! asset about its own box before placement.

/// Caching loader for part assets
pub mod assets;
/// Placement math and canvas compositing
pub mod compose;

pub use assets::AssetLibrary;
pub use compose::{RenderOptions, compose_bot};
