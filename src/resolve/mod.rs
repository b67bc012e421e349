//! Resolution of declarative patterns into concrete part trees

/// The recursive pattern-collapse walk
pub mod resolver;

pub use resolver::resolve_pattern;

use crate::catalog::{Catalog, PatternId};
use crate::io::error::Result;
use crate::model::resolved::ResolvedPart;
use crate::random::{SeededStream, SystemSource};

/// Collapse a pattern into a concrete part tree
///
/// With a seed the output is reproducible: the same seed over the same
/// catalog always yields a structurally identical tree. Without one, each
/// call draws fresh system randomness and produces a different bot.
///
/// # Errors
///
/// Returns an error if the seed cannot be turned into a stream, if the
/// stream runs out of bits before every choice is made, or if the pattern
/// references handles missing from the catalog.
pub fn resolve_bot(
    catalog: &Catalog,
    root: PatternId,
    seed: Option<&str>,
) -> Result<ResolvedPart> {
    match seed {
        Some(seed) => {
            let mut stream = SeededStream::derive(seed)?;
            resolve_pattern(catalog, root, &mut stream)
        }
        None => {
            let mut source = SystemSource::new();
            resolve_pattern(catalog, root, &mut source)
        }
    }
}
