//! The decision-source capability and the system-randomness implementation

use crate::io::error::{Result, invalid_parameter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform index decisions
///
/// Chosen once at the top of a resolution call and threaded through the
/// whole recursive walk. Implementations are stateful and must not be
/// shared between concurrent resolutions.
pub trait IndexSource {
    /// Draw a uniformly distributed index in `[0, bound)`
    ///
    /// # Errors
    ///
    /// Returns an error if `bound` is zero, or if a finite source has been
    /// exhausted.
    fn next_index(&mut self, bound: usize) -> Result<usize>;
}

/// Fresh operating-system randomness, different on every call
///
/// The unseeded mode: inexhaustible and deliberately non-reproducible,
/// mutually exclusive with the seeded guarantee.
#[derive(Debug)]
pub struct SystemSource {
    rng: StdRng,
}

impl SystemSource {
    /// Create a source seeded from operating-system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexSource for SystemSource {
    fn next_index(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(invalid_parameter(
                "bound",
                &bound,
                &"an index draw needs at least one alternative",
            ));
        }
        Ok(self.rng.random_range(0..bound))
    }
}
