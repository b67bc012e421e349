//! Declarative pattern nodes and choice groups

use crate::catalog::{PatternId, TemplateId};
use crate::io::error::{GeneratorError, Result};
use crate::model::anchor::Anchor;

/// Color name stamped onto parts whose pattern carries no color variation
pub const NO_COLOR: &str = "none";

/// Ordered set of color names a pattern may resolve to
///
/// Resolution picks exactly one name uniformly, independent of the
/// structural choices. The empty set is the sentinel for "no meaningful
/// color variation" and resolves to [`NO_COLOR`] without consuming a
/// decision.
#[derive(Clone, Debug, Default)]
pub struct ColorSet {
    names: Vec<String>,
}

impl ColorSet {
    /// Create the sentinel set with no color variation
    pub const fn none() -> Self {
        Self { names: Vec::new() }
    }

    /// Create a set from color names, in order
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    /// Number of colors in the set
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether this is the no-variation sentinel
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Color name at the given index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

/// One decision point pairing anchors with alternative sub-patterns
///
/// `Single` picks one of N alternatives for one anchor. `Linked` pairs K
/// anchors position-wise with rows of K alternatives and picks one shared
/// row index, so linked anchors (left and right eyes) always receive the
/// same pick.
#[derive(Clone, Debug)]
pub enum ChoiceGroup {
    /// Pick one of N alternatives, attached at a single anchor
    Single {
        /// Attachment point for the chosen alternative
        anchor: Anchor,
        /// Alternative patterns, one of which is chosen
        alternatives: Vec<PatternId>,
    },
    /// Pick one shared row index across K position-paired anchors
    Linked {
        /// Attachment points, paired position-wise with each row
        anchors: Vec<Anchor>,
        /// Alternative rows; every row holds exactly one pattern per anchor
        alternatives: Vec<Vec<PatternId>>,
    },
}

impl ChoiceGroup {
    /// Create a single-anchor choice over a flat list of alternatives
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MalformedChoiceGroup`] if no alternatives
    /// are supplied.
    pub fn single(anchor: Anchor, alternatives: Vec<PatternId>) -> Result<Self> {
        if alternatives.is_empty() {
            return Err(GeneratorError::MalformedChoiceGroup {
                anchors: 1,
                alternatives: 0,
                reason: "a choice group needs at least one alternative".to_string(),
            });
        }
        Ok(Self::Single {
            anchor,
            alternatives,
        })
    }

    /// Create a linked choice pairing anchors with alternative rows
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::MalformedChoiceGroup`] if anchors or rows
    /// are empty, or if any row does not hold exactly one pattern per
    /// anchor. Defective pairings are rejected here so resolution never has
    /// to drop anchors.
    pub fn linked(anchors: Vec<Anchor>, alternatives: Vec<Vec<PatternId>>) -> Result<Self> {
        if anchors.is_empty() || alternatives.is_empty() {
            return Err(GeneratorError::MalformedChoiceGroup {
                anchors: anchors.len(),
                alternatives: alternatives.len(),
                reason: "a linked choice needs anchors and at least one row".to_string(),
            });
        }
        for row in &alternatives {
            if row.len() != anchors.len() {
                return Err(GeneratorError::MalformedChoiceGroup {
                    anchors: anchors.len(),
                    alternatives: row.len(),
                    reason: "every row must hold exactly one pattern per anchor".to_string(),
                });
            }
        }
        Ok(Self::Linked {
            anchors,
            alternatives,
        })
    }

    /// Number of alternatives a decision selects among
    pub fn alternative_count(&self) -> usize {
        match self {
            Self::Single { alternatives, .. } => alternatives.len(),
            Self::Linked { alternatives, .. } => alternatives.len(),
        }
    }

    /// The `(anchor, pattern)` pairs selected by the given alternative index
    pub fn pairs_at(&self, index: usize) -> Option<Vec<(Anchor, PatternId)>> {
        match self {
            Self::Single {
                anchor,
                alternatives,
            } => alternatives.get(index).map(|&pattern| vec![(*anchor, pattern)]),
            Self::Linked {
                anchors,
                alternatives,
            } => alternatives.get(index).map(|row| {
                anchors
                    .iter()
                    .zip(row.iter())
                    .map(|(&anchor, &pattern)| (anchor, pattern))
                    .collect()
            }),
        }
    }

    /// All pattern handles referenced by this group, for validation
    pub fn referenced_patterns(&self) -> Vec<PatternId> {
        match self {
            Self::Single { alternatives, .. } => alternatives.clone(),
            Self::Linked { alternatives, .. } => {
                alternatives.iter().flatten().copied().collect()
            }
        }
    }
}

/// The recipe for one part: a base template plus its decision points
///
/// Choice groups resolve independently and in declaration order; each
/// alternative is itself a pattern, so resolving one node recursively
/// resolves all its descendants.
#[derive(Clone, Debug)]
pub struct PatternNode {
    /// Template cloned as the base of every resolution of this pattern
    pub base: TemplateId,
    /// Colors this pattern may resolve to
    pub colors: ColorSet,
    /// Decision points, resolved in declaration order
    pub groups: Vec<ChoiceGroup>,
}

impl PatternNode {
    /// Create a pattern with no color variation and no choices
    pub const fn new(base: TemplateId) -> Self {
        Self {
            base,
            colors: ColorSet::none(),
            groups: Vec::new(),
        }
    }

    /// Set the colors this pattern may resolve to
    #[must_use]
    pub fn with_colors(mut self, colors: ColorSet) -> Self {
        self.colors = colors;
        self
    }

    /// Append a decision point
    #[must_use]
    pub fn with_group(mut self, group: ChoiceGroup) -> Self {
        self.groups.push(group);
        self
    }
}
