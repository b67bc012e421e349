//! Arena catalog of templates and patterns
//!
//! Templates and patterns are stored in append-only arenas and referenced
//! by stable handles, so reuse of a sub-template across many parents is
//! read-only sharing rather than reference aliasing. Handles are only
//! handed out by insertion, which makes the pattern graph acyclic by
//! construction: a node can only reference entries inserted before it.

/// Built-in robot part palette
pub mod palette;

use crate::io::error::{Result, unknown_handle};
use crate::model::pattern::PatternNode;
use crate::model::template::PartTemplate;

/// Stable handle to a template in the catalog arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TemplateId(usize);

/// Stable handle to a pattern in the catalog arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatternId(usize);

/// Immutable catalog of declared parts and choice points
///
/// Built once at startup and read-only thereafter; only resolution produces
/// new data, and it clones rather than aliases everything it takes from
/// here.
#[derive(Debug, Default)]
pub struct Catalog {
    templates: Vec<PartTemplate>,
    patterns: Vec<PatternNode>,
}

impl Catalog {
    /// Create an empty catalog
    pub const fn new() -> Self {
        Self {
            templates: Vec::new(),
            patterns: Vec::new(),
        }
    }

    /// Insert a template, validating its fixed child handles
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::UnknownHandle`] if a fixed child
    /// references a template not yet in the catalog.
    pub fn add_template(&mut self, template: PartTemplate) -> Result<TemplateId> {
        for (_, child) in &template.children {
            self.template(*child)?;
        }
        self.templates.push(template);
        Ok(TemplateId(self.templates.len() - 1))
    }

    /// Insert a pattern, validating every handle it references
    ///
    /// Defects surface here, at catalog construction, so resolution never
    /// encounters a dangling reference or a defective group.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::UnknownHandle`] if the base template
    /// or any choice-group alternative is not yet in the catalog.
    pub fn add_pattern(&mut self, pattern: PatternNode) -> Result<PatternId> {
        self.template(pattern.base)?;
        for group in &pattern.groups {
            for referenced in group.referenced_patterns() {
                self.pattern(referenced)?;
            }
        }
        self.patterns.push(pattern);
        Ok(PatternId(self.patterns.len() - 1))
    }

    /// Look up a template by handle
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::UnknownHandle`] for an out-of-range
    /// handle.
    pub fn template(&self, id: TemplateId) -> Result<&PartTemplate> {
        self.templates
            .get(id.0)
            .ok_or_else(|| unknown_handle("template", id.0, self.templates.len()))
    }

    /// Look up a pattern by handle
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::UnknownHandle`] for an out-of-range
    /// handle.
    pub fn pattern(&self, id: PatternId) -> Result<&PatternNode> {
        self.patterns
            .get(id.0)
            .ok_or_else(|| unknown_handle("pattern", id.0, self.patterns.len()))
    }

    /// Insert a horizontally mirrored copy of a template
    ///
    /// This is how mirrored left-side limb catalogs are derived from a
    /// single right-side catalog at construction time; the source entry is
    /// never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::UnknownHandle`] for an out-of-range
    /// handle.
    pub fn flip_horizontal(&mut self, id: TemplateId) -> Result<TemplateId> {
        let flipped = self.template(id)?.flipped_horizontal();
        self.add_template(flipped)
    }

    /// Insert a vertically mirrored copy of a template
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::UnknownHandle`] for an out-of-range
    /// handle.
    pub fn flip_vertical(&mut self, id: TemplateId) -> Result<TemplateId> {
        let flipped = self.template(id)?.flipped_vertical();
        self.add_template(flipped)
    }

    /// Number of templates in the arena
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Number of patterns in the arena
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
