//! The recursive pattern-collapse walk
//!
//! Traversal is depth-first, group before deeper group, so the order in
//! which decisions are consumed is fully determined by the static shape of
//! the catalog. That is what makes per-seed reproducibility independent of
//! incidental evaluation order.

use crate::catalog::{Catalog, PatternId, TemplateId};
use crate::io::error::{Result, invalid_parameter};
use crate::model::resolved::ResolvedPart;
use crate::random::IndexSource;

/// Collapse one pattern into a concrete part using the given source
///
/// Pure given the source state: the same source at the same point always
/// yields the same choice. The returned tree owns all of its data; nothing
/// aliases back into the catalog.
///
/// # Errors
///
/// Returns an error if a handle is missing from the catalog or if a finite
/// source exhausts before every choice is made.
pub fn resolve_pattern(
    catalog: &Catalog,
    id: PatternId,
    choices: &mut dyn IndexSource,
) -> Result<ResolvedPart> {
    let pattern = catalog.pattern(id)?;
    let mut part = materialize_template(catalog, pattern.base)?;

    if !pattern.colors.is_empty() {
        let index = choices.next_index(pattern.colors.len())?;
        if let Some(name) = pattern.colors.get(index) {
            part.color = name.to_string();
        }
    }

    for group in &pattern.groups {
        let index = choices.next_index(group.alternative_count())?;
        let pairs = group.pairs_at(index).ok_or_else(|| {
            invalid_parameter("alternative", &index, &"chosen index has no alternative row")
        })?;
        for (anchor, alternative) in pairs {
            let child = resolve_pattern(catalog, alternative, choices)?;
            part.attach(anchor, child);
        }
    }

    Ok(part)
}

/// Deep-clone a template and its fixed children into a resolved part
///
/// Fixed attachments carry no choices, so they materialize without touching
/// the decision source.
fn materialize_template(catalog: &Catalog, id: TemplateId) -> Result<ResolvedPart> {
    let template = catalog.template(id)?;
    let mut part = ResolvedPart::from_template(template);
    for (anchor, child) in &template.children {
        part.attach(*anchor, materialize_template(catalog, *child)?);
    }
    Ok(part)
}
