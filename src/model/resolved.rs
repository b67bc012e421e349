//! Concrete resolved part trees

use crate::model::anchor::Anchor;
use crate::model::pattern::NO_COLOR;
use crate::model::template::{AssetRef, PartTemplate};

/// One fully concrete, renderable part
///
/// Produced by resolution and exclusively owned by the caller; every field
/// is cloned out of the catalog rather than aliased, so later mutation of a
/// resolved tree can never corrupt the shared template graph.
#[derive(Clone, Debug)]
pub struct ResolvedPart {
    /// Asset identity, or `None` for purely structural parts
    pub asset: Option<AssetRef>,
    /// Width of the source asset in pixels
    pub width: u32,
    /// Height of the source asset in pixels
    pub height: u32,
    /// Alignment point under the parent's attachment anchor
    pub socket: Anchor,
    /// Mirror the drawn asset horizontally
    pub flip_x: bool,
    /// Mirror the drawn asset vertically
    pub flip_y: bool,
    /// Chosen color name, [`NO_COLOR`] when the pattern has no variation
    pub color: String,
    /// Attached children in declaration order (not draw order)
    pub children: Vec<(Anchor, ResolvedPart)>,
}

impl ResolvedPart {
    /// Clone a template into a fresh childless part
    ///
    /// The socket anchor is copied by value, so flips applied to the clone
    /// never reach back into the catalog.
    pub fn from_template(template: &PartTemplate) -> Self {
        Self {
            asset: template.asset.clone(),
            width: template.width,
            height: template.height,
            socket: template.socket,
            flip_x: template.flip_x,
            flip_y: template.flip_y,
            color: NO_COLOR.to_string(),
            children: Vec::new(),
        }
    }

    /// Whether this part draws nothing of its own
    pub const fn is_structural(&self) -> bool {
        self.asset.is_none()
    }

    /// Attach a resolved child, preserving declaration order
    pub fn attach(&mut self, anchor: Anchor, child: ResolvedPart) {
        self.children.push((anchor, child));
    }

    /// Children drawn before this part's own asset
    pub fn children_behind(&self) -> impl Iterator<Item = &(Anchor, ResolvedPart)> {
        self.children.iter().filter(|(anchor, _)| anchor.draws_behind())
    }

    /// Children drawn after this part's own asset
    pub fn children_in_front(&self) -> impl Iterator<Item = &(Anchor, ResolvedPart)> {
        self.children.iter().filter(|(anchor, _)| !anchor.draws_behind())
    }

    /// Total number of parts in this tree, including this one
    pub fn part_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.part_count())
            .sum::<usize>()
    }
}
