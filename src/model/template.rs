//! Declarative part templates and asset identity

use crate::catalog::TemplateId;
use crate::model::anchor::Anchor;

/// Identity of a drawable asset within the part library
///
/// Resolves externally to the path convention `category/color/variant.png`;
/// the color segment is supplied at resolution time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRef {
    /// Asset category directory, e.g. `eyes` or `mouths`
    pub category: String,
    /// Variant name within the category, e.g. `angry`
    pub variant: String,
}

impl AssetRef {
    /// Create an asset reference from category and variant names
    pub fn new(category: &str, variant: &str) -> Self {
        Self {
            category: category.to_string(),
            variant: variant.to_string(),
        }
    }
}

/// One drawable unit before any choice has been made
///
/// Structural templates carry no asset but still participate in composition;
/// the invisible bot root is one. Fixed attachments are children present on
/// every resolution of the template, as opposed to choice-group children.
#[derive(Clone, Debug)]
pub struct PartTemplate {
    /// Asset identity, or `None` for purely structural templates
    pub asset: Option<AssetRef>,
    /// Width of the source asset in pixels
    pub width: u32,
    /// Height of the source asset in pixels
    pub height: u32,
    /// The point used to align this part under its parent's anchor
    pub socket: Anchor,
    /// Mirror the drawn asset horizontally
    pub flip_x: bool,
    /// Mirror the drawn asset vertically
    pub flip_y: bool,
    /// Children attached on every resolution, in declaration order
    pub children: Vec<(Anchor, TemplateId)>,
}

impl PartTemplate {
    /// Create a drawable template with its socket at the top-left corner
    pub fn new(category: &str, variant: &str, width: u32, height: u32) -> Self {
        Self {
            asset: Some(AssetRef::new(category, variant)),
            width,
            height,
            socket: Anchor::new(0.0, 0.0),
            flip_x: false,
            flip_y: false,
            children: Vec::new(),
        }
    }

    /// Create an invisible structural template
    pub const fn structural(width: u32, height: u32) -> Self {
        Self {
            asset: None,
            width,
            height,
            socket: Anchor::new(0.0, 0.0),
            flip_x: false,
            flip_y: false,
            children: Vec::new(),
        }
    }

    /// Set the socket used to align this part under its parent's anchor
    #[must_use]
    pub const fn with_socket(mut self, x: f64, y: f64) -> Self {
        self.socket = Anchor::new(x, y);
        self
    }

    /// Attach a fixed child present on every resolution
    #[must_use]
    pub fn with_child(mut self, anchor: Anchor, child: TemplateId) -> Self {
        self.children.push((anchor, child));
        self
    }

    /// Produce a horizontally mirrored copy
    ///
    /// Clones first, reflects only the socket's horizontal coordinate under
    /// the fractional convention, and toggles the horizontal flip flag. The
    /// source template is never touched.
    #[must_use]
    pub fn flipped_horizontal(&self) -> Self {
        let mut flipped = self.clone();
        flipped.socket.x = 1.0 - flipped.socket.x;
        flipped.flip_x = !flipped.flip_x;
        flipped
    }

    /// Produce a vertically mirrored copy
    #[must_use]
    pub fn flipped_vertical(&self) -> Self {
        let mut flipped = self.clone();
        flipped.socket.y = 1.0 - flipped.socket.y;
        flipped.flip_y = !flipped.flip_y;
        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::PartTemplate;

    #[test]
    fn test_flip_horizontal_mirrors_socket_only() {
        let template = PartTemplate::new("arms", "claw", 12, 20).with_socket(0.2, 0.6);
        let flipped = template.flipped_horizontal();

        assert!((flipped.socket.x - 0.8).abs() < f64::EPSILON);
        assert!((flipped.socket.y - 0.6).abs() < f64::EPSILON);
        assert!(flipped.flip_x);
        assert!(!flipped.flip_y);

        // Source is untouched
        assert!((template.socket.x - 0.2).abs() < f64::EPSILON);
        assert!(!template.flip_x);
    }

    #[test]
    fn test_double_flip_restores_original() {
        let template = PartTemplate::new("legs", "wheel", 10, 10).with_socket(0.35, 0.1);
        let restored = template.flipped_horizontal().flipped_horizontal();

        assert!((restored.socket.x - template.socket.x).abs() < f64::EPSILON);
        assert_eq!(restored.flip_x, template.flip_x);

        let restored_v = template.flipped_vertical().flipped_vertical();
        assert!((restored_v.socket.y - template.socket.y).abs() < f64::EPSILON);
        assert_eq!(restored_v.flip_y, template.flip_y);
    }
}
