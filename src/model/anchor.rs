//! Relative attachment points with draw ordering

/// A relative attachment point on a part
///
/// Coordinates are fractions of the owning part's width and height, so an
/// anchor stays valid when the part is scaled. The draw-order delta decides
/// whether a child attached here is drawn before (`< 0`) or after (`>= 0`)
/// the part's own asset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Horizontal position as a fraction of the part width (0..1)
    pub x: f64,
    /// Vertical position as a fraction of the part height (0..1)
    pub y: f64,
    /// Draw-order delta relative to the owning part's asset
    pub draw_order: i32,
}

impl Anchor {
    /// Create an anchor drawn after the owning part's asset
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            draw_order: 0,
        }
    }

    /// Create an anchor with an explicit draw-order delta
    pub const fn with_draw_order(x: f64, y: f64, draw_order: i32) -> Self {
        Self { x, y, draw_order }
    }

    /// Whether a child attached here draws before the owning part's asset
    pub const fn draws_behind(&self) -> bool {
        self.draw_order < 0
    }
}
