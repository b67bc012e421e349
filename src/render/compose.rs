//! Placement math and canvas compositing

use crate::io::configuration::DEFAULT_SCALE;
use crate::io::error::{Result, invalid_parameter};
use crate::model::resolved::ResolvedPart;
use crate::render::assets::AssetLibrary;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Rendering parameters
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Integer upscale factor applied to every part
    pub scale: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

#[derive(Debug)]
struct BoundingBox {
    min_x: i64,
    min_y: i64,
    max_x: i64,
    max_y: i64,
    found_assets: bool,
}

impl BoundingBox {
    const fn empty() -> Self {
        Self {
            min_x: i64::MAX,
            min_y: i64::MAX,
            max_x: i64::MIN,
            max_y: i64::MIN,
            found_assets: false,
        }
    }

    fn include(&mut self, left: i64, top: i64, right: i64, bottom: i64) {
        self.found_assets = true;
        self.min_x = self.min_x.min(left);
        self.min_y = self.min_y.min(top);
        self.max_x = self.max_x.max(right);
        self.max_y = self.max_y.max(bottom);
    }
}

/// Fractional offset within a part, snapped to source pixels then scaled
fn scaled_offset(fraction: f64, dimension: u32, scale: u32) -> i64 {
    (fraction * f64::from(dimension)).floor() as i64 * i64::from(scale)
}

/// Composite a resolved part tree into an auto-cropped RGBA image
///
/// The canvas is sized by a bounding-box pre-pass over every drawable part,
/// so structural nodes cost nothing and the output carries no empty margin.
///
/// # Errors
///
/// Returns an error if the scale is zero, if the tree contains no drawable
/// parts, or if an asset fails to load.
pub fn compose_bot(
    part: &ResolvedPart,
    assets: &mut AssetLibrary,
    options: &RenderOptions,
) -> Result<RgbaImage> {
    if options.scale == 0 {
        return Err(invalid_parameter(
            "scale",
            &options.scale,
            &"scale must be positive",
        ));
    }

    let mut bbox = BoundingBox::empty();
    measure_part(part, 0, 0, options.scale, &mut bbox);

    if !bbox.found_assets {
        return Err(invalid_parameter(
            "tree",
            &"structural",
            &"resolved tree contains no drawable parts",
        ));
    }

    let width = (bbox.max_x - bbox.min_x) as u32;
    let height = (bbox.max_y - bbox.min_y) as u32;
    let mut canvas = RgbaImage::new(width, height);

    draw_part(part, -bbox.min_x, -bbox.min_y, options.scale, assets, &mut canvas)?;

    Ok(canvas)
}

/// Accumulate the extent of every drawable part
///
/// `x`/`y` is the absolute position of the part's attachment point; the
/// part's own box starts at that point minus its socket offset.
fn measure_part(part: &ResolvedPart, x: i64, y: i64, scale: u32, bbox: &mut BoundingBox) {
    let left = x - scaled_offset(part.socket.x, part.width, scale);
    let top = y - scaled_offset(part.socket.y, part.height, scale);

    if !part.is_structural() {
        let right = left + i64::from(part.width) * i64::from(scale);
        let bottom = top + i64::from(part.height) * i64::from(scale);
        bbox.include(left, top, right, bottom);
    }

    for (anchor, child) in &part.children {
        let child_x = left + scaled_offset(anchor.x, part.width, scale);
        let child_y = top + scaled_offset(anchor.y, part.height, scale);
        measure_part(child, child_x, child_y, scale, bbox);
    }
}

/// Draw a part and its children in draw order
///
/// Children anchored with a negative draw-order delta are drawn entirely
/// before this part's own asset, the rest entirely after; structural parts
/// contribute only their children.
fn draw_part(
    part: &ResolvedPart,
    x: i64,
    y: i64,
    scale: u32,
    assets: &mut AssetLibrary,
    canvas: &mut RgbaImage,
) -> Result<()> {
    let left = x - scaled_offset(part.socket.x, part.width, scale);
    let top = y - scaled_offset(part.socket.y, part.height, scale);

    for (anchor, child) in part.children_behind() {
        let child_x = left + scaled_offset(anchor.x, part.width, scale);
        let child_y = top + scaled_offset(anchor.y, part.height, scale);
        draw_part(child, child_x, child_y, scale, assets, canvas)?;
    }

    if let Some(asset) = &part.asset {
        let decoded = assets.fetch(asset, &part.color)?;
        let mut sprite = imageops::resize(
            decoded,
            part.width * scale,
            part.height * scale,
            FilterType::Nearest,
        );
        if part.flip_x {
            sprite = imageops::flip_horizontal(&sprite);
        }
        if part.flip_y {
            sprite = imageops::flip_vertical(&sprite);
        }
        imageops::overlay(canvas, &sprite, left, top);
    }

    for (anchor, child) in part.children_in_front() {
        let child_x = left + scaled_offset(anchor.x, part.width, scale);
        let child_y = top + scaled_offset(anchor.y, part.height, scale);
        draw_part(child, child_x, child_y, scale, assets, canvas)?;
    }

    Ok(())
}
