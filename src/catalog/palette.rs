//! Built-in robot part palette
//!
//! The shipped catalog: bodies, faces, linked eye pairs, mouths, chest
//! symbols, and mirrored arm and leg pairs. Left-side limbs and eyes are
//! derived from the right-side entries by horizontal flip at construction
//! time, never during resolution.

use crate::catalog::{Catalog, PatternId};
use crate::io::error::Result;
use crate::model::anchor::Anchor;
use crate::model::pattern::{ChoiceGroup, ColorSet, PatternNode};
use crate::model::template::PartTemplate;

/// A ready-to-resolve catalog with its root pattern
#[derive(Debug)]
pub struct RobotPalette {
    /// The read-only part catalog
    pub catalog: Catalog,
    /// Entry point for resolution
    pub root: PatternId,
}

/// Body color names shared by all body variants
const BODY_COLORS: [&str; 4] = ["crimson", "cobalt", "moss", "amber"];
/// Face plate color names
const FACE_COLORS: [&str; 2] = ["ivory", "slate"];

/// Build the shipped robot palette
///
/// # Errors
///
/// Returns an error if any palette entry fails catalog validation; the
/// shipped palette is expected to always build.
pub fn robot_palette() -> Result<RobotPalette> {
    let mut catalog = Catalog::new();

    let eye_rows = eye_rows(&mut catalog)?;
    let mouths = mouth_patterns(&mut catalog)?;
    let symbols = symbol_patterns(&mut catalog)?;
    let arm_rows = limb_rows(&mut catalog, "arms", &["claw", "piston"], 10, 22, 0.15, 0.2)?;
    let leg_rows = limb_rows(&mut catalog, "legs", &["wheel", "strut"], 12, 16, 0.1, 0.5)?;

    let faces = [
        face_pattern(&mut catalog, "bullet", 64, 80, 0.38, &eye_rows, &mouths)?,
        face_pattern(&mut catalog, "diamond", 64, 72, 0.5, &eye_rows, &mouths)?,
    ];

    let bodies = [
        body_pattern(&mut catalog, "boxy", 72, 64, &faces, &arm_rows, &leg_rows, &symbols)?,
        body_pattern(&mut catalog, "rounded", 68, 70, &faces, &arm_rows, &leg_rows, &symbols)?,
    ];

    let root_template = catalog.add_template(PartTemplate::structural(1, 1))?;
    let root = catalog.add_pattern(PatternNode::new(root_template).with_group(
        ChoiceGroup::single(Anchor::new(0.0, 0.0), bodies.to_vec())?,
    ))?;

    Ok(RobotPalette { catalog, root })
}

/// Linked left/right eye rows, one row per eye shape
fn eye_rows(catalog: &mut Catalog) -> Result<Vec<Vec<PatternId>>> {
    let mut rows = Vec::new();
    for shape in ["angry", "sad", "wide"] {
        let right = catalog.add_template(
            PartTemplate::new("eyes", shape, 8, 6).with_socket(0.5, 0.5),
        )?;
        let left = catalog.flip_horizontal(right)?;
        let left_pattern = catalog.add_pattern(PatternNode::new(left))?;
        let right_pattern = catalog.add_pattern(PatternNode::new(right))?;
        rows.push(vec![left_pattern, right_pattern]);
    }
    Ok(rows)
}

/// Single-anchor mouth alternatives
fn mouth_patterns(catalog: &mut Catalog) -> Result<Vec<PatternId>> {
    let mut patterns = Vec::new();
    for shape in ["scowl", "straight", "grin"] {
        let template = catalog.add_template(
            PartTemplate::new("mouths", shape, 14, 6).with_socket(0.5, 0.5),
        )?;
        patterns.push(catalog.add_pattern(PatternNode::new(template))?);
    }
    Ok(patterns)
}

/// Chest symbol alternatives, drawn on top of the body plate
fn symbol_patterns(catalog: &mut Catalog) -> Result<Vec<PatternId>> {
    let mut patterns = Vec::new();
    for shape in ["bolt", "star", "gear"] {
        let template = catalog.add_template(
            PartTemplate::new("symbols", shape, 12, 12).with_socket(0.5, 0.5),
        )?;
        patterns.push(catalog.add_pattern(PatternNode::new(template))?);
    }
    Ok(patterns)
}

/// Linked left/right limb rows derived from right-side templates
fn limb_rows(
    catalog: &mut Catalog,
    category: &str,
    shapes: &[&str],
    width: u32,
    height: u32,
    socket_x: f64,
    socket_y: f64,
) -> Result<Vec<Vec<PatternId>>> {
    let mut rows = Vec::new();
    for shape in shapes {
        let right = catalog.add_template(
            PartTemplate::new(category, shape, width, height).with_socket(socket_x, socket_y),
        )?;
        let left = catalog.flip_horizontal(right)?;
        let left_pattern = catalog.add_pattern(PatternNode::new(left))?;
        let right_pattern = catalog.add_pattern(PatternNode::new(right))?;
        rows.push(vec![left_pattern, right_pattern]);
    }
    Ok(rows)
}

/// A face plate with linked eyes and a mouth choice
fn face_pattern(
    catalog: &mut Catalog,
    variant: &str,
    width: u32,
    height: u32,
    eye_line: f64,
    eye_rows: &[Vec<PatternId>],
    mouths: &[PatternId],
) -> Result<PatternId> {
    let template = catalog.add_template(
        PartTemplate::new("faces", variant, width, height).with_socket(0.5, 1.0),
    )?;
    let eyes = ChoiceGroup::linked(
        vec![
            Anchor::new(0.27, eye_line),
            Anchor::new(0.73, eye_line),
        ],
        eye_rows.to_vec(),
    )?;
    let mouth = ChoiceGroup::single(Anchor::new(0.5, 0.78), mouths.to_vec())?;
    catalog.add_pattern(
        PatternNode::new(template)
            .with_colors(ColorSet::new(&FACE_COLORS))
            .with_group(eyes)
            .with_group(mouth),
    )
}

/// A body with face, mirrored limbs, and a chest symbol
fn body_pattern(
    catalog: &mut Catalog,
    variant: &str,
    width: u32,
    height: u32,
    faces: &[PatternId],
    arm_rows: &[Vec<PatternId>],
    leg_rows: &[Vec<PatternId>],
    symbols: &[PatternId],
) -> Result<PatternId> {
    let template = catalog
        .add_template(PartTemplate::new("bodies", variant, width, height).with_socket(0.5, 0.0))?;

    // Arms hang off the shoulders behind the body plate, legs sit behind
    // the lower edge, the face stacks on top via its bottom-center socket.
    let face = ChoiceGroup::single(Anchor::new(0.5, 0.02), faces.to_vec())?;
    let arms = ChoiceGroup::linked(
        vec![
            Anchor::with_draw_order(0.02, 0.22, -1),
            Anchor::with_draw_order(0.98, 0.22, -1),
        ],
        arm_rows.to_vec(),
    )?;
    let legs = ChoiceGroup::linked(
        vec![
            Anchor::with_draw_order(0.28, 0.96, -1),
            Anchor::with_draw_order(0.72, 0.96, -1),
        ],
        leg_rows.to_vec(),
    )?;
    let symbol = ChoiceGroup::single(Anchor::with_draw_order(0.5, 0.45, 1), symbols.to_vec())?;

    catalog.add_pattern(
        PatternNode::new(template)
            .with_colors(ColorSet::new(&BODY_COLORS))
            .with_group(face)
            .with_group(arms)
            .with_group(legs)
            .with_group(symbol),
    )
}
