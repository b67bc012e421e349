//! Validates the arena catalog and the built-in robot palette

use botforge::catalog::Catalog;
use botforge::catalog::palette::robot_palette;
use botforge::model::{PartTemplate, ResolvedPart};
use botforge::random::SeededStream;
use botforge::resolve::{resolve_bot, resolve_pattern};

fn child(part: &ResolvedPart, index: usize) -> &ResolvedPart {
    match part.children.get(index) {
        Some((_, child)) => child,
        None => unreachable!("missing child {index}"),
    }
}

fn variant(part: &ResolvedPart) -> &str {
    match &part.asset {
        Some(asset) => asset.variant.as_str(),
        None => unreachable!("expected a drawable part"),
    }
}

#[test]
fn test_flip_inserts_a_new_entry_and_preserves_the_source() -> botforge::Result<()> {
    let mut catalog = Catalog::new();
    let right = catalog.add_template(PartTemplate::new("arms", "claw", 10, 22).with_socket(0.1, 0.2))?;
    let left = catalog.flip_horizontal(right)?;

    assert_ne!(right, left);
    assert_eq!(catalog.template_count(), 2);

    let source = catalog.template(right)?;
    assert!((source.socket.x - 0.1).abs() < f64::EPSILON);
    assert!(!source.flip_x);

    let mirrored = catalog.template(left)?;
    assert!((mirrored.socket.x - 0.9).abs() < f64::EPSILON);
    assert!(mirrored.flip_x);
    Ok(())
}

#[test]
fn test_palette_builds_and_resolves_a_full_bot() -> botforge::Result<()> {
    let palette = robot_palette()?;
    let bot = resolve_bot(&palette.catalog, palette.root, Some("palette-smoke"))?;

    // Root, body, face, two eyes, mouth, two arms, two legs, symbol
    assert_eq!(bot.part_count(), 11);
    assert!(bot.is_structural());

    let body = child(&bot, 0);
    assert!(["crimson", "cobalt", "moss", "amber"].contains(&body.color.as_str()));
    Ok(())
}

#[test]
fn test_palette_resolution_is_reproducible() -> botforge::Result<()> {
    let palette = robot_palette()?;

    let first = resolve_bot(&palette.catalog, palette.root, Some("repro-bot"))?;
    let second = resolve_bot(&palette.catalog, palette.root, Some("repro-bot"))?;

    assert_eq!(format!("{first:?}"), format!("{second:?}"));
    Ok(())
}

#[test]
fn test_palette_mirrors_linked_pairs() -> botforge::Result<()> {
    let palette = robot_palette()?;

    for seed in ["pair-a", "pair-b", "pair-c"] {
        let bot = resolve_bot(&palette.catalog, palette.root, Some(seed))?;
        let body = child(&bot, 0);

        // Body children: face, left arm, right arm, left leg, right leg, symbol
        let face = child(body, 0);
        let left_eye = child(face, 0);
        let right_eye = child(face, 1);
        assert_eq!(variant(left_eye), variant(right_eye));
        assert!(left_eye.flip_x);
        assert!(!right_eye.flip_x);

        for offset in [1, 3] {
            let left_limb = child(body, offset);
            let right_limb = child(body, offset + 1);
            assert_eq!(variant(left_limb), variant(right_limb));
            assert!(left_limb.flip_x);
            assert!(!right_limb.flip_x);
        }
    }
    Ok(())
}

#[test]
fn test_palette_fixture_bot_is_pinned() -> botforge::Result<()> {
    // Exact expected picks for one seed, fixed once and kept as a
    // regression fixture for the whole seed-to-bot mapping.
    let palette = robot_palette()?;
    let bot = resolve_bot(&palette.catalog, palette.root, Some("fixture-bot"))?;

    let body = child(&bot, 0);
    assert_eq!(variant(body), "boxy");
    assert_eq!(body.color, "moss");

    let face = child(body, 0);
    assert_eq!(variant(face), "diamond");
    assert_eq!(face.color, "ivory");
    assert_eq!(variant(child(face, 0)), "angry");
    assert_eq!(variant(child(face, 1)), "angry");
    assert_eq!(variant(child(face, 2)), "grin");

    assert_eq!(variant(child(body, 1)), "claw");
    assert_eq!(variant(child(body, 3)), "wheel");
    assert_eq!(variant(child(body, 5)), "bolt");
    Ok(())
}

#[test]
fn test_palette_entropy_budget() -> botforge::Result<()> {
    let palette = robot_palette()?;

    let mut stream = SeededStream::derive("budget")?;
    resolve_pattern(&palette.catalog, palette.root, &mut stream)?;

    // Decisions: body pick, body color, face pick, face color, eyes, mouth,
    // arms, legs, symbol
    assert_eq!(stream.decisions(), 9);
    // 1+2+1+1+2+2+1+1+2 bits for the bounds 2,4,2,2,3,3,2,2,3
    assert_eq!(stream.remaining_bits(), 256 - 13);
    Ok(())
}
