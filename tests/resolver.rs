//! Validates deterministic and random collapse of pattern graphs

use botforge::GeneratorError;
use botforge::catalog::{Catalog, PatternId};
use botforge::model::{Anchor, ChoiceGroup, ColorSet, PartTemplate, PatternNode, ResolvedPart};
use botforge::random::SeededStream;
use botforge::resolve::{resolve_bot, resolve_pattern};
use std::collections::HashSet;

fn leaf(catalog: &mut Catalog, variant: &str) -> botforge::Result<PatternId> {
    let template = catalog.add_template(PartTemplate::new("test", variant, 4, 4))?;
    catalog.add_pattern(PatternNode::new(template))
}

/// Two-level graph: root picks A or B; A carries a linked eye-style pair
fn two_level_catalog() -> botforge::Result<(Catalog, PatternId)> {
    let mut catalog = Catalog::new();

    let l1 = leaf(&mut catalog, "l1")?;
    let r1 = leaf(&mut catalog, "r1")?;
    let l2 = leaf(&mut catalog, "l2")?;
    let r2 = leaf(&mut catalog, "r2")?;

    let a_template = catalog.add_template(PartTemplate::new("test", "a", 16, 16))?;
    let a = catalog.add_pattern(PatternNode::new(a_template).with_group(ChoiceGroup::linked(
        vec![Anchor::new(0.2, 0.5), Anchor::new(0.8, 0.5)],
        vec![vec![l1, r1], vec![l2, r2]],
    )?))?;

    let b = leaf(&mut catalog, "b")?;

    let root_template = catalog.add_template(PartTemplate::structural(1, 1))?;
    let root = catalog.add_pattern(
        PatternNode::new(root_template)
            .with_group(ChoiceGroup::single(Anchor::new(0.0, 0.0), vec![a, b])?),
    )?;

    Ok((catalog, root))
}

/// Structural fingerprint: asset variant, color, and child order
fn signature(part: &ResolvedPart) -> String {
    let name = part
        .asset
        .as_ref()
        .map_or("_", |asset| asset.variant.as_str());
    let children: Vec<String> = part
        .children
        .iter()
        .map(|(_, child)| signature(child))
        .collect();
    format!("{name}:{}[{}]", part.color, children.join(","))
}

#[test]
fn test_seeded_resolution_is_deterministic() -> botforge::Result<()> {
    let (catalog, root) = two_level_catalog()?;

    for seed in ["test-seed-1", "test-seed-2", "a third seed"] {
        let first = resolve_bot(&catalog, root, Some(seed))?;
        let second = resolve_bot(&catalog, root, Some(seed))?;
        assert_eq!(signature(&first), signature(&second), "seed {seed}");
    }
    Ok(())
}

#[test]
fn test_unseeded_resolution_varies() -> botforge::Result<()> {
    let (catalog, root) = two_level_catalog()?;

    let mut outcomes = HashSet::new();
    for _ in 0..64 {
        let bot = resolve_bot(&catalog, root, None)?;
        outcomes.insert(signature(&bot));
    }
    assert!(
        outcomes.len() >= 2,
        "64 unseeded resolutions produced a single outcome"
    );
    Ok(())
}

#[test]
fn test_linked_anchors_always_match() -> botforge::Result<()> {
    let (catalog, root) = two_level_catalog()?;

    for _ in 0..40 {
        let bot = resolve_bot(&catalog, root, None)?;
        let Some((_, picked)) = bot.children.first() else {
            unreachable!("root always attaches one child");
        };
        let Some(asset) = &picked.asset else {
            unreachable!("alternatives are drawable");
        };
        if asset.variant == "b" {
            assert!(picked.children.is_empty());
            continue;
        }

        // A's linked pair must come from the same row, never mismatched
        let variants: Vec<&str> = picked
            .children
            .iter()
            .filter_map(|(_, child)| child.asset.as_ref())
            .map(|asset| asset.variant.as_str())
            .collect();
        assert!(
            variants == ["l1", "r1"] || variants == ["l2", "r2"],
            "mismatched linked pick: {variants:?}"
        );
    }
    Ok(())
}

#[test]
fn test_entropy_accounting_is_exact() -> botforge::Result<()> {
    let mut catalog = Catalog::new();
    let x = leaf(&mut catalog, "x")?;
    let y = leaf(&mut catalog, "y")?;
    let base = catalog.add_template(PartTemplate::structural(1, 1))?;
    let root = catalog.add_pattern(
        PatternNode::new(base)
            .with_colors(ColorSet::new(&["red", "blue"]))
            .with_group(ChoiceGroup::single(Anchor::new(0.5, 0.5), vec![x, y])?),
    )?;

    let mut stream = SeededStream::derive("accounting")?;
    resolve_pattern(&catalog, root, &mut stream)?;

    // One color decision plus one group decision, one bit each
    assert_eq!(stream.decisions(), 2);
    assert_eq!(stream.remaining_bits(), 254);
    Ok(())
}

#[test]
fn test_exhausted_stream_fails_resolution() -> botforge::Result<()> {
    let (catalog, root) = two_level_catalog()?;

    let mut stream = SeededStream::derive("drained")?;
    stream.get_bits(256)?;

    let result = resolve_pattern(&catalog, root, &mut stream);
    assert!(matches!(
        result,
        Err(GeneratorError::EntropyExhausted { .. })
    ));
    Ok(())
}

#[test]
fn test_resolution_never_aliases_the_catalog() -> botforge::Result<()> {
    let mut catalog = Catalog::new();
    let template = catalog
        .add_template(PartTemplate::new("test", "solo", 8, 8).with_socket(0.25, 0.75))?;
    let root = catalog.add_pattern(PatternNode::new(template))?;

    let mut resolved = resolve_pattern(&catalog, root, &mut SeededStream::derive("alias")?)?;
    resolved.socket.x = 0.9;
    resolved.flip_x = true;

    let untouched = catalog.template(template)?;
    assert!((untouched.socket.x - 0.25).abs() < f64::EPSILON);
    assert!(!untouched.flip_x);

    let again = resolve_pattern(&catalog, root, &mut SeededStream::derive("alias")?)?;
    assert!((again.socket.x - 0.25).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_fixed_children_precede_group_children() -> botforge::Result<()> {
    let mut catalog = Catalog::new();
    let fixed = catalog.add_template(PartTemplate::new("test", "fixed", 2, 2))?;
    let chosen = leaf(&mut catalog, "chosen")?;
    let base = catalog.add_template(
        PartTemplate::new("test", "base", 8, 8).with_child(Anchor::new(0.5, 0.5), fixed),
    )?;
    let root = catalog.add_pattern(
        PatternNode::new(base)
            .with_group(ChoiceGroup::single(Anchor::new(0.1, 0.1), vec![chosen])?),
    )?;

    let bot = resolve_pattern(&catalog, root, &mut SeededStream::derive("order")?)?;
    assert_eq!(signature(&bot), "base:none[fixed:none[],chosen:none[]]");
    Ok(())
}

#[test]
fn test_malformed_pairings_fail_at_construction() {
    let anchors = vec![Anchor::new(0.2, 0.5), Anchor::new(0.8, 0.5)];

    let mut catalog = Catalog::new();
    let only = leaf(&mut catalog, "only").ok();
    let Some(only) = only else {
        unreachable!("leaf construction always succeeds on a fresh catalog");
    };

    // A row with one entry cannot feed two anchors
    let mismatched = ChoiceGroup::linked(anchors.clone(), vec![vec![only]]);
    assert!(matches!(
        mismatched,
        Err(GeneratorError::MalformedChoiceGroup { .. })
    ));

    let no_rows = ChoiceGroup::linked(anchors, vec![]);
    assert!(matches!(
        no_rows,
        Err(GeneratorError::MalformedChoiceGroup { .. })
    ));

    let no_alternatives = ChoiceGroup::single(Anchor::new(0.5, 0.5), vec![]);
    assert!(matches!(
        no_alternatives,
        Err(GeneratorError::MalformedChoiceGroup { .. })
    ));
}

#[test]
fn test_foreign_handles_fail_at_insertion() -> botforge::Result<()> {
    let mut donor = Catalog::new();
    leaf(&mut donor, "one")?;
    leaf(&mut donor, "two")?;
    let foreign = leaf(&mut donor, "three")?;

    let mut catalog = Catalog::new();
    let base = catalog.add_template(PartTemplate::structural(1, 1))?;
    let result = catalog.add_pattern(
        PatternNode::new(base)
            .with_group(ChoiceGroup::single(Anchor::new(0.0, 0.0), vec![foreign])?),
    );
    assert!(matches!(result, Err(GeneratorError::UnknownHandle { .. })));
    Ok(())
}
