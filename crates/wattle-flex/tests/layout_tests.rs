//! Integration tests for flex layout.

use wattle_common::warning::was_warned;
use wattle_flex::{
    FlexDirection, Layout, LayoutError, LayoutTree, NodeId, PropertyKey, RawValue, Style,
};

/// Helper: build a container with `items` as children, lay it out, and
/// return the tree with the ids.
fn layout(container: Style, items: Vec<Style>) -> (LayoutTree, NodeId, Vec<NodeId>) {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(container);
    let ids: Vec<NodeId> = items
        .into_iter()
        .map(|style| {
            let id = tree.create_node(style);
            tree.append_child(root, id).unwrap();
            id
        })
        .collect();
    tree.calculate_layout(root, None, None, None).unwrap();
    (tree, root, ids)
}

fn boxes(tree: &LayoutTree, ids: &[NodeId]) -> Vec<Layout> {
    ids.iter()
        .map(|&id| tree.get_computed_layout(id, &[]).unwrap())
        .collect()
}

fn lefts(tree: &LayoutTree, ids: &[NodeId]) -> Vec<f64> {
    boxes(tree, ids).iter().map(|b| b.left).collect()
}

fn tops(tree: &LayoutTree, ids: &[NodeId]) -> Vec<f64> {
    boxes(tree, ids).iter().map(|b| b.top).collect()
}

fn widths(tree: &LayoutTree, ids: &[NodeId]) -> Vec<f64> {
    boxes(tree, ids).iter().map(|b| b.width).collect()
}

fn heights(tree: &LayoutTree, ids: &[NodeId]) -> Vec<f64> {
    boxes(tree, ids).iter().map(|b| b.height).collect()
}

fn sized(width: i32, height: i32) -> Style {
    Style::new()
        .with(PropertyKey::Width, width)
        .with(PropertyKey::Height, height)
}

fn container(width: i32) -> Style {
    Style::new().with(PropertyKey::Width, width)
}

// ---------------------------------------------------------------------------
// Main axis
//
// [§ 9.7 Resolving Flexible Lengths](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
// ---------------------------------------------------------------------------

#[test]
fn test_flex_start_packs_items() {
    let (tree, _, ids) = layout(container(200), vec![container(50), container(50)]);
    assert_eq!(lefts(&tree, &ids), vec![0.0, 50.0]);
}

#[test]
fn test_space_between() {
    let (tree, _, ids) = layout(
        container(200).with(PropertyKey::JustifyContent, "space-between"),
        vec![container(50), container(50)],
    );
    assert_eq!(lefts(&tree, &ids), vec![0.0, 150.0]);
}

#[test]
fn test_justify_modes() {
    let cases = [
        ("flex-end", vec![100.0, 150.0]),
        ("center", vec![50.0, 100.0]),
        ("space-around", vec![25.0, 125.0]),
        ("space-evenly", vec![100.0 / 3.0, 50.0 + 200.0 / 3.0]),
    ];
    for (mode, expected) in cases {
        let (tree, _, ids) = layout(
            container(200).with(PropertyKey::JustifyContent, mode),
            vec![container(50), container(50)],
        );
        let actual = lefts(&tree, &ids);
        for (a, e) in actual.iter().zip(&expected) {
            assert!((a - e).abs() < 1e-9, "{mode}: {actual:?} vs {expected:?}");
        }
    }
}

#[test]
fn test_grow_consumes_space() {
    let (tree, _, ids) = layout(
        container(200),
        vec![container(50).with(PropertyKey::FlexGrow, 1)],
    );
    assert_eq!(widths(&tree, &ids), vec![200.0]);
    assert_eq!(lefts(&tree, &ids), vec![0.0]);
}

#[test]
fn test_grow_is_proportional() {
    let (tree, _, ids) = layout(
        container(300),
        vec![
            container(50).with(PropertyKey::FlexGrow, 1),
            container(50).with(PropertyKey::FlexGrow, 3),
            container(50),
        ],
    );
    assert_eq!(widths(&tree, &ids), vec![87.5, 162.5, 50.0]);
    assert_eq!(lefts(&tree, &ids), vec![0.0, 87.5, 250.0]);
}

#[test]
fn test_fractional_grow_takes_a_share_of_space() {
    // A grow sum below 1 hands out only that fraction of the free space.
    let (tree, _, ids) = layout(
        container(200),
        vec![Style::new().with(PropertyKey::FlexGrow, 0.5)],
    );
    assert_eq!(widths(&tree, &ids), vec![100.0]);
}

#[test]
fn test_shrink_splits_deficit_by_weight() {
    let (tree, _, ids) = layout(
        container(100),
        vec![
            container(80).with(PropertyKey::FlexShrink, 1),
            container(80).with(PropertyKey::FlexShrink, 1),
        ],
    );
    assert_eq!(widths(&tree, &ids), vec![50.0, 50.0]);
    assert_eq!(lefts(&tree, &ids), vec![0.0, 50.0]);
}

#[test]
fn test_shrink_zero_keeps_size() {
    let (tree, _, ids) = layout(
        container(100),
        vec![
            container(80).with(PropertyKey::FlexShrink, 0),
            container(80),
        ],
    );
    assert_eq!(widths(&tree, &ids), vec![80.0, 20.0]);
}

#[test]
fn test_shrink_never_below_floor() {
    let (tree, _, ids) = layout(
        container(10),
        vec![container(5), container(500), container(500)],
    );
    for width in widths(&tree, &ids) {
        assert!(width >= 1.0, "{width}");
    }
}

#[test]
fn test_row_reverse() {
    let (tree, _, ids) = layout(
        container(200).with(PropertyKey::FlexDirection, "row-reverse"),
        vec![container(50), container(30)],
    );
    assert_eq!(lefts(&tree, &ids), vec![150.0, 120.0]);
}

#[test]
fn test_column_reverse_packs_toward_the_bottom() {
    let (tree, _, ids) = layout(
        sized(100, 200).with(PropertyKey::FlexDirection, "column-reverse"),
        vec![sized(10, 50), sized(10, 30)],
    );
    assert_eq!(tops(&tree, &ids), vec![150.0, 120.0]);
    assert_eq!(lefts(&tree, &ids), vec![0.0, 0.0]);
}

#[test]
fn test_order_changes_placement() {
    let (tree, _, ids) = layout(
        container(200),
        vec![
            container(10).with(PropertyKey::Order, 2),
            container(20),
            container(30).with(PropertyKey::Order, -1),
        ],
    );
    assert_eq!(lefts(&tree, &ids), vec![50.0, 30.0, 0.0]);
}

#[test]
fn test_auto_margins_absorb_space() {
    let (tree, _, ids) = layout(
        container(200).with(PropertyKey::JustifyContent, "flex-end"),
        vec![
            container(50).with(PropertyKey::MarginRight, "auto"),
            container(50),
        ],
    );
    assert_eq!(lefts(&tree, &ids), vec![0.0, 150.0]);

    let (tree, _, ids) = layout(
        container(200),
        vec![container(50).with(PropertyKey::Margin, vec![RawValue::from(0), RawValue::from("auto")])],
    );
    assert_eq!(lefts(&tree, &ids), vec![75.0]);
}

#[test]
fn test_margins_offset_items() {
    let (tree, _, ids) = layout(
        container(200),
        vec![
            container(50).with(PropertyKey::Margin, vec![0, 10]),
            container(50),
        ],
    );
    assert_eq!(lefts(&tree, &ids), vec![10.0, 70.0]);
}

#[test]
fn test_sequential_when_container_has_no_width() {
    let (tree, root, ids) = layout(
        Style::new().with(PropertyKey::JustifyContent, "center"),
        vec![container(40), container(60).with(PropertyKey::MarginLeft, 5)],
    );
    assert_eq!(lefts(&tree, &ids), vec![0.0, 40.0]);
    // The container takes the size of its only line.
    let root = tree.get_computed_layout(root, &[]).unwrap();
    assert_eq!(root.width, 105.0);
}

#[test]
fn test_sequential_ignores_leading_margin() {
    let (tree, _, ids) = layout(
        Style::new(),
        vec![
            Style::new()
                .with(PropertyKey::Width, 40)
                .with(PropertyKey::MarginLeft, 5),
            Style::new().with(PropertyKey::Width, 60),
        ],
    );
    assert_eq!(lefts(&tree, &ids), vec![0.0, 45.0]);
}

// ---------------------------------------------------------------------------
// Cross axis
//
// [§ 8.3 Cross-axis Alignment](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
// ---------------------------------------------------------------------------

#[test]
fn test_column_center() {
    let (tree, _, ids) = layout(
        container(200)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::FlexDirection, "column")
            .with(PropertyKey::AlignItems, "center"),
        vec![container(40)],
    );
    assert_eq!(lefts(&tree, &ids), vec![80.0]);
    assert_eq!(tops(&tree, &ids), vec![0.0]);
}

#[test]
fn test_stretch_fills_line() {
    let (tree, _, ids) = layout(
        container(200).with(PropertyKey::Height, 100),
        vec![container(50), sized(50, 30), container(50).with(PropertyKey::MaxHeight, 60)],
    );
    assert_eq!(heights(&tree, &ids), vec![100.0, 30.0, 60.0]);
}

#[test]
fn test_align_self_overrides_align_items() {
    let (tree, _, ids) = layout(
        container(200)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::AlignItems, "flex-end"),
        vec![
            sized(50, 20),
            sized(50, 20).with(PropertyKey::AlignSelf, "flex-start"),
            sized(50, 20).with(PropertyKey::AlignSelf, "center"),
        ],
    );
    assert_eq!(tops(&tree, &ids), vec![80.0, 0.0, 40.0]);
}

#[test]
fn test_cross_auto_margins() {
    let (tree, _, ids) = layout(
        container(200).with(PropertyKey::Height, 100),
        vec![
            sized(50, 20).with(PropertyKey::MarginTop, "auto"),
            sized(50, 20).with(PropertyKey::Margin, vec![RawValue::from("auto"), RawValue::from(0)]),
            sized(50, 20)
                .with(PropertyKey::MarginTop, 5)
                .with(PropertyKey::MarginBottom, "auto"),
        ],
    );
    assert_eq!(tops(&tree, &ids), vec![80.0, 40.0, 5.0]);
}

#[test]
fn test_baseline_is_rejected() {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(container(100).with(PropertyKey::AlignItems, "baseline"));
    let item = tree.create_node(container(10));
    tree.append_child(root, item).unwrap();
    assert_eq!(
        tree.calculate_layout(root, None, None, None),
        Err(LayoutError::UnsupportedFeature("align-self: baseline"))
    );
}

// ---------------------------------------------------------------------------
// Wrapping and align-content
//
// [§ 8.4 Packing Flex Lines](https://www.w3.org/TR/css-flexbox-1/#align-content-property)
// ---------------------------------------------------------------------------

#[test]
fn test_wrap_starts_new_line() {
    let (tree, _, ids) = layout(
        container(200).with(PropertyKey::FlexWrap, "wrap"),
        vec![sized(100, 10), sized(100, 10), sized(100, 10)],
    );
    assert_eq!(lefts(&tree, &ids), vec![0.0, 100.0, 0.0]);
    assert_eq!(tops(&tree, &ids), vec![0.0, 0.0, 10.0]);
}

#[test]
fn test_wrap_reverse_stacks_from_the_end() {
    let (tree, _, ids) = layout(
        container(200)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::FlexWrap, "wrap-reverse")
            .with(PropertyKey::AlignContent, "flex-start"),
        vec![sized(100, 10), sized(100, 10), sized(100, 10)],
    );
    // Lines are reversed and packed toward the far edge.
    assert_eq!(tops(&tree, &ids), vec![90.0, 90.0, 80.0]);
}

#[test]
fn test_wrap_reverse_space_between() {
    let (tree, _, ids) = layout(
        container(200)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::FlexWrap, "wrap-reverse")
            .with(PropertyKey::AlignContent, "space-between"),
        vec![sized(150, 20), sized(150, 20)],
    );
    // The first line ends up against the far edge, the second at the start.
    assert_eq!(tops(&tree, &ids), vec![80.0, 0.0]);
    assert_eq!(lefts(&tree, &ids), vec![0.0, 0.0]);
}

#[test]
fn test_align_content_stretch_distributes_space() {
    let (tree, _, ids) = layout(
        container(200)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::FlexWrap, "wrap"),
        vec![container(100).with(PropertyKey::OffsetHeight, 10), sized(150, 30)],
    );
    // Space 60 is split 30/30; the first line's stretched item absorbs its share.
    assert_eq!(tops(&tree, &ids), vec![0.0, 40.0]);
    assert_eq!(heights(&tree, &ids), vec![40.0, 30.0]);
}

#[test]
fn test_align_content_center() {
    let (tree, _, ids) = layout(
        container(200)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::FlexWrap, "wrap")
            .with(PropertyKey::AlignContent, "center"),
        vec![sized(150, 20), sized(150, 20)],
    );
    assert_eq!(tops(&tree, &ids), vec![30.0, 50.0]);
}

#[test]
fn test_single_line_forces_stretch() {
    let (tree, root, _) = layout(
        container(200)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::AlignContent, "center"),
        vec![sized(50, 20)],
    );
    let root = tree
        .get_computed_layout(root, &[PropertyKey::AlignContent])
        .unwrap();
    assert_eq!(root.extra["alignContent"], serde_json::json!("stretch"));
}

#[test]
fn test_auto_height_uses_first_line_only() {
    let (tree, root, _) = layout(
        container(100).with(PropertyKey::FlexWrap, "wrap"),
        vec![sized(100, 10), sized(100, 30)],
    );
    let root = tree.get_computed_layout(root, &[]).unwrap();
    assert_eq!(root.height, 10.0);
    assert!(was_warned(
        "Flex",
        "auto-sized container with several lines is sized from its first line only"
    ));
}

// ---------------------------------------------------------------------------
// Tree and entry points
// ---------------------------------------------------------------------------

#[test]
fn test_calculate_layout_overrides() {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(Style::new());
    let item = tree.create_node(sized(40, 10));
    tree.append_child(root, item).unwrap();
    tree.calculate_layout(root, Some(100.0), Some(50.0), Some(FlexDirection::Column))
        .unwrap();

    let root_box = tree.get_computed_layout(root, &[]).unwrap();
    assert_eq!((root_box.width, root_box.height), (100.0, 50.0));
    let item_box = tree.get_computed_layout(item, &[]).unwrap();
    assert_eq!((item_box.left, item_box.top), (0.0, 0.0));
}

#[test]
fn test_relayout_is_deterministic() {
    let (mut tree, root, ids) = layout(
        container(200)
            .with(PropertyKey::Height, 50)
            .with(PropertyKey::JustifyContent, "center"),
        vec![container(50).with(PropertyKey::FlexGrow, 1), container(30)],
    );
    let first = tree.get_all_computed_layout(root, &[]).unwrap();
    tree.calculate_layout(root, None, None, None).unwrap();
    let second = tree.get_all_computed_layout(root, &[]).unwrap();
    assert_eq!(first, second);
    assert_eq!(widths(&tree, &ids), vec![170.0, 30.0]);
}

#[test]
fn test_all_computed_layout_sorted_by_id() {
    let (tree, root, _) = layout(
        container(200),
        vec![
            container(10).with(PropertyKey::Order, 1),
            container(20),
        ],
    );
    let all = tree.get_all_computed_layout(root, &[]).unwrap();
    let children = all.children.unwrap();
    assert_eq!(children[0].width, 10.0);
    assert_eq!(children[0].left, 20.0);
    assert_eq!(children[1].left, 0.0);
    assert!(children[0].children.is_none());
}

#[test]
fn test_extra_properties_in_output() {
    let (tree, _, ids) = layout(
        container(200),
        vec![container(50).with(PropertyKey::Flex, "2 0 50%")],
    );
    let item = tree
        .get_computed_layout(ids[0], &[PropertyKey::FlexGrow, PropertyKey::FlexBasis])
        .unwrap();
    assert_eq!(item.extra["flexGrow"], serde_json::json!(2.0));
    assert_eq!(item.extra["flexBasis"], serde_json::json!(100.0));
    assert_eq!(item.width, 200.0);
}

#[test]
fn test_all_computed_layout_reports_extras_on_root() {
    let (tree, root, _) = layout(
        container(200).with(PropertyKey::JustifyContent, "center"),
        vec![container(50)],
    );
    let all = tree
        .get_all_computed_layout(root, &[PropertyKey::JustifyContent])
        .unwrap();
    assert_eq!(all.extra["justifyContent"], serde_json::json!("center"));
    let children = all.children.unwrap();
    assert_eq!(children[0].extra["justifyContent"], serde_json::json!("flex-start"));
}

#[test]
fn test_empty_container_is_untouched() {
    let (tree, root, _) = layout(sized(120, 40), vec![]);
    let root = tree.get_all_computed_layout(root, &[]).unwrap();
    assert_eq!((root.width, root.height), (120.0, 40.0));
    assert_eq!(root.children, Some(vec![]));
}

#[test]
fn test_nested_containers() {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(sized(300, 100));
    let inner = tree.create_node(
        Style::new()
            .with(PropertyKey::FlexGrow, 1)
            .with(PropertyKey::JustifyContent, "flex-end"),
    );
    let fixed = tree.create_node(container(100));
    let leaf = tree.create_node(container(20).with(PropertyKey::Height, "50%"));
    tree.append_child(root, inner).unwrap();
    tree.append_child(root, fixed).unwrap();
    tree.append_child(inner, leaf).unwrap();
    tree.calculate_layout(root, None, None, None).unwrap();

    let all = tree.get_all_computed_layout(root, &[]).unwrap();
    let children = all.children.unwrap();
    // inner grew to 200 and was stretched to 100 tall.
    assert_eq!((children[0].width, children[0].height), (200.0, 100.0));
    assert_eq!(children[1].left, 200.0);
    let grandchildren = children[0].children.clone().unwrap();
    assert_eq!(grandchildren[0].left, 180.0);
    assert_eq!(grandchildren[0].height, 50.0);
    assert!(children[1].children.is_none());
}

#[test]
fn test_percentage_child_of_auto_root_fails() {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(Style::new());
    let item = tree.create_node(container(10).with(PropertyKey::Height, "50%"));
    tree.append_child(root, item).unwrap();
    assert_eq!(
        tree.calculate_layout(root, None, None, None),
        Err(LayoutError::MissingParent {
            property: PropertyKey::Height
        })
    );
}
