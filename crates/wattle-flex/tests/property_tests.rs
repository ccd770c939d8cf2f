//! Property tests for resolution and flex layout.

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use wattle_flex::layout::{LineBreaker, LineItem, sort_by_order};
use wattle_flex::{
    FlexDirection, FlexWrap, LayoutTree, NodeId, PropertyKey, RawValue, Style, expand_shorthand,
    resolve_length,
};

const EPSILON: f64 = 1e-6;

/// Map an arbitrary integer to a size in `1..=limit`.
fn size(raw: u16, limit: u16) -> i32 {
    i32::from(raw % limit) + 1
}

fn lay_out_row(container: Style, items: Vec<Style>) -> (LayoutTree, Vec<NodeId>) {
    let mut tree = LayoutTree::new();
    let root = tree.create_node(container);
    let ids = items
        .into_iter()
        .map(|style| {
            let id = tree.create_node(style);
            tree.append_child(root, id).unwrap();
            id
        })
        .collect();
    tree.calculate_layout(root, None, None, None).unwrap();
    (tree, ids)
}

fn width_of(tree: &LayoutTree, id: NodeId) -> f64 {
    tree.get_computed_layout(id, &[]).unwrap().width
}

#[quickcheck]
fn shorthand_expansion_follows_css_order(values: Vec<i8>) -> bool {
    let expected = match values.as_slice() {
        [a] => Some([*a, *a, *a, *a]),
        [a, b] => Some([*a, *b, *a, *b]),
        [a, b, c] => Some([*a, *b, *c, *b]),
        [a, b, c, d] => Some([*a, *b, *c, *d]),
        _ => None,
    };
    expand_shorthand(&values) == expected
}

#[quickcheck]
fn percentage_scales_reference(percent: u8, reference: u16) -> bool {
    let value = RawValue::from(format!("{percent}%"));
    let resolved = resolve_length(PropertyKey::Width, &value, Some(f64::from(reference))).unwrap();
    let expected = f64::from(reference) * f64::from(percent) / 100.0;
    (resolved.to_px_or(f64::NAN) - expected).abs() < EPSILON
}

#[quickcheck]
fn grow_fills_the_container(items: Vec<(u16, u8)>) -> TestResult {
    let items: Vec<(i32, u8)> = items
        .iter()
        .take(6)
        .map(|&(width, grow)| (size(width, 40), grow % 4))
        .collect();
    if items.iter().all(|&(_, grow)| grow == 0) {
        return TestResult::discard();
    }
    let styles = items
        .iter()
        .map(|&(width, grow)| {
            Style::new()
                .with(PropertyKey::Width, width)
                .with(PropertyKey::FlexGrow, i32::from(grow))
        })
        .collect();
    let (tree, ids) = lay_out_row(Style::new().with(PropertyKey::Width, 300), styles);
    let total: f64 = ids.iter().map(|&id| width_of(&tree, id)).sum();
    TestResult::from_bool((total - 300.0).abs() < EPSILON)
}

#[quickcheck]
fn shrink_never_goes_below_floor(widths: Vec<u16>, container: u16) -> TestResult {
    let widths: Vec<i32> = widths.iter().take(8).map(|&w| size(w, 500)).collect();
    if widths.is_empty() {
        return TestResult::discard();
    }
    let styles = widths
        .iter()
        .map(|&width| Style::new().with(PropertyKey::Width, width))
        .collect();
    let (tree, ids) = lay_out_row(
        Style::new().with(PropertyKey::Width, size(container, 100)),
        styles,
    );
    TestResult::from_bool(ids.iter().all(|&id| width_of(&tree, id) >= 1.0 - EPSILON))
}

#[quickcheck]
fn sort_by_order_is_stable(orders: Vec<i8>) -> bool {
    let mut tree = LayoutTree::new();
    let mut items: Vec<LineItem> = orders
        .iter()
        .map(|&order| LineItem {
            id: tree.create_node(Style::new()),
            order: i32::from(order),
            outer_main: 0.0,
        })
        .collect();
    sort_by_order(&mut items);
    items
        .windows(2)
        .all(|pair| (pair[0].order, pair[0].id) < (pair[1].order, pair[1].id))
}

#[quickcheck]
fn wrapping_partitions_items(sizes: Vec<u16>, main_size: u16) -> bool {
    let mut tree = LayoutTree::new();
    let items: Vec<LineItem> = sizes
        .iter()
        .take(20)
        .map(|&s| LineItem {
            id: tree.create_node(Style::new()),
            order: 0,
            outer_main: f64::from(size(s, 150)),
        })
        .collect();
    let main_size = f64::from(size(main_size, 200));
    let breaker = LineBreaker {
        wrap: FlexWrap::Wrap,
        direction: FlexDirection::Row,
        main_size: Some(main_size),
    };
    let lines = breaker.break_lines(&items);

    let flattened: Vec<NodeId> = lines.iter().flatten().copied().collect();
    let expected: Vec<NodeId> = items.iter().map(|item| item.id).collect();
    let outer = |id: NodeId| items[id.index()].outer_main;
    // Only a lone oversized item may overflow its line.
    let lines_fit = lines
        .iter()
        .all(|line| line.len() == 1 || line.iter().map(|&id| outer(id)).sum::<f64>() <= main_size);
    flattened == expected && lines_fit && lines.iter().all(|line| !line.is_empty())
}

#[quickcheck]
fn single_line_always_stretches(choice: u8) -> bool {
    let keywords = [
        "flex-start",
        "flex-end",
        "center",
        "space-between",
        "space-around",
        "space-evenly",
        "stretch",
    ];
    let keyword = keywords[usize::from(choice) % keywords.len()];
    let mut tree = LayoutTree::new();
    let root = tree.create_node(
        Style::new()
            .with(PropertyKey::Width, 100)
            .with(PropertyKey::Height, 100)
            .with(PropertyKey::AlignContent, keyword),
    );
    let item = tree.create_node(Style::new().with(PropertyKey::Width, 10));
    tree.append_child(root, item).unwrap();
    tree.calculate_layout(root, None, None, None).unwrap();

    let item = tree.get_computed_layout(item, &[]).unwrap();
    let root = tree
        .get_computed_layout(root, &[PropertyKey::AlignContent])
        .unwrap();
    item.height == 100.0 && root.extra["alignContent"] == "stretch"
}
