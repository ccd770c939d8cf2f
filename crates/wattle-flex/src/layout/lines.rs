//! Ordering and line breaking.
//!
//! [§ 9.3 Main Size Determination](https://www.w3.org/TR/css-flexbox-1/#algo-line-break)
//!
//! "Collect flex items into flex lines: If the flex container is
//! single-line, collect all the flex items into a single flex line.
//! Otherwise, starting from the first uncollected item, collect consecutive
//! items one by one until the first time that the next collected item would
//! not fit into the flex container's inner main size [...]. If the very
//! first uncollected item wouldn't fit, collect just it into the line."

use crate::style::{FlexDirection, FlexWrap};
use crate::tree::NodeId;

/// The inputs line breaking needs from one child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    /// The child.
    pub id: NodeId,
    /// Its resolved `order`.
    pub order: i32,
    /// Its outer size along the container's main axis.
    pub outer_main: f64,
}

/// [§ 5.4 Display Order: the order property](https://www.w3.org/TR/css-flexbox-1/#order-property)
///
/// "A flex container lays out its content in order-modified document
/// order, starting from the lowest numbered ordinal group and going up.
/// Items with the same ordinal group are laid out in the order they appear
/// in the source document."
///
/// Node ids are allocated in creation order, so they serve as the
/// document-order tie-break.
pub fn sort_by_order(items: &mut [LineItem]) {
    items.sort_by_key(|item| (item.order, item.id));
}

/// Partitions ordered children into flex lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBreaker {
    /// The container's `flex-wrap`.
    pub wrap: FlexWrap,
    /// The container's `flex-direction`.
    pub direction: FlexDirection,
    /// The container's definite inner main size, if any.
    pub main_size: Option<f64>,
}

impl LineBreaker {
    /// Break `items` (already in order-modified document order) into lines.
    ///
    /// A `nowrap` container, or one without a main size, yields a single
    /// line. `wrap-reverse` reverses the order of the lines; a reversed
    /// direction reverses the items within each line.
    #[must_use]
    pub fn break_lines(&self, items: &[LineItem]) -> Vec<Vec<NodeId>> {
        if items.is_empty() {
            return Vec::new();
        }

        let mut lines: Vec<Vec<NodeId>> = match (self.wrap, self.main_size) {
            (FlexWrap::Nowrap, _) | (_, None) => vec![items.iter().map(|item| item.id).collect()],
            (_, Some(main_size)) => {
                let mut lines = Vec::new();
                let mut line = Vec::new();
                let mut running = 0.0;
                for item in items {
                    if running + item.outer_main > main_size && !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                        running = 0.0;
                    }
                    running += item.outer_main;
                    line.push(item.id);
                }
                if !line.is_empty() {
                    lines.push(line);
                }
                if self.wrap == FlexWrap::WrapReverse {
                    lines.reverse();
                }
                lines
            }
        };

        if self.direction.is_reverse() {
            for line in &mut lines {
                line.reverse();
            }
        }
        log::trace!("broke {} items into {} lines", items.len(), lines.len());
        lines
    }
}
