//! Free-space distribution shared by `justify-content` and `align-content`.
//!
//! [§ 8.2 Axis Alignment](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
//! [§ 8.4 Packing Flex Lines](https://www.w3.org/TR/css-flexbox-1/#align-content-property)
//!
//! Both properties split leftover space into `count + 1` gaps: one before the
//! first item (or line), one between each adjacent pair, and one after the
//! last. Gap `i` precedes item `i`; the final gap trails the last item.

use crate::style::{AlignContent, JustifyContent};

/// A distribution mode, the union of the `justify-content` and
/// `align-content` keywords plus the internal `space-between-reverse` mode
/// produced by exchanging start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// All space after the last item.
    FlexStart,
    /// All space before the first item.
    FlexEnd,
    /// Half before the first item, half after the last.
    Center,
    /// Space only between items; a single item gets all space after it.
    SpaceBetween,
    /// Like `SpaceBetween`, but a single item gets all space before it.
    SpaceBetweenReverse,
    /// Full gaps between items, half gaps on either end.
    SpaceAround,
    /// Equal gaps everywhere.
    SpaceEvenly,
    /// Space added after each item as per-item growth, none before the first.
    Stretch,
}

impl Distribution {
    /// Swap the meaning of start and end, as a reversed direction or
    /// `wrap-reverse` does.
    #[must_use]
    pub const fn exchanged(self) -> Self {
        match self {
            Self::FlexStart => Self::FlexEnd,
            Self::FlexEnd => Self::FlexStart,
            Self::SpaceBetween => Self::SpaceBetweenReverse,
            other => other,
        }
    }
}

impl From<JustifyContent> for Distribution {
    fn from(value: JustifyContent) -> Self {
        match value {
            JustifyContent::FlexStart => Self::FlexStart,
            JustifyContent::FlexEnd => Self::FlexEnd,
            JustifyContent::Center => Self::Center,
            JustifyContent::SpaceBetween => Self::SpaceBetween,
            JustifyContent::SpaceAround => Self::SpaceAround,
            JustifyContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

impl From<AlignContent> for Distribution {
    fn from(value: AlignContent) -> Self {
        match value {
            AlignContent::Stretch => Self::Stretch,
            AlignContent::FlexStart => Self::FlexStart,
            AlignContent::FlexEnd => Self::FlexEnd,
            AlignContent::Center => Self::Center,
            AlignContent::SpaceBetween => Self::SpaceBetween,
            AlignContent::SpaceAround => Self::SpaceAround,
            AlignContent::SpaceEvenly => Self::SpaceEvenly,
        }
    }
}

/// Split `space` into `count + 1` gaps according to `mode`.
///
/// "If the leftover free-space is negative, this value is identical to
/// flex-start" for `space-between` and `stretch`; `space-around` and
/// `space-evenly` fall back to `center`. No mode produces negative gaps
/// between items.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn distribute_space(space: f64, mode: Distribution, count: usize) -> Vec<f64> {
    let mut gaps = vec![0.0; count + 1];
    if count == 0 {
        return gaps;
    }

    let mode = if space < 0.0 {
        match mode {
            Distribution::SpaceBetween | Distribution::Stretch => Distribution::FlexStart,
            Distribution::SpaceAround | Distribution::SpaceEvenly => Distribution::Center,
            other => other,
        }
    } else {
        mode
    };

    let n = count as f64;
    match mode {
        Distribution::FlexStart => {}
        Distribution::FlexEnd => gaps[0] = space,
        Distribution::Center => {
            gaps[0] = space / 2.0;
            gaps[count] = space / 2.0;
        }
        Distribution::SpaceBetween if count == 1 => gaps[1] = space,
        Distribution::SpaceBetweenReverse if count == 1 => gaps[0] = space,
        Distribution::SpaceBetween | Distribution::SpaceBetweenReverse => {
            let gap = space / (n - 1.0);
            for slot in &mut gaps[1..count] {
                *slot = gap;
            }
        }
        Distribution::SpaceAround => {
            let unit = space / n;
            for slot in &mut gaps[1..count] {
                *slot = unit;
            }
            gaps[0] = unit / 2.0;
            gaps[count] = unit / 2.0;
        }
        Distribution::SpaceEvenly => gaps.fill(space / (n + 1.0)),
        Distribution::Stretch => {
            let unit = space / n;
            for slot in &mut gaps[1..] {
                *slot = unit;
            }
        }
    }
    log::trace!("distribute {space} as {mode:?} over {count}: {gaps:?}");
    gaps
}
