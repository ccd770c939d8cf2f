//! Main/cross axis mapping.
//!
//! [§ 2 Flex Layout Box Model and Terminology](https://www.w3.org/TR/css-flexbox-1/#box-model)
//!
//! "The main axis of a flex container is the primary axis along which flex
//! items are laid out. [...] The axis perpendicular to the main axis is
//! called the cross axis."
//!
//! The algorithm in [`super::flex_line`] and [`super::compose`] speaks only of
//! main and cross. [`AxisMapping`] is computed once per container from its
//! `flex-direction`, and the per-axis accessors on [`ResolvedStyle`] turn an
//! [`Axis`] back into the concrete width/height, left/top, and edge fields.

use crate::style::{AutoOr, BoxSizing, FlexDirection, ResolvedStyle};

/// A physical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Width, `left`, left/right edges.
    Horizontal,
    /// Height, `top`, top/bottom edges.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Which physical axis plays the main and cross role for one container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMapping {
    /// The axis items are laid out along.
    pub main: Axis,
    /// The axis lines are stacked along.
    pub cross: Axis,
}

impl AxisMapping {
    /// `row`/`row-reverse` run horizontally, `column`/`column-reverse`
    /// vertically. Reversal does not change the mapping.
    #[must_use]
    pub const fn for_direction(direction: FlexDirection) -> Self {
        let main = if direction.is_row() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        Self {
            main,
            cross: main.perpendicular(),
        }
    }
}

impl ResolvedStyle {
    /// The explicit `width` or `height`.
    #[must_use]
    pub const fn size(&self, axis: Axis) -> AutoOr {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The explicit size, if set to a non-zero length.
    #[must_use]
    pub fn explicit_size(&self, axis: Axis) -> Option<f64> {
        self.size(axis).non_zero()
    }

    /// `computed_width` or `computed_height`.
    #[must_use]
    pub const fn computed_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.computed_width,
            Axis::Vertical => self.computed_height,
        }
    }

    /// Overwrite the computed size on one axis.
    pub const fn set_computed_size(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.computed_width = value,
            Axis::Vertical => self.computed_height = value,
        }
    }

    /// The outer size (margin box, see [`ResolvedStyle::layout_width`]).
    #[must_use]
    pub fn outer_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.layout_width(),
            Axis::Vertical => self.layout_height(),
        }
    }

    /// `min-width` or `min-height`.
    #[must_use]
    pub const fn min_size(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.min_width,
            Axis::Vertical => self.min_height,
        }
    }

    /// `max-width` or `max-height`.
    #[must_use]
    pub const fn max_size(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.max_width,
            Axis::Vertical => self.max_height,
        }
    }

    /// The left or top margin.
    #[must_use]
    pub const fn margin_start(&self, axis: Axis) -> AutoOr {
        match axis {
            Axis::Horizontal => self.margin.left,
            Axis::Vertical => self.margin.top,
        }
    }

    /// The right or bottom margin.
    #[must_use]
    pub const fn margin_end(&self, axis: Axis) -> AutoOr {
        match axis {
            Axis::Horizontal => self.margin.right,
            Axis::Vertical => self.margin.bottom,
        }
    }

    /// Border plus padding on both sides of one axis.
    #[must_use]
    pub fn border_padding(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => {
                self.border.left + self.border.right + self.padding.left + self.padding.right
            }
            Axis::Vertical => {
                self.border.top + self.border.bottom + self.padding.top + self.padding.bottom
            }
        }
    }

    /// The content-box size this node offers its children on one axis,
    /// given its border-box or content-box `size`.
    #[must_use]
    pub fn inner_size(&self, axis: Axis, size: f64) -> f64 {
        if self.box_sizing == BoxSizing::BorderBox {
            (size - self.border_padding(axis)).max(0.0)
        } else {
            size
        }
    }
}
