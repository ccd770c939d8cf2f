//! Keyword-valued flexbox properties.
//!
//! [CSS Flexible Box Layout Module Level 1](https://www.w3.org/TR/css-flexbox-1/)
//!
//! Each enum's default is the property's initial value, which is also the
//! value an unset property resolves to.

use strum_macros::{Display, EnumString};

/// [§ 5.1 Flex Flow Direction: the flex-direction property](https://www.w3.org/TR/css-flexbox-1/#flex-direction-property)
///
/// "The flex-direction property specifies how flex items are placed in the
/// flex container, by setting the direction of the flex container's main axis."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FlexDirection {
    /// "The flex container's main axis has the same orientation as the inline axis."
    #[default]
    Row,
    /// "Same as row, except the main-start and main-end directions are swapped."
    RowReverse,
    /// "The flex container's main axis has the same orientation as the block axis."
    Column,
    /// "Same as column, except the main-start and main-end directions are swapped."
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis runs horizontally.
    #[must_use]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether main-start and main-end are swapped.
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// [§ 5.2 Flex Line Wrapping: the flex-wrap property](https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property)
///
/// "The flex-wrap property controls whether the flex container is
/// single-line or multi-line, and the direction of the cross-axis."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum FlexWrap {
    /// "The flex container is single-line."
    #[default]
    Nowrap,
    /// "The flex container is multi-line."
    Wrap,
    /// "Same as wrap", with cross-start and cross-end swapped.
    WrapReverse,
}

/// [§ 8.2 Axis Alignment: the justify-content property](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum JustifyContent {
    /// "Flex items are packed toward the start of the line."
    #[default]
    FlexStart,
    /// "Flex items are packed toward the end of the line."
    FlexEnd,
    /// "Flex items are packed toward the center of the line."
    Center,
    /// "Flex items are evenly distributed in the line."
    SpaceBetween,
    /// "Flex items are evenly distributed in the line, with half-size spaces on either end."
    SpaceAround,
    /// Equal spaces before, between, and after the items.
    SpaceEvenly,
}

/// [§ 8.3 Cross-axis Alignment: the align-items property](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum AlignItems {
    /// Items fill the line's cross size.
    #[default]
    Stretch,
    /// Items are placed at cross-start.
    FlexStart,
    /// Items are placed at cross-end.
    FlexEnd,
    /// Items are centered in the line.
    Center,
    /// Accepted by the parser; rejected at layout time.
    Baseline,
}

/// [§ 8.3 Cross-axis Alignment: the align-self property](https://www.w3.org/TR/css-flexbox-1/#align-items-property)
///
/// "align-self allows this default alignment to be overridden for
/// individual flex items."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum AlignSelf {
    /// Defer to the container's `align-items`.
    #[default]
    Auto,
    /// Fill the line's cross size.
    Stretch,
    /// Place at cross-start.
    FlexStart,
    /// Place at cross-end.
    FlexEnd,
    /// Center in the line.
    Center,
    /// Accepted by the parser; rejected at layout time.
    Baseline,
}

impl AlignSelf {
    /// Swap the start/end meaning, as `flex-wrap: wrap-reverse` does.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::FlexStart => Self::FlexEnd,
            Self::FlexEnd => Self::FlexStart,
            other => other,
        }
    }
}

impl From<AlignItems> for AlignSelf {
    fn from(value: AlignItems) -> Self {
        match value {
            AlignItems::Stretch => Self::Stretch,
            AlignItems::FlexStart => Self::FlexStart,
            AlignItems::FlexEnd => Self::FlexEnd,
            AlignItems::Center => Self::Center,
            AlignItems::Baseline => Self::Baseline,
        }
    }
}

/// [§ 8.4 Packing Flex Lines: the align-content property](https://www.w3.org/TR/css-flexbox-1/#align-content-property)
///
/// "The align-content property aligns a flex container's lines within the
/// flex container when there is extra space in the cross-axis."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum AlignContent {
    /// "Lines stretch to take up the remaining space."
    #[default]
    Stretch,
    /// "Lines are packed toward the start of the flex container."
    FlexStart,
    /// "Lines are packed toward the end of the flex container."
    FlexEnd,
    /// "Lines are packed toward the center of the flex container."
    Center,
    /// "Lines are evenly distributed in the flex container."
    SpaceBetween,
    /// "Lines are evenly distributed in the flex container, with half-size
    /// spaces on either end."
    SpaceAround,
    /// Equal spaces before, between, and after the lines.
    SpaceEvenly,
}

/// [§ 4.4 box-sizing](https://www.w3.org/TR/css-box-4/#box-sizing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum BoxSizing {
    /// Sizes apply to the content box; border and padding are added outside.
    #[default]
    #[strum(to_string = "content-box", serialize = "contentBox")]
    ContentBox,
    /// Sizes include border and padding.
    #[strum(to_string = "border-box")]
    BorderBox,
}
