//! Property resolution: raw property bags to concrete box and flex metrics.
//!
//! [§ 6.1 Used Values](https://www.w3.org/TR/css-cascade-4/#used)
//!
//! "The used value is the result of taking the computed value and
//! completing any remaining calculations to make it the absolute
//! theoretical value used in the layout of the document."
//!
//! Resolution runs as an ordered pipeline. Each stage produces a typed value
//! and [`ResolvedStyle::assemble`] only accepts the full set, so a node can
//! never be partially resolved:
//!
//! 1. [`BoxEdges`] - border, then padding, then margin
//! 2. [`FlexFactors`] - the `flex` shorthand and its longhands
//! 3. [`FlexModes`] - `flex-flow`, then the keyword properties
//! 4. [`SizeConstraints`] - width/min/max and height/min/max
//! 5. computed size (flex basis or intrinsic size, clamped), from which the
//!    outer layout size is derived

use std::str::FromStr;

use wattle_common::warning::warn_once;

use super::keywords::{
    AlignContent, AlignItems, AlignSelf, BoxSizing, FlexDirection, FlexWrap, JustifyContent,
};
use super::values::{AutoEdgeSizes, AutoOr, EdgeSizes, RawValue};
use super::{PropertyKey, Style};
use crate::error::{LayoutError, LayoutResult};

/// The parent's resolved state that a child's percentages and flex basis
/// depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentContext {
    /// The parent's definite inner width, if it has one.
    pub width: Option<f64>,
    /// The parent's definite inner height, if it has one.
    pub height: Option<f64>,
    /// The parent's resolved `flex-direction`.
    pub flex_direction: FlexDirection,
}

impl ParentContext {
    /// The parent's definite size along its main axis.
    #[must_use]
    pub const fn main_size(&self) -> Option<f64> {
        if self.flex_direction.is_row() {
            self.width
        } else {
            self.height
        }
    }
}

/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// Resolve one length-or-percentage-or-auto value.
///
/// - `"auto"` passes through as [`AutoOr::Auto`].
/// - Numbers pass through unchanged.
/// - `"<n>%"` resolves to `n% × reference`.
/// - Any other string that parses as a finite float is accepted.
///
/// # Errors
///
/// [`LayoutError::MissingParent`] for a percentage when `reference` is
/// `None`, [`LayoutError::InvalidValue`] for anything unparseable.
pub fn resolve_length(
    property: PropertyKey,
    value: &RawValue,
    reference: Option<f64>,
) -> LayoutResult<AutoOr> {
    let invalid = || LayoutError::InvalidValue {
        property,
        value: value.to_string(),
    };
    match value {
        RawValue::Number(n) if n.is_finite() => Ok(AutoOr::Length(*n)),
        RawValue::Text(text) => {
            let text = text.trim();
            if text == "auto" {
                return Ok(AutoOr::Auto);
            }
            if let Some(percent) = text.strip_suffix('%') {
                let percent = parse_finite(percent).ok_or_else(invalid)?;
                let base = reference.ok_or(LayoutError::MissingParent { property })?;
                return Ok(AutoOr::Length(base * percent / 100.0));
            }
            parse_finite(text).map(AutoOr::Length).ok_or_else(invalid)
        }
        RawValue::Number(_) | RawValue::List(_) => Err(invalid()),
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// [§ 1.4.2 Shorthand properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
///
/// Expand a 1/2/3/4-value edge shorthand to `[top, right, bottom, left]`:
///
/// ```text
/// [a]          -> [a, a, a, a]
/// [a, b]       -> [a, b, a, b]
/// [a, b, c]    -> [a, b, c, b]
/// [a, b, c, d] -> [a, b, c, d]
/// ```
///
/// Returns `None` for an empty list or more than four values.
#[must_use]
pub fn expand_shorthand<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [a] => Some([a.clone(), a.clone(), a.clone(), a.clone()]),
        [a, b] => Some([a.clone(), b.clone(), a.clone(), b.clone()]),
        [a, b, c] => Some([a.clone(), b.clone(), c.clone(), b.clone()]),
        [a, b, c, d] => Some([a.clone(), b.clone(), c.clone(), d.clone()]),
        _ => None,
    }
}

const BORDER_EDGES: [PropertyKey; 4] = [
    PropertyKey::BorderTop,
    PropertyKey::BorderRight,
    PropertyKey::BorderBottom,
    PropertyKey::BorderLeft,
];

const PADDING_EDGES: [PropertyKey; 4] = [
    PropertyKey::PaddingTop,
    PropertyKey::PaddingRight,
    PropertyKey::PaddingBottom,
    PropertyKey::PaddingLeft,
];

const MARGIN_EDGES: [PropertyKey; 4] = [
    PropertyKey::MarginTop,
    PropertyKey::MarginRight,
    PropertyKey::MarginBottom,
    PropertyKey::MarginLeft,
];

/// Resolve a shorthand and its four longhands. A longhand, when present,
/// replaces the corresponding expanded shorthand value.
fn resolve_edge_set(
    style: &Style,
    shorthand: PropertyKey,
    longhands: [PropertyKey; 4],
    reference: Option<f64>,
) -> LayoutResult<[(PropertyKey, AutoOr); 4]> {
    let mut edges = longhands.map(|key| (key, AutoOr::Length(0.0)));

    if let Some(raw) = style.get(shorthand) {
        let components = raw.components();
        let expanded = expand_shorthand(&components).ok_or_else(|| LayoutError::InvalidValue {
            property: shorthand,
            value: raw.to_string(),
        })?;
        for ((_, slot), value) in edges.iter_mut().zip(expanded.iter()) {
            *slot = resolve_length(shorthand, value, reference)?;
        }
    }

    for (key, slot) in &mut edges {
        if let Some(raw) = style.get(*key) {
            *slot = resolve_length(*key, raw, reference)?;
        }
    }
    Ok(edges)
}

/// [§ 6.1 Padding](https://www.w3.org/TR/css-box-3/#paddings) /
/// [§ 4.1 Border Width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
///
/// "Negative values for padding properties are invalid." Border widths
/// follow the same rule, and neither accepts `auto`.
fn non_negative_edges(edges: [(PropertyKey, AutoOr); 4]) -> LayoutResult<EdgeSizes> {
    let mut values = [0.0; 4];
    for ((property, value), out) in edges.into_iter().zip(values.iter_mut()) {
        match value {
            AutoOr::Length(v) if v >= 0.0 => *out = v,
            AutoOr::Length(v) => {
                return Err(LayoutError::NegativeOrInvalidBoxValue {
                    property,
                    value: v.to_string(),
                });
            }
            AutoOr::Auto => {
                return Err(LayoutError::NegativeOrInvalidBoxValue {
                    property,
                    value: "auto".to_string(),
                });
            }
        }
    }
    Ok(EdgeSizes::from_array(values))
}

/// Stage 1: border, padding, and margin of one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxEdges {
    /// Border widths. Percentages are rejected: borders have no reference box.
    pub border: EdgeSizes,
    /// Padding; percentages resolve against the parent's width.
    pub padding: EdgeSizes,
    /// Margins; percentages resolve against the parent's width, `auto` is kept.
    pub margin: AutoEdgeSizes,
}

impl BoxEdges {
    /// Resolve border, then padding, then margin.
    ///
    /// # Errors
    ///
    /// Propagates length errors; negative or `auto` border/padding edges fail
    /// with [`LayoutError::NegativeOrInvalidBoxValue`].
    pub fn resolve(style: &Style, parent: Option<&ParentContext>) -> LayoutResult<Self> {
        // [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
        //
        // Padding and margin percentages refer to the width of the containing
        // block on every edge, including top and bottom.
        let reference = parent.and_then(|p| p.width);

        let border = non_negative_edges(resolve_edge_set(
            style,
            PropertyKey::Border,
            BORDER_EDGES,
            None,
        )?)?;
        let padding = non_negative_edges(resolve_edge_set(
            style,
            PropertyKey::Padding,
            PADDING_EDGES,
            reference,
        )?)?;
        let margin = resolve_edge_set(style, PropertyKey::Margin, MARGIN_EDGES, reference)?
            .map(|(_, value)| value);

        Ok(Self {
            border,
            padding,
            margin: AutoEdgeSizes::from_array(margin),
        })
    }
}

/// Stage 2: flex factors and flex basis.
///
/// [§ 7.1 The flex Shorthand](https://www.w3.org/TR/css-flexbox-1/#flex-property)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexFactors {
    /// Non-negative grow factor, `0` when unset or invalid.
    pub grow: f64,
    /// Non-negative shrink factor, `1` when unset or invalid.
    pub shrink: f64,
    /// Resolved flex basis; `None` when unset.
    pub basis: Option<AutoOr>,
}

impl FlexFactors {
    /// Resolve `flex`, then let `flexGrow`/`flexShrink`/`flexBasis` override it.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidValue`] for a malformed `flex` shorthand or flex
    /// basis, [`LayoutError::MissingParent`] for a percentage basis whose
    /// parent has no definite main size.
    pub fn resolve(style: &Style, parent: Option<&ParentContext>) -> LayoutResult<Self> {
        let mut grow: Option<RawValue> = None;
        let mut shrink: Option<RawValue> = None;
        let mut basis: Option<RawValue> = None;

        if let Some(flex) = style.get(PropertyKey::Flex) {
            if let RawValue::Number(_) = flex {
                grow = Some(flex.clone());
            } else {
                let tokens = flex.components();
                match tokens.as_slice() {
                    // "none: Equivalent to flex: 0 0 auto."
                    [RawValue::Text(keyword)] if keyword == "none" => {
                        grow = Some(RawValue::Number(0.0));
                        shrink = Some(RawValue::Number(0.0));
                        basis = Some(RawValue::from("auto"));
                    }
                    // "auto: Equivalent to flex: 1 1 auto."
                    [RawValue::Text(keyword)] if keyword == "auto" => {
                        grow = Some(RawValue::Number(1.0));
                        shrink = Some(RawValue::Number(1.0));
                        basis = Some(RawValue::from("auto"));
                    }
                    [g, rest @ ..] if rest.len() <= 2 => {
                        grow = Some(g.clone());
                        shrink = rest.first().cloned();
                        basis = rest.get(1).cloned();
                    }
                    _ => {
                        return Err(LayoutError::InvalidValue {
                            property: PropertyKey::Flex,
                            value: flex.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(value) = style.get(PropertyKey::FlexGrow) {
            grow = Some(value.clone());
        }
        if let Some(value) = style.get(PropertyKey::FlexShrink) {
            shrink = Some(value.clone());
        }
        if let Some(value) = style.get(PropertyKey::FlexBasis) {
            basis = Some(value.clone());
        }

        let basis = match basis {
            None => None,
            Some(RawValue::Text(text)) if text.trim().is_empty() => None,
            Some(raw) => match parent {
                Some(parent) => Some(resolve_length(
                    PropertyKey::FlexBasis,
                    &raw,
                    parent.main_size(),
                )?),
                None => {
                    warn_once("Flex", "flexBasis ignored on a node without a parent");
                    None
                }
            },
        };

        Ok(Self {
            grow: flex_factor(grow.as_ref(), 0.0),
            shrink: flex_factor(shrink.as_ref(), 1.0),
            basis,
        })
    }
}

/// "Negative numbers are invalid." Invalid or missing factors fall back to
/// the property's initial value.
fn flex_factor(raw: Option<&RawValue>, default: f64) -> f64 {
    raw.and_then(RawValue::as_number)
        .filter(|n| *n >= 0.0)
        .unwrap_or(default)
}

/// Stage 3: keyword properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlexModes {
    /// `flex-direction`
    pub flex_direction: FlexDirection,
    /// `flex-wrap`
    pub flex_wrap: FlexWrap,
    /// `justify-content`
    pub justify_content: JustifyContent,
    /// `align-items`
    pub align_items: AlignItems,
    /// `align-self`
    pub align_self: AlignSelf,
    /// `align-content`
    pub align_content: AlignContent,
    /// `order`
    pub order: i32,
    /// `box-sizing`
    pub box_sizing: BoxSizing,
}

fn parse_keyword<T: FromStr>(property: PropertyKey, raw: &RawValue) -> LayoutResult<T> {
    let invalid = || LayoutError::InvalidEnumValue {
        property,
        value: raw.to_string(),
    };
    match raw {
        RawValue::Text(text) => text.trim().parse().map_err(|_| invalid()),
        RawValue::Number(_) | RawValue::List(_) => Err(invalid()),
    }
}

fn keyword_or_default<T: FromStr + Default>(style: &Style, property: PropertyKey) -> LayoutResult<T> {
    style
        .get(property)
        .map_or_else(|| Ok(T::default()), |raw| parse_keyword(property, raw))
}

/// `order` is an integer; fractional input is truncated toward zero and
/// out-of-range input saturates.
#[allow(clippy::cast_possible_truncation)]
fn truncate_order(n: f64) -> i32 {
    n.trunc() as i32
}

impl FlexModes {
    /// Resolve `flex-flow`, then the keyword longhands (which take precedence
    /// over it), then `order` and `box-sizing`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidEnumValue`] for a keyword outside its allowed
    /// set, [`LayoutError::InvalidValue`] for a non-numeric `order`.
    pub fn resolve(style: &Style) -> LayoutResult<Self> {
        // [§ 5.3 Flex Direction and Wrap: the flex-flow shorthand](https://www.w3.org/TR/css-flexbox-1/#flex-flow-property)
        //
        // "<'flex-direction'> || <'flex-wrap'>"
        let mut flow_direction = None;
        let mut flow_wrap = None;
        if let Some(flow) = style.get(PropertyKey::FlexFlow) {
            for token in flow.components() {
                let text = token.to_string();
                if let Ok(direction) = text.parse::<FlexDirection>() {
                    flow_direction = Some(direction);
                } else if let Ok(wrap) = text.parse::<FlexWrap>() {
                    flow_wrap = Some(wrap);
                } else {
                    return Err(LayoutError::InvalidEnumValue {
                        property: PropertyKey::FlexFlow,
                        value: flow.to_string(),
                    });
                }
            }
        }

        let flex_direction = match style.get(PropertyKey::FlexDirection) {
            Some(raw) => parse_keyword(PropertyKey::FlexDirection, raw)?,
            None => flow_direction.unwrap_or_default(),
        };
        let flex_wrap = match style.get(PropertyKey::FlexWrap) {
            Some(raw) => parse_keyword(PropertyKey::FlexWrap, raw)?,
            None => flow_wrap.unwrap_or_default(),
        };

        let order = match style.get(PropertyKey::Order) {
            None => 0,
            Some(raw) => {
                let n = raw.as_number().ok_or_else(|| LayoutError::InvalidValue {
                    property: PropertyKey::Order,
                    value: raw.to_string(),
                })?;
                truncate_order(n)
            }
        };

        Ok(Self {
            flex_direction,
            flex_wrap,
            justify_content: keyword_or_default(style, PropertyKey::JustifyContent)?,
            align_items: keyword_or_default(style, PropertyKey::AlignItems)?,
            align_self: keyword_or_default(style, PropertyKey::AlignSelf)?,
            align_content: keyword_or_default(style, PropertyKey::AlignContent)?,
            order,
            box_sizing: keyword_or_default(style, PropertyKey::BoxSizing)?,
        })
    }
}

/// Stage 4: size properties and intrinsic sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeConstraints {
    /// `width`; `auto` when unset.
    pub width: AutoOr,
    /// `height`; `auto` when unset.
    pub height: AutoOr,
    /// `min-width`; `None` when unset, `auto`, or zero.
    pub min_width: Option<f64>,
    /// `max-width`; `None` when unset, `auto`, or zero.
    pub max_width: Option<f64>,
    /// `min-height`; `None` when unset, `auto`, or zero.
    pub min_height: Option<f64>,
    /// `max-height`; `None` when unset, `auto`, or zero.
    pub max_height: Option<f64>,
    /// Intrinsic content width (`offsetWidth`, falling back to `width`).
    pub offset_width: f64,
    /// Intrinsic content height (`offsetHeight`, falling back to `height`).
    pub offset_height: f64,
}

fn optional_length(
    style: &Style,
    property: PropertyKey,
    reference: Option<f64>,
) -> LayoutResult<AutoOr> {
    style
        .get(property)
        .map_or(Ok(AutoOr::Auto), |raw| resolve_length(property, raw, reference))
}

impl SizeConstraints {
    /// Resolve width/min/max against the parent's width and height/min/max
    /// against the parent's height.
    ///
    /// # Errors
    ///
    /// Propagates [`resolve_length`] errors.
    pub fn resolve(style: &Style, parent: Option<&ParentContext>) -> LayoutResult<Self> {
        let width_ref = parent.and_then(|p| p.width);
        let height_ref = parent.and_then(|p| p.height);

        let width = optional_length(style, PropertyKey::Width, width_ref)?;
        let height = optional_length(style, PropertyKey::Height, height_ref)?;
        let offset_width = optional_length(style, PropertyKey::OffsetWidth, width_ref)?;
        let offset_height = optional_length(style, PropertyKey::OffsetHeight, height_ref)?;

        Ok(Self {
            width,
            height,
            min_width: optional_length(style, PropertyKey::MinWidth, width_ref)?.non_zero(),
            max_width: optional_length(style, PropertyKey::MaxWidth, width_ref)?.non_zero(),
            min_height: optional_length(style, PropertyKey::MinHeight, height_ref)?.non_zero(),
            max_height: optional_length(style, PropertyKey::MaxHeight, height_ref)?.non_zero(),
            offset_width: offset_width.non_zero().or(width.non_zero()).unwrap_or(0.0),
            offset_height: offset_height.non_zero().or(height.non_zero()).unwrap_or(0.0),
        })
    }
}

/// [§ 4.5 Min/Max Size](https://www.w3.org/TR/CSS2/visudet.html#min-max-widths)
///
/// Clamp `size` into `[min, max]`; a `max` below `min` is raised to `min`.
/// Returns the clamped size and the effective max.
fn clamp_size(size: f64, min: Option<f64>, max: Option<f64>) -> (f64, Option<f64>) {
    let max = match (min, max) {
        (Some(min), Some(max)) if max < min => Some(min),
        _ => max,
    };
    let mut size = size;
    if let Some(min) = min {
        size = size.max(min);
    }
    if let Some(max) = max {
        size = size.min(max);
    }
    (size, max)
}

/// A node's fully resolved properties.
///
/// `computed_width`/`computed_height` are the sizes flex layout reads and
/// adjusts; the outer (layout) sizes are derived from them on demand so they
/// can never fall out of sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// Border widths.
    pub border: EdgeSizes,
    /// Padding.
    pub padding: EdgeSizes,
    /// Margins (may be `auto`).
    pub margin: AutoEdgeSizes,
    /// Grow factor (≥ 0).
    pub flex_grow: f64,
    /// Shrink factor (≥ 0).
    pub flex_shrink: f64,
    /// Flex basis, if set.
    pub flex_basis: Option<AutoOr>,
    /// Main-axis direction of this node's own children.
    pub flex_direction: FlexDirection,
    /// Wrapping policy of this node's own children.
    pub flex_wrap: FlexWrap,
    /// Main-axis distribution of this node's own children.
    pub justify_content: JustifyContent,
    /// Default cross-axis alignment of this node's own children.
    pub align_items: AlignItems,
    /// This node's cross-axis alignment within its line.
    pub align_self: AlignSelf,
    /// Cross-axis distribution of this node's own lines.
    pub align_content: AlignContent,
    /// Ordering key among siblings.
    pub order: i32,
    /// Box-sizing model.
    pub box_sizing: BoxSizing,
    /// Explicit width.
    pub width: AutoOr,
    /// Explicit height.
    pub height: AutoOr,
    /// Minimum width.
    pub min_width: Option<f64>,
    /// Maximum width (never below `min_width`).
    pub max_width: Option<f64>,
    /// Minimum height.
    pub min_height: Option<f64>,
    /// Maximum height (never below `min_height`).
    pub max_height: Option<f64>,
    /// Intrinsic content width.
    pub offset_width: f64,
    /// Intrinsic content height.
    pub offset_height: f64,
    /// Width before margin (and, for content-box, border and padding).
    pub computed_width: f64,
    /// Height before margin (and, for content-box, border and padding).
    pub computed_height: f64,
}

impl ResolvedStyle {
    /// Combine the pipeline stages and compute the initial sizes.
    ///
    /// The computed width is the flex basis when the parent lays out in a
    /// row, otherwise the intrinsic width; either is clamped to
    /// `[min-width, max-width]`. Height mirrors this for column parents.
    #[must_use]
    pub fn assemble(
        edges: BoxEdges,
        factors: FlexFactors,
        modes: FlexModes,
        sizes: SizeConstraints,
        parent_direction: Option<FlexDirection>,
    ) -> Self {
        let basis = factors.basis.and_then(|b| match b {
            AutoOr::Length(v) => Some(v),
            AutoOr::Auto => None,
        });
        let (basis_width, basis_height) = match parent_direction {
            Some(direction) if direction.is_row() => (basis, None),
            Some(_) => (None, basis),
            None => (None, None),
        };

        let (computed_width, max_width) = clamp_size(
            basis_width.unwrap_or(sizes.offset_width),
            sizes.min_width,
            sizes.max_width,
        );
        let (computed_height, max_height) = clamp_size(
            basis_height.unwrap_or(sizes.offset_height),
            sizes.min_height,
            sizes.max_height,
        );

        Self {
            border: edges.border,
            padding: edges.padding,
            margin: edges.margin,
            flex_grow: factors.grow,
            flex_shrink: factors.shrink,
            flex_basis: factors.basis,
            flex_direction: modes.flex_direction,
            flex_wrap: modes.flex_wrap,
            justify_content: modes.justify_content,
            align_items: modes.align_items,
            align_self: modes.align_self,
            align_content: modes.align_content,
            order: modes.order,
            box_sizing: modes.box_sizing,
            width: sizes.width,
            height: sizes.height,
            min_width: sizes.min_width,
            max_width,
            min_height: sizes.min_height,
            max_height,
            offset_width: sizes.offset_width,
            offset_height: sizes.offset_height,
            computed_width,
            computed_height,
        }
    }

    /// Outer width: computed width plus margins, plus border and padding
    /// unless the box is `border-box`.
    #[must_use]
    pub fn layout_width(&self) -> f64 {
        let mut width = self.computed_width
            + self.margin.left.to_px_or(0.0)
            + self.margin.right.to_px_or(0.0);
        if self.box_sizing != BoxSizing::BorderBox {
            width += self.border.left + self.border.right + self.padding.left + self.padding.right;
        }
        width
    }

    /// Outer height: computed height plus margins, plus border and padding
    /// unless the box is `border-box`.
    #[must_use]
    pub fn layout_height(&self) -> f64 {
        let mut height = self.computed_height
            + self.margin.top.to_px_or(0.0)
            + self.margin.bottom.to_px_or(0.0);
        if self.box_sizing != BoxSizing::BorderBox {
            height += self.border.top + self.border.bottom + self.padding.top + self.padding.bottom;
        }
        height
    }

    /// The resolved value of `key` as JSON, for computed-layout output.
    ///
    /// Shorthands report their expanded edges; `flex` and `flex-flow` have no
    /// resolved form of their own and report `null`.
    #[must_use]
    pub fn value_of(&self, key: PropertyKey) -> serde_json::Value {
        use serde_json::Value;

        let optional = |v: Option<f64>| v.map_or(Value::Null, Value::from);
        match key {
            PropertyKey::Flex | PropertyKey::FlexFlow => Value::Null,
            PropertyKey::FlexDirection => Value::from(self.flex_direction.to_string()),
            PropertyKey::FlexWrap => Value::from(self.flex_wrap.to_string()),
            PropertyKey::JustifyContent => Value::from(self.justify_content.to_string()),
            PropertyKey::AlignItems => Value::from(self.align_items.to_string()),
            PropertyKey::AlignContent => Value::from(self.align_content.to_string()),
            PropertyKey::AlignSelf => Value::from(self.align_self.to_string()),
            PropertyKey::BoxSizing => Value::from(self.box_sizing.to_string()),
            PropertyKey::FlexGrow => Value::from(self.flex_grow),
            PropertyKey::FlexShrink => Value::from(self.flex_shrink),
            PropertyKey::FlexBasis => self.flex_basis.map_or(Value::Null, |b| b.to_json()),
            PropertyKey::Order => Value::from(self.order),
            PropertyKey::Width => self.width.to_json(),
            PropertyKey::Height => self.height.to_json(),
            PropertyKey::MinWidth => optional(self.min_width),
            PropertyKey::MaxWidth => optional(self.max_width),
            PropertyKey::MinHeight => optional(self.min_height),
            PropertyKey::MaxHeight => optional(self.max_height),
            PropertyKey::OffsetWidth => Value::from(self.offset_width),
            PropertyKey::OffsetHeight => Value::from(self.offset_height),
            PropertyKey::Border => Value::from(self.border.to_array().to_vec()),
            PropertyKey::BorderTop => Value::from(self.border.top),
            PropertyKey::BorderRight => Value::from(self.border.right),
            PropertyKey::BorderBottom => Value::from(self.border.bottom),
            PropertyKey::BorderLeft => Value::from(self.border.left),
            PropertyKey::Padding => Value::from(self.padding.to_array().to_vec()),
            PropertyKey::PaddingTop => Value::from(self.padding.top),
            PropertyKey::PaddingRight => Value::from(self.padding.right),
            PropertyKey::PaddingBottom => Value::from(self.padding.bottom),
            PropertyKey::PaddingLeft => Value::from(self.padding.left),
            PropertyKey::Margin => Value::Array(
                self.margin
                    .to_array()
                    .iter()
                    .map(AutoOr::to_json)
                    .collect(),
            ),
            PropertyKey::MarginTop => self.margin.top.to_json(),
            PropertyKey::MarginRight => self.margin.right.to_json(),
            PropertyKey::MarginBottom => self.margin.bottom.to_json(),
            PropertyKey::MarginLeft => self.margin.left.to_json(),
        }
    }
}

/// Resolve one node's raw properties.
///
/// `parent` is `None` only for the root of a tree; percentages on the root
/// therefore fail with [`LayoutError::MissingParent`].
///
/// # Errors
///
/// Any error from the individual stages, in pipeline order.
pub fn resolve_style(style: &Style, parent: Option<&ParentContext>) -> LayoutResult<ResolvedStyle> {
    let edges = BoxEdges::resolve(style, parent)?;
    let factors = FlexFactors::resolve(style, parent)?;
    let modes = FlexModes::resolve(style)?;
    let sizes = SizeConstraints::resolve(style, parent)?;
    Ok(ResolvedStyle::assemble(
        edges,
        factors,
        modes,
        sizes,
        parent.map(|p| p.flex_direction),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_shorthand() {
        assert_eq!(expand_shorthand(&[1]), Some([1, 1, 1, 1]));
        assert_eq!(expand_shorthand(&[1, 2]), Some([1, 2, 1, 2]));
        assert_eq!(expand_shorthand(&[1, 2, 3]), Some([1, 2, 3, 2]));
        assert_eq!(expand_shorthand(&[1, 2, 3, 4]), Some([1, 2, 3, 4]));
        assert_eq!(expand_shorthand::<i32>(&[]), None);
        assert_eq!(expand_shorthand(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_clamp_size_raises_max_to_min() {
        assert_eq!(clamp_size(50.0, Some(80.0), Some(60.0)), (80.0, Some(80.0)));
        assert_eq!(clamp_size(50.0, None, Some(40.0)), (40.0, Some(40.0)));
        assert_eq!(clamp_size(50.0, Some(10.0), None), (50.0, None));
    }

    #[test]
    fn test_flex_factor_defaults() {
        assert_eq!(flex_factor(None, 1.0), 1.0);
        assert_eq!(flex_factor(Some(&RawValue::from(-2)), 1.0), 1.0);
        assert_eq!(flex_factor(Some(&RawValue::from("abc")), 0.0), 0.0);
        assert_eq!(flex_factor(Some(&RawValue::from("2.5")), 0.0), 2.5);
        assert_eq!(flex_factor(Some(&RawValue::from(0)), 1.0), 0.0);
    }
}
