//! Property model: raw property bags and their resolution.
//!
//! # Module Structure
//!
//! - [`values`] - Raw values, `auto`-or-length values, and edge sizes
//! - [`keywords`] - Keyword properties (direction, wrap, alignment, box-sizing)
//! - [`resolve`] - The ordered resolution pipeline producing [`ResolvedStyle`]

pub mod keywords;
pub mod resolve;
pub mod values;

use std::collections::BTreeMap;
use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{LayoutError, LayoutResult};

pub use keywords::{
    AlignContent, AlignItems, AlignSelf, BoxSizing, FlexDirection, FlexWrap, JustifyContent,
};
pub use resolve::{ParentContext, ResolvedStyle, expand_shorthand, resolve_length, resolve_style};
pub use values::{AutoEdgeSizes, AutoOr, EdgeSizes, RawValue};

/// Every property name a node accepts, in its camelCase input spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum PropertyKey {
    /// `flex-direction`
    FlexDirection,
    /// `flex-wrap`
    FlexWrap,
    /// `flex-flow`
    FlexFlow,
    /// `justify-content`
    JustifyContent,
    /// `align-items`
    AlignItems,
    /// `align-content`
    AlignContent,
    /// `align-self`
    AlignSelf,
    /// `flex`
    Flex,
    /// `flex-grow`
    FlexGrow,
    /// `flex-shrink`
    FlexShrink,
    /// `flex-basis`
    FlexBasis,
    /// `order`
    Order,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `min-width`
    MinWidth,
    /// `max-width`
    MaxWidth,
    /// `min-height`
    MinHeight,
    /// `max-height`
    MaxHeight,
    /// `offsetWidth`: intrinsic content width.
    OffsetWidth,
    /// `offsetHeight`: intrinsic content height.
    OffsetHeight,
    /// `box-sizing`
    BoxSizing,
    /// `border`
    Border,
    /// `border-top`
    BorderTop,
    /// `border-right`
    BorderRight,
    /// `border-bottom`
    BorderBottom,
    /// `border-left`
    BorderLeft,
    /// `margin`
    Margin,
    /// `margin-top`
    MarginTop,
    /// `margin-right`
    MarginRight,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `padding`
    Padding,
    /// `padding-top`
    PaddingTop,
    /// `padding-right`
    PaddingRight,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
}

impl PropertyKey {
    /// Parse a property name, rejecting anything outside the recognized set.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfigKey`] for unknown names.
    pub fn parse(name: &str) -> LayoutResult<Self> {
        Self::from_str(name).map_err(|_| LayoutError::InvalidConfigKey(name.to_string()))
    }
}

/// A node's raw property bag, exactly as supplied by the caller.
///
/// Keys are validated on entry; values are kept unparsed until
/// [`resolve_style`] runs during layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    values: BTreeMap<PropertyKey, RawValue>,
}

impl Style {
    /// An empty property bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, key: PropertyKey, value: impl Into<RawValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set or replace a property.
    pub fn set(&mut self, key: PropertyKey, value: impl Into<RawValue>) {
        let _ = self.values.insert(key, value.into());
    }

    /// The raw value of a property, if set.
    #[must_use]
    pub fn get(&self, key: PropertyKey) -> Option<&RawValue> {
        self.values.get(&key)
    }

    /// Build a style from `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfigKey`] for the first unknown name.
    pub fn from_entries<K, I>(entries: I) -> LayoutResult<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, RawValue)>,
    {
        let mut style = Self::new();
        for (name, value) in entries {
            style.set(PropertyKey::parse(name.as_ref())?, value);
        }
        Ok(style)
    }

    /// Build a style from a JSON object such as `{"width": 100, "margin": [5, "auto"]}`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfigKey`] for unknown names,
    /// [`LayoutError::InvalidValue`] for a value that is neither a number, a
    /// string, nor a list of those, and [`LayoutError::Assertion`] if the
    /// document is not an object.
    pub fn from_json(json: &serde_json::Value) -> LayoutResult<Self> {
        let Some(object) = json.as_object() else {
            return Err(LayoutError::Assertion(format!(
                "expected a property object, got {json}"
            )));
        };
        let mut style = Self::new();
        for (name, value) in object {
            let key = PropertyKey::parse(name)?;
            let raw = serde_json::from_value::<RawValue>(value.clone()).map_err(|_| {
                LayoutError::InvalidValue {
                    property: key,
                    value: value.to_string(),
                }
            })?;
            style.set(key, raw);
        }
        Ok(style)
    }
}
