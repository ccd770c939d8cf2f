//! Errors raised while building a layout tree or resolving its layout.
//!
//! Every error is reported synchronously to the caller of property
//! resolution or [`LayoutTree::calculate_layout`](crate::LayoutTree::calculate_layout).
//! Nothing is retried or recovered internally; defaults (for example an unset
//! `flexShrink` becoming `1`) are applied during resolution and never surface
//! as errors.

use thiserror::Error;

use crate::style::PropertyKey;
use crate::tree::NodeId;

/// Result alias used throughout the engine.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Failure while configuring or laying out a tree of boxes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A property bag contained a key that is not a recognized property.
    #[error("config `{0}` is not a recognized property")]
    InvalidConfigKey(String),

    /// A value failed numeric or percentage parsing.
    #[error("{property}: `{value}` is not a number")]
    InvalidValue {
        /// Property the value was supplied for.
        property: PropertyKey,
        /// The offending raw value, as written.
        value: String,
    },

    /// A percentage needed a parent dimension that was not available.
    #[error("{property}: percentage requires a definite parent dimension")]
    MissingParent {
        /// Property whose percentage could not be resolved.
        property: PropertyKey,
    },

    /// A keyword property was outside its allowed set.
    #[error("{property} value `{value}` is not valid")]
    InvalidEnumValue {
        /// Keyword property.
        property: PropertyKey,
        /// The rejected keyword.
        value: String,
    },

    /// A border or padding edge resolved negative or to `auto`.
    #[error("{property}: `{value}` is not valid")]
    NegativeOrInvalidBoxValue {
        /// The border or padding edge.
        property: PropertyKey,
        /// The resolved value.
        value: String,
    },

    /// A feature the engine deliberately does not implement.
    #[error("{0} is not supported")]
    UnsupportedFeature(&'static str),

    /// An internal invariant was violated, usually an ordering bug in the caller.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// The id does not name a node of this tree.
    #[error("{0:?} is not a node of this tree")]
    NotANode(NodeId),

    /// The node cannot be appended here (it already has a parent, or it is
    /// the prospective parent itself).
    #[error("{0:?} cannot be appended as a child")]
    InvalidChild(NodeId),
}
