//! A CSS flexbox layout engine for trees of boxes.
//!
//! # Scope
//!
//! This crate implements:
//! - **Property resolution** ([CSS Values Level 4](https://www.w3.org/TR/css-values-4/))
//!   - Numbers, numeric strings, percentages, and `auto`
//!   - 1/2/3/4-value `margin`, `padding`, and `border` shorthands
//!   - The `flex` and `flex-flow` shorthands
//!   - `box-sizing`
//!
//! - **Flex layout** ([CSS Flexbox Level 1](https://www.w3.org/TR/css-flexbox-1/))
//!   - All four `flex-direction` values and all three `flex-wrap` values
//!   - `order`
//!   - `flex-grow` / `flex-shrink` with min/max freezing
//!   - `justify-content`, `align-items`, `align-self`, `align-content`
//!   - Auto margins on both axes
//!   - Nested flex containers
//!
//! # Not Implemented
//!
//! - `align-self: baseline` (rejected with [`LayoutError::UnsupportedFeature`])
//! - Text measurement: intrinsic sizes come from `offsetWidth`/`offsetHeight`
//! - Absolute positioning, writing modes, and grid
//!
//! # Example
//!
//! ```
//! use wattle_flex::{LayoutTree, PropertyKey, Style};
//!
//! let mut tree = LayoutTree::new();
//! let root = tree.create_node(
//!     Style::new()
//!         .with(PropertyKey::Width, 200)
//!         .with(PropertyKey::JustifyContent, "space-between"),
//! );
//! for _ in 0..2 {
//!     let item = tree.create_node(Style::new().with(PropertyKey::Width, 50));
//!     tree.append_child(root, item)?;
//! }
//! tree.calculate_layout(root, None, None, None)?;
//!
//! let layout = tree.get_all_computed_layout(root, &[])?;
//! let lefts: Vec<f64> = layout.children.unwrap_or_default().iter().map(|c| c.left).collect();
//! assert_eq!(lefts, vec![0.0, 150.0]);
//! # Ok::<(), wattle_flex::LayoutError>(())
//! ```

/// Errors raised by resolution and layout.
pub mod error;
/// JSON fixtures describing a container, its items, and the expected layout.
pub mod fixture;
/// The flex algorithm per [§ 9](https://www.w3.org/TR/css-flexbox-1/#layout-algorithm).
pub mod layout;
/// Computed-layout output.
pub mod output;
/// Raw property bags and their resolution.
pub mod style;
/// The arena of layout nodes.
pub mod tree;

pub use error::{LayoutError, LayoutResult};
pub use fixture::{Fixture, FixtureError, FixtureItem};
pub use layout::{Axis, AxisMapping, FlexLine};
pub use output::Layout;
pub use style::{
    AlignContent, AlignItems, AlignSelf, AutoOr, BoxSizing, FlexDirection, FlexWrap,
    JustifyContent, PropertyKey, RawValue, ResolvedStyle, Style, expand_shorthand,
    resolve_length, resolve_style,
};
pub use tree::{LayoutNode, LayoutTree, NodeId};
