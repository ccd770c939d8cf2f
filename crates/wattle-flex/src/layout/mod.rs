//! Flex layout.
//!
//! # Relevant Specifications
//!
//! - [CSS Flexible Box Layout Module Level 1](https://www.w3.org/TR/css-flexbox-1/)
//! - [CSS Box Alignment Module Level 3](https://www.w3.org/TR/css-align-3/)
//!
//! # Module Structure
//!
//! - [`axis`] - Main/cross to width/height mapping
//! - [`space`] - Free-space distribution for `justify-content` and `align-content`
//! - [`lines`] - Ordering and line breaking
//! - [`flex_line`] - Grow/shrink, main-axis placement, and cross-axis alignment per line
//! - [`compose`] - The per-container pipeline tying the stages together

pub mod axis;
pub mod compose;
pub mod flex_line;
pub mod lines;
pub mod space;

pub use axis::{Axis, AxisMapping};
pub use compose::compose;
pub use flex_line::{ContainerContext, FlexLine, SHRINK_FLOOR};
pub use lines::{LineBreaker, LineItem, sort_by_order};
pub use space::{Distribution, distribute_space};
