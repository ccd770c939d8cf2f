//! JSON layout fixtures.
//!
//! A fixture describes a container, its items, and optionally the expected
//! output of [`LayoutTree::get_all_computed_layout`]:
//!
//! ```json
//! {
//!   "container": {"width": 200, "justifyContent": "space-between"},
//!   "items": [{"width": 50}, {"width": 50, "children": [{"width": 10}]}],
//!   "result": {"left": 0, "top": 0, "width": 200, "height": 0, "children": [...]}
//! }
//! ```
//!
//! Items may nest through `children`, which makes them flex containers too.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::LayoutError;
use crate::output::Layout;
use crate::style::{RawValue, Style};
use crate::tree::{LayoutTree, NodeId};

/// Failure while loading or checking a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The file could not be read.
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a valid fixture.
    #[error("malformed fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// Building or laying out the tree failed.
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// [`Fixture::check`] was called on a fixture without `result`.
    #[error("fixture has no expected result")]
    MissingResult,

    /// The computed layout differs from the expected one.
    #[error("layout mismatch at {0}")]
    Mismatch(String),
}

/// One node of a fixture below the container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureItem {
    /// The node's raw properties.
    #[serde(flatten)]
    pub properties: BTreeMap<String, RawValue>,
    /// Nested items, making this node a container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FixtureItem>,
}

/// A container, its items, and the expected layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// The root container's raw properties.
    pub container: BTreeMap<String, RawValue>,
    /// The container's children.
    #[serde(default)]
    pub items: Vec<FixtureItem>,
    /// Expected output of [`LayoutTree::get_all_computed_layout`] on the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Layout>,
}

fn style_of(properties: &BTreeMap<String, RawValue>) -> Result<Style, LayoutError> {
    Style::from_entries(properties.iter().map(|(name, value)| (name, value.clone())))
}

impl Fixture {
    /// Parse a fixture document.
    ///
    /// # Errors
    ///
    /// [`FixtureError::Json`] for malformed input.
    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// [`FixtureError::Io`] or [`FixtureError::Json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Build the tree described by this fixture, returning it with its root.
    ///
    /// # Errors
    ///
    /// [`FixtureError::Layout`] for an unknown property name.
    pub fn build(&self) -> Result<(LayoutTree, NodeId), FixtureError> {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(style_of(&self.container)?);
        for item in &self.items {
            append_item(&mut tree, root, item)?;
        }
        Ok((tree, root))
    }

    /// Build the tree, lay it out, and return the root's full layout.
    ///
    /// # Errors
    ///
    /// [`FixtureError::Layout`] for any construction or layout error.
    pub fn run(&self) -> Result<Layout, FixtureError> {
        let (mut tree, root) = self.build()?;
        tree.calculate_layout(root, None, None, None)?;
        Ok(tree.get_all_computed_layout(root, &[])?)
    }

    /// Run the fixture and compare the layout with `result`.
    ///
    /// # Errors
    ///
    /// [`FixtureError::MissingResult`] without an expected result,
    /// [`FixtureError::Mismatch`] naming the first difference, or any error
    /// from [`Fixture::run`].
    pub fn check(&self, epsilon: f64) -> Result<(), FixtureError> {
        let expected = self.result.as_ref().ok_or(FixtureError::MissingResult)?;
        let actual = self.run()?;
        match actual.first_mismatch(expected, epsilon) {
            Some(mismatch) => Err(FixtureError::Mismatch(mismatch)),
            None => Ok(()),
        }
    }
}

fn append_item(tree: &mut LayoutTree, parent: NodeId, item: &FixtureItem) -> Result<(), FixtureError> {
    let node = tree.create_node(style_of(&item.properties)?);
    tree.append_child(parent, node)?;
    for child in &item.children {
        append_item(tree, node, child)?;
    }
    Ok(())
}
