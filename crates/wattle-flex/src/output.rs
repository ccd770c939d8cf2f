//! Computed-layout output.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// The computed box of one node, optionally with its children.
///
/// Serializes as `{"left", "top", "width", "height", ...extra, "children"?}`,
/// the same shape fixture files use for their expected `result`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Offset from the parent's content origin along the horizontal axis.
    pub left: f64,
    /// Offset from the parent's content origin along the vertical axis.
    pub top: f64,
    /// Computed width.
    pub width: f64,
    /// Computed height.
    pub height: f64,
    /// Child layouts sorted by node id, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Layout>>,
    /// Resolved values of additionally requested properties.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Layout {
    /// Compare against `expected`, treating numbers within `epsilon` as
    /// equal. Returns a description of the first difference, prefixed with
    /// its path (`root.children[1].left`), or `None` if the layouts match.
    ///
    /// Extra properties are compared only when `expected` lists them, and
    /// children only when `expected` has them.
    #[must_use]
    pub fn first_mismatch(&self, expected: &Self, epsilon: f64) -> Option<String> {
        self.mismatch_at("root", expected, epsilon)
    }

    fn mismatch_at(&self, path: &str, expected: &Self, epsilon: f64) -> Option<String> {
        let fields = [
            ("left", self.left, expected.left),
            ("top", self.top, expected.top),
            ("width", self.width, expected.width),
            ("height", self.height, expected.height),
        ];
        for (name, actual, wanted) in fields {
            if (actual - wanted).abs() > epsilon {
                return Some(format!("{path}.{name}: expected {wanted}, got {actual}"));
            }
        }

        for (name, wanted) in &expected.extra {
            let actual = self.extra.get(name).unwrap_or(&serde_json::Value::Null);
            let equal = match (actual.as_f64(), wanted.as_f64()) {
                (Some(a), Some(b)) => (a - b).abs() <= epsilon,
                _ => actual == wanted,
            };
            if !equal {
                return Some(format!("{path}.{name}: expected {wanted}, got {actual}"));
            }
        }

        let Some(wanted_children) = &expected.children else {
            return None;
        };
        let children = self.children.as_deref().unwrap_or_default();
        if children.len() != wanted_children.len() {
            return Some(format!(
                "{path}.children: expected {} entries, got {}",
                wanted_children.len(),
                children.len()
            ));
        }
        children
            .iter()
            .zip(wanted_children)
            .enumerate()
            .find_map(|(index, (child, wanted))| {
                let mut child_path = String::from(path);
                let _ = write!(child_path, ".children[{index}]");
                child.mismatch_at(&child_path, wanted, epsilon)
            })
    }
}
