//! The layout tree.
//!
//! The tree uses arena allocation with [`NodeId`] indices for all
//! relationships, so parent back-references need no shared ownership and
//! layout can mutate any node while walking its siblings.
//!
//! Ids are allocated by the tree in creation order and never reused. Besides
//! addressing nodes they are the document-order tie-break when children are
//! sorted by `order`.

use std::collections::BTreeMap;

use crate::error::{LayoutError, LayoutResult};
use crate::layout::Axis;
use crate::layout::compose::compose;
use crate::output::Layout;
use crate::style::{
    FlexDirection, ParentContext, PropertyKey, RawValue, ResolvedStyle, Style, resolve_style,
};

/// A type-safe index into a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index, which is also the creation sequence number.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One box: raw properties as supplied, resolved properties once layout has
/// run, and its final position.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) style: Style,
    pub(crate) resolved: Option<ResolvedStyle>,
    pub(crate) left: f64,
    pub(crate) top: f64,
}

impl LayoutNode {
    /// This node's id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The owning parent, if attached.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The raw properties.
    #[must_use]
    pub const fn style(&self) -> &Style {
        &self.style
    }

    /// The resolved properties, once this node has been laid out.
    #[must_use]
    pub const fn resolved(&self) -> Option<&ResolvedStyle> {
        self.resolved.as_ref()
    }

    /// Offset from the parent's content origin along `axis`.
    #[must_use]
    pub const fn position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }
}

/// An arena of [`LayoutNode`]s.
#[derive(Debug, Clone, Default)]
pub struct LayoutTree {
    nodes: Vec<LayoutNode>,
}

impl LayoutTree {
    /// An empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node.
    pub fn create_node(&mut self, style: Style) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LayoutNode {
            id,
            parent: None,
            children: Vec::new(),
            style,
            resolved: None,
            left: 0.0,
            top: 0.0,
        });
        id
    }

    /// Look up a node.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotANode`] if `id` belongs to another tree.
    pub fn node(&self, id: NodeId) -> LayoutResult<&LayoutNode> {
        self.nodes.get(id.0).ok_or(LayoutError::NotANode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> LayoutResult<&mut LayoutNode> {
        self.nodes.get_mut(id.0).ok_or(LayoutError::NotANode(id))
    }

    /// Mutable access to a node's raw properties, for relayout with new input.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotANode`] for an unknown id.
    pub fn style_mut(&mut self, id: NodeId) -> LayoutResult<&mut Style> {
        Ok(&mut self.node_mut(id)?.style)
    }

    /// Children of `id` in insertion order.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotANode`] for an unknown id.
    pub fn children(&self, id: NodeId) -> LayoutResult<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// Whether `ancestor` appears on the parent chain of `id`.
    #[must_use]
    pub fn is_descendant_of(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.nodes.get(id.0).and_then(|n| n.parent);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.nodes.get(node.0).and_then(|n| n.parent);
        }
        false
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotANode`] if either id is unknown;
    /// [`LayoutError::InvalidChild`] if `child` already has a parent, is
    /// `parent` itself, or is one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> LayoutResult<()> {
        let _ = self.node(parent)?;
        if self.node(child)?.parent.is_some()
            || child == parent
            || self.is_descendant_of(parent, child)
        {
            return Err(LayoutError::InvalidChild(child));
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Resolved properties of a node that layout has already visited.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Assertion`] if the node has not been resolved yet.
    pub fn resolved(&self, id: NodeId) -> LayoutResult<&ResolvedStyle> {
        self.node(id)?
            .resolved
            .as_ref()
            .ok_or_else(|| LayoutError::Assertion(format!("{id:?} read before resolution")))
    }

    pub(crate) fn resolved_mut(&mut self, id: NodeId) -> LayoutResult<&mut ResolvedStyle> {
        self.node_mut(id)?
            .resolved
            .as_mut()
            .ok_or_else(|| LayoutError::Assertion(format!("{id:?} written before resolution")))
    }

    pub(crate) fn set_position(&mut self, id: NodeId, axis: Axis, value: f64) -> LayoutResult<()> {
        let node = self.node_mut(id)?;
        match axis {
            Axis::Horizontal => node.left = value,
            Axis::Vertical => node.top = value,
        }
        Ok(())
    }

    /// Run property resolution for one node and store the result.
    pub(crate) fn resolve(&mut self, id: NodeId, parent: Option<&ParentContext>) -> LayoutResult<()> {
        let resolved = resolve_style(&self.node(id)?.style, parent)?;
        self.node_mut(id)?.resolved = Some(resolved);
        Ok(())
    }

    /// The content-box size `id` offers its children along `axis`: its
    /// explicit size, or else (for a non-root node) the size its own
    /// parent's layout assigned it, when non-zero.
    pub(crate) fn definite_inner_size(&self, id: NodeId, axis: Axis) -> LayoutResult<Option<f64>> {
        let node = self.node(id)?;
        let resolved = self.resolved(id)?;
        let size = resolved.explicit_size(axis).or_else(|| {
            let computed = resolved.computed_size(axis);
            (node.parent.is_some() && computed > 0.0).then_some(computed)
        });
        Ok(size.map(|size| resolved.inner_size(axis, size)))
    }

    /// The context `id`'s children resolve against.
    pub(crate) fn parent_context(&self, id: NodeId) -> LayoutResult<ParentContext> {
        Ok(ParentContext {
            width: self.definite_inner_size(id, Axis::Horizontal)?,
            height: self.definite_inner_size(id, Axis::Vertical)?,
            flex_direction: self.resolved(id)?.flex_direction,
        })
    }

    /// Lay out the subtree rooted at `root`.
    ///
    /// `width`, `height`, and `direction`, when given, overwrite the root's
    /// raw properties first. The root is resolved against its parent when it
    /// has a resolved one, otherwise as a tree root.
    ///
    /// # Errors
    ///
    /// The first resolution or layout error encountered.
    pub fn calculate_layout(
        &mut self,
        root: NodeId,
        width: Option<f64>,
        height: Option<f64>,
        direction: Option<FlexDirection>,
    ) -> LayoutResult<()> {
        let style = self.style_mut(root)?;
        if let Some(width) = width {
            style.set(PropertyKey::Width, width);
        }
        if let Some(height) = height {
            style.set(PropertyKey::Height, height);
        }
        if let Some(direction) = direction {
            style.set(PropertyKey::FlexDirection, direction.to_string());
        }

        let parent = match self.node(root)?.parent {
            Some(parent) if self.resolved(parent).is_ok() => Some(self.parent_context(parent)?),
            _ => None,
        };
        self.resolve(root, parent.as_ref())?;
        log::debug!("calculating layout for {root:?}");
        compose(self, root)
    }

    /// `{left, top, width, height}` of one node plus the resolved value of
    /// every key in `extra`.
    ///
    /// Width and height fall back to the raw `width`/`height` (or `0`) when
    /// the node has not been laid out.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotANode`] for an unknown id.
    pub fn get_computed_layout(&self, id: NodeId, extra: &[PropertyKey]) -> LayoutResult<Layout> {
        let node = self.node(id)?;
        let raw_number = |key| {
            node.style
                .get(key)
                .and_then(RawValue::as_number)
                .unwrap_or(0.0)
        };
        let (width, height) = node.resolved.as_ref().map_or_else(
            || (raw_number(PropertyKey::Width), raw_number(PropertyKey::Height)),
            |r| (r.computed_width, r.computed_height),
        );

        let mut extras = BTreeMap::new();
        for &key in extra {
            let value = match &node.resolved {
                Some(resolved) => resolved.value_of(key),
                None => node
                    .style
                    .get(key)
                    .and_then(|raw| serde_json::to_value(raw).ok())
                    .unwrap_or(serde_json::Value::Null),
            };
            let _ = extras.insert(key.to_string(), value);
        }

        Ok(Layout {
            left: node.left,
            top: node.top,
            width,
            height,
            children: None,
            extra: extras,
        })
    }

    /// [`Self::get_computed_layout`] for `id` and, recursively, its
    /// descendants. `children` is sorted by id (creation order, not
    /// `order`) and omitted on leaf descendants. The `extra` properties are
    /// reported on `id` itself as well as on every descendant.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NotANode`] for an unknown id.
    pub fn get_all_computed_layout(&self, id: NodeId, extra: &[PropertyKey]) -> LayoutResult<Layout> {
        let mut layout = self.get_computed_layout(id, extra)?;
        layout.children = Some(self.child_layouts(id, extra)?);
        Ok(layout)
    }

    fn child_layouts(&self, id: NodeId, extra: &[PropertyKey]) -> LayoutResult<Vec<Layout>> {
        let mut children = self.children(id)?.to_vec();
        children.sort_unstable();
        children
            .into_iter()
            .map(|child| {
                let mut layout = self.get_computed_layout(child, extra)?;
                if !self.children(child)?.is_empty() {
                    layout.children = Some(self.child_layouts(child, extra)?);
                }
                Ok(layout)
            })
            .collect()
    }
}
