//! The per-line flex algorithm.
//!
//! [§ 9.7 Resolving Flexible Lengths](https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths)
//! [§ 9.5 Main-Axis Alignment](https://www.w3.org/TR/css-flexbox-1/#main-alignment)
//! [§ 9.6 Cross-Axis Alignment](https://www.w3.org/TR/css-flexbox-1/#cross-alignment)
//!
//! A [`FlexLine`] is a view onto a run of sibling nodes in the tree. It owns
//! no node data; every size and position it computes is written back to the
//! nodes' resolved styles and positions.

use wattle_common::warning::warn_once;

use super::axis::AxisMapping;
use super::space::{Distribution, distribute_space};
use crate::error::{LayoutError, LayoutResult};
use crate::style::{
    AlignContent, AlignItems, AlignSelf, AutoOr, FlexDirection, FlexWrap, JustifyContent,
    ResolvedStyle,
};
use crate::tree::{LayoutTree, NodeId};

/// The smallest main size shrinking will leave an item with.
///
/// CSS allows shrinking to zero; this engine stops at one pixel so that no
/// item collapses entirely.
pub const SHRINK_FLOOR: f64 = 1.0;

/// The container properties a line's algorithm reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerContext {
    /// Physical axes of the container.
    pub axes: AxisMapping,
    /// The container's definite inner main size, if any.
    pub main_size: Option<f64>,
    /// `flex-direction`
    pub direction: FlexDirection,
    /// `flex-wrap`
    pub wrap: FlexWrap,
    /// `justify-content`
    pub justify_content: JustifyContent,
    /// `align-items`
    pub align_items: AlignItems,
    /// Effective `align-content` (forced to `stretch` for a single line).
    pub align_content: AlignContent,
}

/// [§ 6 Flex Lines](https://www.w3.org/TR/css-flexbox-1/#flex-lines)
///
/// "Flex items in a flex container are laid out and aligned within flex
/// lines, hypothetical containers used for grouping and alignment by the
/// layout algorithm."
#[derive(Debug, Clone, PartialEq)]
pub struct FlexLine {
    items: Vec<NodeId>,
    axes: AxisMapping,
    cross_axis_size: Option<f64>,
    /// Offset of this line along the container's cross axis.
    pub cross_position: f64,
    /// Extra cross space `align-content` placed after this line.
    pub cross_space: f64,
}

/// Per-item bookkeeping for the freeze loops.
struct FlexEntry {
    id: NodeId,
    factor: f64,
    limit: Option<f64>,
    frozen: bool,
}

impl FlexLine {
    /// A line over `items`, in main-axis placement order.
    #[must_use]
    pub const fn new(items: Vec<NodeId>, axes: AxisMapping) -> Self {
        Self {
            items,
            axes,
            cross_axis_size: None,
            cross_position: 0.0,
            cross_space: 0.0,
        }
    }

    /// The items in placement order.
    #[must_use]
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Sum of the items' outer main sizes.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Assertion`] if an item is unresolved.
    pub fn main_axis_size(&self, tree: &LayoutTree) -> LayoutResult<f64> {
        self.items.iter().try_fold(0.0, |sum, &id| {
            Ok::<_, LayoutError>(sum + tree.resolved(id)?.outer_size(self.axes.main))
        })
    }

    /// [§ 9.4 step 8](https://www.w3.org/TR/css-flexbox-1/#algo-cross-line)
    ///
    /// The largest outer cross size of the line's items. Computed on first
    /// read and memoized: stretching items afterwards must not change it.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Assertion`] if an item is unresolved.
    pub fn cross_axis_size(&mut self, tree: &LayoutTree) -> LayoutResult<f64> {
        if let Some(size) = self.cross_axis_size {
            return Ok(size);
        }
        let size = self.items.iter().try_fold(0.0_f64, |max, &id| {
            Ok::<_, LayoutError>(max.max(tree.resolved(id)?.outer_size(self.axes.cross)))
        })?;
        self.cross_axis_size = Some(size);
        Ok(size)
    }

    /// Position every item on the cross axis, stretching where
    /// `align-self` asks for it.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnsupportedFeature`] for `baseline` alignment.
    pub fn align_items(&mut self, tree: &mut LayoutTree, ctx: &ContainerContext) -> LayoutResult<()> {
        let line_cross = self.cross_axis_size(tree)?;
        let bonus = if ctx.align_content == AlignContent::Stretch {
            self.cross_space
        } else {
            0.0
        };
        for &id in &self.items {
            self.align_item(tree, ctx, id, line_cross, bonus)?;
        }
        Ok(())
    }

    fn align_item(
        &self,
        tree: &mut LayoutTree,
        ctx: &ContainerContext,
        id: NodeId,
        line_cross: f64,
        bonus: f64,
    ) -> LayoutResult<()> {
        let cross = self.axes.cross;
        let item = tree.resolved(id)?;
        let margin_start = item.margin_start(cross);
        let margin_end = item.margin_end(cross);
        let outer = item.outer_size(cross);

        // [§ 8.1 Aligning with auto margins](https://www.w3.org/TR/css-flexbox-1/#auto-margins)
        //
        // "If both cross-axis margins are auto, they absorb positive free
        // space equally. Otherwise, an auto margin absorbs all the positive
        // free space."
        if margin_start.is_auto() || margin_end.is_auto() {
            let available = line_cross + bonus;
            let offset = match (margin_start, margin_end) {
                (AutoOr::Auto, AutoOr::Auto) => (available - outer) / 2.0,
                (AutoOr::Auto, _) => available - outer,
                (start, _) => start.to_px_or(0.0),
            };
            return tree.set_position(id, cross, self.cross_position + offset);
        }

        let mut align = match item.align_self {
            AlignSelf::Auto => AlignSelf::from(ctx.align_items),
            other => other,
        };
        if ctx.wrap == FlexWrap::WrapReverse {
            align = align.flipped();
        }

        let offset = match align {
            AlignSelf::FlexEnd => bonus + line_cross - outer,
            AlignSelf::Center => (bonus + line_cross - outer) / 2.0,
            AlignSelf::Stretch => {
                if item.explicit_size(cross).is_none() {
                    let mut size = line_cross - outer + item.computed_size(cross) + bonus;
                    if let Some(max) = item.max_size(cross) {
                        size = size.min(max);
                    }
                    tree.resolved_mut(id)?.set_computed_size(cross, size);
                    0.0
                } else if ctx.wrap == FlexWrap::WrapReverse {
                    bonus + line_cross - outer
                } else {
                    0.0
                }
            }
            AlignSelf::Baseline => {
                return Err(LayoutError::UnsupportedFeature("align-self: baseline"));
            }
            AlignSelf::FlexStart | AlignSelf::Auto => 0.0,
        };

        tree.set_position(
            id,
            cross,
            self.cross_position + offset + margin_start.to_px_or(0.0),
        )
    }

    /// Size and position every item on the main axis.
    ///
    /// Without a container main size items are simply placed one after the
    /// other. Otherwise positive free space goes to growth, then to auto
    /// margins or `justify-content`; negative free space is absorbed by
    /// shrinking before `justify-content` places the items.
    ///
    /// # Errors
    ///
    /// [`LayoutError::Assertion`] if an item is unresolved.
    pub fn resolve_main_axis(&self, tree: &mut LayoutTree, ctx: &ContainerContext) -> LayoutResult<()> {
        let main = self.axes.main;
        // Without a main size items sit at the running sum of outer sizes;
        // leading margins widen the step but do not offset the item.
        let Some(main_size) = ctx.main_size else {
            let mut position = 0.0;
            for &id in &self.items {
                let outer = tree.resolved(id)?.outer_size(main);
                tree.set_position(id, main, position)?;
                position += outer;
            }
            return Ok(());
        };

        let mut space = main_size - self.main_axis_size(tree)?;
        log::trace!("line of {} items, free space {space}", self.items.len());
        if space > 0.0 {
            if self.has_flex_grow(tree)? {
                space = self.grow(tree, space)?;
            }
            if self.has_auto_main_margin(tree)? {
                return self.distribute_auto_margins(tree, space);
            }
            self.justify(tree, ctx, space)
        } else {
            let space = self.shrink(tree, space)?;
            self.justify(tree, ctx, space)
        }
    }

    fn has_flex_grow(&self, tree: &LayoutTree) -> LayoutResult<bool> {
        for &id in &self.items {
            if tree.resolved(id)?.flex_grow > 0.0 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn has_auto_main_margin(&self, tree: &LayoutTree) -> LayoutResult<bool> {
        for &id in &self.items {
            let item = tree.resolved(id)?;
            if item.margin_start(self.axes.main).is_auto() || item.margin_end(self.axes.main).is_auto() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn entries(
        &self,
        tree: &LayoutTree,
        factor: impl Fn(&ResolvedStyle) -> f64,
        limit: impl Fn(&ResolvedStyle) -> Option<f64>,
    ) -> LayoutResult<Vec<FlexEntry>> {
        self.items
            .iter()
            .map(|&id| {
                let item = tree.resolved(id)?;
                Ok(FlexEntry {
                    id,
                    factor: factor(item),
                    limit: limit(item),
                    frozen: false,
                })
            })
            .collect()
    }

    /// Distribute positive free space in proportion to `flex-grow`.
    ///
    /// Items that would overshoot their max size are frozen at it and the
    /// loop restarts with the remaining space and factors. Once a pass
    /// freezes nothing, the rest is handed out proportionally. Returns the
    /// space left over.
    fn grow(&self, tree: &mut LayoutTree, mut space: f64) -> LayoutResult<f64> {
        let main = self.axes.main;
        let mut entries = self.entries(
            tree,
            |item| item.flex_grow,
            |item| item.max_size(main),
        )?;
        let mut check_limits = entries.iter().any(|entry| entry.limit.is_some());

        loop {
            let grow_sum: f64 = entries
                .iter()
                .filter(|entry| !entry.frozen)
                .map(|entry| entry.factor)
                .sum();
            if grow_sum <= 0.0 {
                break;
            }
            let unit = space / grow_sum.max(1.0);

            if !check_limits {
                for entry in entries.iter().filter(|entry| !entry.frozen && entry.factor > 0.0) {
                    let increase = entry.factor * unit;
                    let item = tree.resolved_mut(entry.id)?;
                    item.set_computed_size(main, item.computed_size(main) + increase);
                    space -= increase;
                }
                break;
            }

            let mut froze = false;
            for entry in entries.iter_mut().filter(|entry| !entry.frozen && entry.factor > 0.0) {
                let Some(max) = entry.limit else { continue };
                let item = tree.resolved_mut(entry.id)?;
                let room = max - item.computed_size(main);
                if unit * entry.factor > room {
                    log::debug!("{:?} frozen at max main size {max}", entry.id);
                    item.set_computed_size(main, max);
                    space -= room;
                    entry.frozen = true;
                    froze = true;
                }
            }
            if !froze {
                check_limits = false;
            }
        }
        log::trace!("grow left {space} unallocated");
        Ok(space)
    }

    /// Absorb a deficit (`space <= 0`) in proportion to
    /// `flex-shrink × computed main size`.
    ///
    /// Items that would undershoot their min size are frozen at it first.
    /// In the final proportional pass no item shrinks below
    /// [`SHRINK_FLOOR`]. Returns the deficit left over.
    fn shrink(&self, tree: &mut LayoutTree, mut space: f64) -> LayoutResult<f64> {
        let main = self.axes.main;
        let mut entries = self.entries(
            tree,
            |item| item.flex_shrink * item.computed_size(main),
            |item| item.min_size(main),
        )?;
        let mut check_limits = entries.iter().any(|entry| entry.limit.is_some());

        loop {
            let weight_sum: f64 = entries
                .iter()
                .filter(|entry| !entry.frozen)
                .map(|entry| entry.factor)
                .sum();
            if weight_sum <= 0.0 {
                break;
            }
            let unit = -space / weight_sum;

            if !check_limits {
                for entry in entries.iter().filter(|entry| !entry.frozen && entry.factor > 0.0) {
                    let item = tree.resolved_mut(entry.id)?;
                    let current = item.computed_size(main);
                    let floor = SHRINK_FLOOR.min(current);
                    let mut target = current - entry.factor * unit;
                    if target < floor {
                        warn_once("Flex", "shrinking stopped at the 1px floor");
                        target = floor;
                    }
                    item.set_computed_size(main, target);
                    space += current - target;
                }
                break;
            }

            let mut froze = false;
            for entry in entries.iter_mut().filter(|entry| !entry.frozen) {
                let Some(min) = entry.limit else { continue };
                let item = tree.resolved_mut(entry.id)?;
                let room = item.computed_size(main) - min;
                if unit * entry.factor > room {
                    log::debug!("{:?} frozen at min main size {min}", entry.id);
                    item.set_computed_size(main, min);
                    space += room;
                    entry.frozen = true;
                    froze = true;
                }
            }
            if !froze {
                check_limits = false;
            }
        }
        log::trace!("shrink left {space} unabsorbed");
        Ok(space)
    }

    /// [§ 8.1 Aligning with auto margins](https://www.w3.org/TR/css-flexbox-1/#auto-margins)
    ///
    /// "Prior to alignment via justify-content and align-self, any positive
    /// free space is distributed to auto margins in that dimension."
    fn distribute_auto_margins(&self, tree: &mut LayoutTree, space: f64) -> LayoutResult<()> {
        let main = self.axes.main;
        let mut count = 0_u32;
        for &id in &self.items {
            let item = tree.resolved(id)?;
            count += u32::from(item.margin_start(main).is_auto());
            count += u32::from(item.margin_end(main).is_auto());
        }
        let unit = space / f64::from(count);

        let mut position = 0.0;
        for &id in &self.items {
            let item = tree.resolved(id)?;
            let start = item.margin_start(main);
            let end = item.margin_end(main);
            let outer = item.outer_size(main);

            position += if start.is_auto() { unit } else { start.to_px_or(0.0) };
            tree.set_position(id, main, position)?;
            position += outer - start.to_px_or(0.0);
            if end.is_auto() {
                position += unit;
            }
        }
        Ok(())
    }

    /// [§ 8.2 Axis Alignment: the justify-content property](https://www.w3.org/TR/css-flexbox-1/#justify-content-property)
    ///
    /// Place the items with `space` split according to `justify-content`.
    /// A reversed direction exchanges start and end.
    fn justify(&self, tree: &mut LayoutTree, ctx: &ContainerContext, space: f64) -> LayoutResult<()> {
        let main = self.axes.main;
        let mut mode = Distribution::from(ctx.justify_content);
        if ctx.direction.is_reverse() {
            mode = mode.exchanged();
        }
        let gaps = distribute_space(space, mode, self.items.len());

        let mut position = 0.0;
        for (&id, gap) in self.items.iter().zip(&gaps) {
            position += gap;
            let item = tree.resolved(id)?;
            let (start, outer) = (item.margin_start(main).to_px_or(0.0), item.outer_size(main));
            tree.set_position(id, main, position + start)?;
            position += outer;
        }
        Ok(())
    }
}
