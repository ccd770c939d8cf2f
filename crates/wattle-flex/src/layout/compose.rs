//! Layout of one flex container.
//!
//! [§ 9 Flex Layout Algorithm](https://www.w3.org/TR/css-flexbox-1/#layout-algorithm)
//!
//! [`compose`] runs the stages below strictly in order over one container,
//! then recurses into every child that is itself a container:
//!
//! 1. resolve every child against the container
//! 2. order the children and break them into [`FlexLine`]s
//! 3. distribute cross space between lines (`align-content`)
//! 4. align items within each line (`align-self`)
//! 5. resolve main-axis sizes and positions on each line
//! 6. size an auto-sized container from its first line

use wattle_common::warning::warn_once;

use super::axis::{Axis, AxisMapping};
use super::flex_line::{ContainerContext, FlexLine};
use super::lines::{LineBreaker, LineItem, sort_by_order};
use super::space::{Distribution, distribute_space};
use crate::error::LayoutResult;
use crate::style::{AlignContent, BoxSizing, FlexWrap};
use crate::tree::{LayoutTree, NodeId};

/// Lay out the children of `container`, then its nested containers.
///
/// `container` must already be resolved. A container without children is
/// left untouched.
///
/// # Errors
///
/// The first resolution or alignment error among the children.
pub fn compose(tree: &mut LayoutTree, container: NodeId) -> LayoutResult<()> {
    let children = tree.children(container)?.to_vec();
    if children.is_empty() {
        return Ok(());
    }

    let parent = tree.parent_context(container)?;
    for &child in &children {
        tree.resolve(child, Some(&parent))?;
    }
    log::trace!("{container:?}: resolved {} children", children.len());

    let resolved = tree.resolved(container)?;
    let axes = AxisMapping::for_direction(resolved.flex_direction);
    let mut ctx = ContainerContext {
        axes,
        main_size: tree.definite_inner_size(container, axes.main)?,
        direction: resolved.flex_direction,
        wrap: resolved.flex_wrap,
        justify_content: resolved.justify_content,
        align_items: resolved.align_items,
        align_content: resolved.align_content,
    };

    let mut lines = build_lines(tree, &children, &ctx)?;
    log::trace!("{container:?}: {} lines", lines.len());

    align_content(tree, container, &mut lines, &mut ctx)?;
    for line in &mut lines {
        line.align_items(tree, &ctx)?;
    }
    for line in &lines {
        line.resolve_main_axis(tree, &ctx)?;
    }
    fit_container(tree, container, &mut lines, axes)?;

    for &child in &children {
        if !tree.children(child)?.is_empty() {
            compose(tree, child)?;
        }
    }
    Ok(())
}

fn build_lines(
    tree: &LayoutTree,
    children: &[NodeId],
    ctx: &ContainerContext,
) -> LayoutResult<Vec<FlexLine>> {
    let mut items = children
        .iter()
        .map(|&id| {
            let item = tree.resolved(id)?;
            Ok(LineItem {
                id,
                order: item.order,
                outer_main: item.outer_size(ctx.axes.main),
            })
        })
        .collect::<LayoutResult<Vec<_>>>()?;
    sort_by_order(&mut items);

    let breaker = LineBreaker {
        wrap: ctx.wrap,
        direction: ctx.direction,
        main_size: ctx.main_size,
    };
    Ok(breaker
        .break_lines(&items)
        .into_iter()
        .map(|ids| FlexLine::new(ids, ctx.axes))
        .collect())
}

/// [§ 9.4 step 15](https://www.w3.org/TR/css-flexbox-1/#algo-line-align)
///
/// "Align all flex lines per align-content."
///
/// With a definite cross size the leftover space is split between the
/// lines. A single line always behaves as `stretch` and receives all of it.
fn align_content(
    tree: &mut LayoutTree,
    container: NodeId,
    lines: &mut [FlexLine],
    ctx: &mut ContainerContext,
) -> LayoutResult<()> {
    let mut space = 0.0;
    if let Some(cross_size) = tree.definite_inner_size(container, ctx.axes.cross)? {
        let mut used = 0.0;
        for line in lines.iter_mut() {
            used += line.cross_axis_size(tree)?;
        }
        space = cross_size - used;
    }

    let gaps = if lines.len() == 1 {
        ctx.align_content = AlignContent::Stretch;
        tree.resolved_mut(container)?.align_content = AlignContent::Stretch;
        vec![0.0, space]
    } else {
        let mut mode = Distribution::from(ctx.align_content);
        if ctx.wrap == FlexWrap::WrapReverse {
            mode = mode.exchanged();
        }
        distribute_space(space, mode, lines.len())
    };

    let mut position = 0.0;
    for (index, line) in lines.iter_mut().enumerate() {
        position += gaps[index];
        line.cross_position = position;
        line.cross_space = gaps[index + 1];
        position += line.cross_axis_size(tree)?;
    }
    Ok(())
}

/// [§ 9.9 Cross Size Determination](https://www.w3.org/TR/css-flexbox-1/#algo-cross-container)
///
/// Give a container without a definite size the size of its first line on
/// each such axis. Lines after the first are not considered.
fn fit_container(
    tree: &mut LayoutTree,
    container: NodeId,
    lines: &mut [FlexLine],
    axes: AxisMapping,
) -> LayoutResult<()> {
    let Some(first) = lines.first_mut() else {
        return Ok(());
    };
    let fits = [
        (axes.cross, first.cross_axis_size(tree)?),
        (axes.main, first.main_axis_size(tree)?),
    ];

    let mut fitted = false;
    for (axis, content) in fits {
        if tree.definite_inner_size(container, axis)?.is_none() {
            set_content_size(tree, container, axis, content)?;
            fitted = true;
        }
    }
    if fitted && lines.len() > 1 {
        warn_once(
            "Flex",
            "auto-sized container with several lines is sized from its first line only",
        );
    }
    Ok(())
}

fn set_content_size(
    tree: &mut LayoutTree,
    container: NodeId,
    axis: Axis,
    content: f64,
) -> LayoutResult<()> {
    let resolved = tree.resolved_mut(container)?;
    let size = if resolved.box_sizing == BoxSizing::BorderBox {
        content + resolved.border_padding(axis)
    } else {
        content
    };
    log::trace!("{container:?}: fitted {axis:?} size {size}");
    resolved.set_computed_size(axis, size);
    Ok(())
}
