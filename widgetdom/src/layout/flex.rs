use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{display_width, line_count};
use crate::types::{Align, Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

fn border_width(element: &Element) -> u16 {
    element.style.border.map_or(0, |b| b.width)
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = border_width(element);
    rect.shrink(
        element.padding.top.saturating_add(border),
        element.padding.right.saturating_add(border),
        element.padding.bottom.saturating_add(border),
        element.padding.left.saturating_add(border),
    )
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let inner = inner_rect(element, rect);

    match &element.content {
        Content::Children(children) if !children.is_empty() => {
            layout_flow(element, children, inner, result);
        }
        // Frames overlap: each occupies the whole content box, one is shown at a time
        Content::Frames { children, .. } => {
            for frame in children {
                let width = resolve_size(frame.width, inner.width, frame, true);
                let height = resolve_size(frame.height, inner.height, frame, false);
                let frame_rect = Rect::new(inner.x, inner.y, width, height);
                result.insert(frame.id.clone(), frame_rect);
                layout_children(frame, frame_rect, result);
            }
        }
        _ => {}
    }
}

/// Main-axis demand of a child: either a fixed extent or a flex weight.
enum MainDemand {
    Fixed(u16),
    Flex(u16),
}

fn main_demand(child: &Element, is_row: bool) -> MainDemand {
    if child.flex_grow > 0 {
        return MainDemand::Flex(child.flex_grow);
    }
    let size = if is_row { child.width } else { child.height };
    match size {
        Size::Fixed(n) => MainDemand::Fixed(n),
        Size::Auto => MainDemand::Fixed(estimate_size(child, is_row)),
        Size::Fill => MainDemand::Flex(1),
        Size::Flex(weight) => MainDemand::Flex(weight.max(1)),
    }
}

fn layout_flow(element: &Element, children: &[Element], inner: Rect, result: &mut LayoutResult) {
    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    let demands: Vec<MainDemand> = children.iter().map(|c| main_demand(c, is_row)).collect();

    let gap_total = element.gap.saturating_mul(children.len().saturating_sub(1) as u16);
    let fixed_total: u16 = demands
        .iter()
        .map(|d| match d {
            MainDemand::Fixed(n) => *n,
            MainDemand::Flex(_) => 0,
        })
        .fold(0u16, |acc, n| acc.saturating_add(n));
    let weight_total: u32 = demands
        .iter()
        .map(|d| match d {
            MainDemand::Flex(w) => *w as u32,
            MainDemand::Fixed(_) => 0,
        })
        .sum();
    let remaining = main_size.saturating_sub(fixed_total.saturating_add(gap_total)) as u32;

    let mut offset = 0u16;
    let mut flex_assigned = 0u32;
    let mut weight_seen = 0u32;

    for (child, demand) in children.iter().zip(&demands) {
        let main = match demand {
            MainDemand::Fixed(n) => *n,
            MainDemand::Flex(w) => {
                // Distribute by cumulative weight so rounding never loses space
                weight_seen += *w as u32;
                let target = remaining * weight_seen / weight_total.max(1);
                let share = target - flex_assigned;
                flex_assigned = target;
                share as u16
            }
        };
        let main = main.min(main_size.saturating_sub(offset));

        let child_cross = if is_row { child.height } else { child.width };
        let cross = match child_cross {
            Size::Fixed(n) => n,
            Size::Fill | Size::Flex(_) => cross_size,
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row)
                }
            }
        }
        .min(cross_size);

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => (cross_size - cross) / 2,
            Align::End => cross_size - cross,
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x.saturating_add(offset),
                inner.y.saturating_add(cross_offset),
                main,
                cross,
            )
        } else {
            Rect::new(
                inner.x.saturating_add(cross_offset),
                inner.y.saturating_add(offset),
                cross,
                main,
            )
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset = offset.saturating_add(main).saturating_add(element.gap);
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width),
    }
    .min(available)
}

/// Intrinsic extent of an element along one axis, including padding and border.
pub(crate) fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let own = if is_width { element.width } else { element.height };
    if let Size::Fixed(n) = own {
        return n;
    }

    let border = border_width(element).saturating_mul(2);
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                display_width(text) as u16
            } else {
                line_count(text) as u16
            }
        }
        Content::Icon(_) => 1,
        Content::Children(children) => {
            let along_main = (element.direction == Direction::Row) == is_width;
            if along_main {
                let gaps = children.len().saturating_sub(1) as u16;
                let gap_total = element.gap.saturating_mul(gaps);
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .fold(gap_total, |acc, n| acc.saturating_add(n))
            } else {
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::Frames { children, .. } => children
            .iter()
            .map(|c| estimate_size(c, is_width))
            .max()
            .unwrap_or(0),
        Content::None => 0,
    };

    content_size.saturating_add(padding).saturating_add(border)
}
