mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Direction, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out the tree rooted at `element` inside `available`.
///
/// Children stack along their parent's direction. `Size::Fill` children
/// share whatever main-axis space the other children leave over.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

/// Natural size of an element before it is constrained by its parent.
pub fn intrinsic_size(element: &Element) -> (u16, u16) {
    let (content_w, content_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (width_of(text), 1),
        Content::TextInput { value, placeholder } => {
            let placeholder_w = placeholder.as_deref().map(width_of).unwrap_or(0);
            // One extra cell so the caret fits after the last character
            (width_of(value).max(placeholder_w).saturating_add(1), 1)
        }
        Content::Children(children) => {
            let sizes: Vec<(u16, u16)> = children.iter().map(intrinsic_size).collect();
            let gaps = element.gap.saturating_mul(sizes.len().saturating_sub(1) as u16);
            match element.direction {
                Direction::Column => (
                    sizes.iter().map(|s| s.0).max().unwrap_or(0),
                    sizes.iter().fold(gaps, |acc, s| acc.saturating_add(s.1)),
                ),
                Direction::Row => (
                    sizes.iter().fold(gaps, |acc, s| acc.saturating_add(s.0)),
                    sizes.iter().map(|s| s.1).max().unwrap_or(0),
                ),
            }
        }
    };

    let width = match element.width {
        Size::Fixed(w) => w,
        Size::Fill | Size::Auto => content_w,
    };
    let height = match element.height {
        Size::Fixed(h) => h,
        Size::Fill | Size::Auto => content_h,
    };

    (width.max(element.min_width.unwrap_or(0)), height)
}

fn width_of(text: &str) -> u16 {
    display_width(text).min(u16::MAX as usize) as u16
}

fn resolve(size: Size, intrinsic: u16, available: u16) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => intrinsic.min(available),
    }
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let (intrinsic_w, intrinsic_h) = intrinsic_size(element);
    let width = resolve(element.width, intrinsic_w, available.width);
    let height = resolve(element.height, intrinsic_h, available.height);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, result);
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let is_row = element.direction == Direction::Row;
    let main_size = |c: &Element| if is_row { c.width } else { c.height };
    let main_avail = if is_row { rect.width } else { rect.height };

    // Main-axis space claimed by non-fill children and gaps
    let gaps = element.gap.saturating_mul(children.len().saturating_sub(1) as u16);
    let mut claimed = gaps;
    let mut fill_count: u16 = 0;
    for child in children {
        if main_size(child) == Size::Fill {
            fill_count += 1;
        } else {
            let (w, h) = intrinsic_size(child);
            claimed = claimed.saturating_add(if is_row { w } else { h });
        }
    }
    let fill_share = main_avail
        .saturating_sub(claimed)
        .checked_div(fill_count)
        .unwrap_or(0);

    let mut cursor = if is_row { rect.x } else { rect.y };
    let main_end = if is_row { rect.right() } else { rect.bottom() };

    for child in children {
        let remaining = main_end.saturating_sub(cursor);
        let main_len = if main_size(child) == Size::Fill {
            fill_share.min(remaining)
        } else {
            remaining
        };

        let child_avail = if is_row {
            Rect::new(cursor, rect.y, main_len, rect.height)
        } else {
            Rect::new(rect.x, cursor, rect.width, main_len)
        };

        layout_element(child, child_avail, result);

        let used = result
            .get(&child.id)
            .map(|r| if is_row { r.width } else { r.height })
            .unwrap_or(0);
        cursor = cursor.saturating_add(used).saturating_add(element.gap);
    }
}
