use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Rgb, Style};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    if let Some(bg) = &element.style.background {
        fill_rect(buf, *rect, bg.to_rgb());
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => draw_text(buf, *rect, text, &element.style),
        Content::TextInput { value, placeholder } => {
            if value.is_empty() {
                let style = element
                    .style_placeholder
                    .unwrap_or_else(|| element.style.dim());
                draw_text(buf, *rect, placeholder.as_deref().unwrap_or(""), &style);
            } else {
                draw_text(buf, *rect, value, &element.style);
            }
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

/// Draw one line of text at the top of `rect`, truncated to its width.
fn draw_text(buf: &mut Buffer, rect: Rect, text: &str, style: &Style) {
    if rect.is_empty() {
        return;
    }

    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(DEFAULT_FG);
    let explicit_bg = style.background.map(|c| c.to_rgb());
    let visible = truncate_to_width(text, rect.width as usize);

    let mut x = rect.x;
    let y = rect.y;

    for ch in visible.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if x.saturating_add(width) > rect.right() {
            break;
        }

        // Preserve existing background if no explicit background set
        let bg = explicit_bg
            .or_else(|| buf.get(x, y).map(|c| c.bg))
            .unwrap_or_default();

        buf.set(x, y, Cell::styled(ch, fg, bg, style.text_style));
        for offset in 1..width {
            buf.set(x + offset, y, Cell::continuation(bg));
        }
        x += width;
    }
}
