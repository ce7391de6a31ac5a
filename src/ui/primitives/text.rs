use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Font;
use crate::ui::primitives::icon::Icon;

/// Terminal columns taken by `text`
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cut `text` to at most `max_columns`, ending in an ellipsis when shortened
pub fn truncate(text: &str, max_columns: usize, font: Font) -> String {
    if display_width(text) <= max_columns {
        return text.to_string();
    }
    let ellipsis = Icon::Ellipsis.render(font);
    let budget = max_columns.saturating_sub(display_width(ellipsis));

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ellipsis);
    out
}

/// Text drawn on a slice: the icon mark if the item has one, then the
/// truncated label
pub fn slice_label(label: &str, has_icon: bool, max_columns: usize, font: Font) -> String {
    let label = truncate(label, max_columns, font);
    if has_icon {
        format!("{} {}", Icon::Image.render(font), label)
    } else {
        label
    }
}
