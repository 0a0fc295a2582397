mod colors;

pub use colors::{apply_inquire_theme, error, highlight, info, success, warning};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Collapses `text` onto one line and cuts it to at most `max_width` terminal
/// columns, appending `…` when anything was dropped.
pub fn truncate_display(text: &str, max_width: usize) -> String {
    let flat: String = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if flat.width() <= max_width {
        return flat;
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in flat.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}
