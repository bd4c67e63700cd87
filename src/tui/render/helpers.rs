use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::tui::text_input::TextInput;

/// Checkbox glyph for a completion flag
pub(super) fn checkbox_symbol(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Display width in terminal cells
pub(super) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub(super) fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Visible slice of an input field `width` cells wide, scrolled so the
/// cursor stays in view. Returns the text and the cursor's cell offset.
pub(super) fn input_window(input: &TextInput, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    let value = input.value();
    let cursor_col = input.cursor_col();
    let skip_cols = input.window_start_col(width);

    let mut col = 0;
    let mut shown = String::new();
    let mut shown_width = 0;
    for g in value.graphemes(true) {
        let gw = display_width(g);
        if col < skip_cols {
            col += gw;
            continue;
        }
        if shown_width + gw > width {
            break;
        }
        shown.push_str(g);
        shown_width += gw;
        col += gw;
    }
    (shown, cursor_col.saturating_sub(skip_cols).min(width - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer line", 6), "a lon\u{2026}");
        assert_eq!(truncate_to_width("日本語", 4), "日\u{2026}");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn input_window_follows_cursor() {
        let input = TextInput::with_value("abcdefghij");
        assert_eq!(input_window(&input, 5), ("ghij".to_string(), 4));

        let mut input = TextInput::with_value("abcdefghij");
        input.move_home();
        assert_eq!(input_window(&input, 5), ("abcde".to_string(), 0));

        let input = TextInput::with_value("abc");
        assert_eq!(input_window(&input, 10), ("abc".to_string(), 3));
    }
}
