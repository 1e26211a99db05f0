// Shared text formatting for components

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal columns, marking the cut
/// with an ellipsis
///
/// Uses unicode display width (not byte length) so wide characters in hero
/// names don't overflow the row.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Leave room for the ellipsis (1 column)
    let target_width = max_width - 1;
    let mut current_width = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        current_width += char_width;
        truncated.push(c);
    }

    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_to_width("Narco", 10), "Narco");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(truncate_to_width("Celeritas", 6), "Celer…");
    }

    #[test]
    fn test_wide_characters_counted_by_columns() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("英雄英雄", 5), "英雄…");
    }
}
