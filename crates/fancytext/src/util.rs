//! Display-width helpers for styled text.
//!
//! Styled output mixes wide glyphs (fullwidth, enclosed letters) with
//! zero-width combining marks, so byte and char counts say little about
//! how many terminal columns a result occupies.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the number of terminal columns `s` occupies.
///
/// ```rust
/// use fancytext::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("ＡＢ"), 4);
/// assert_eq!(display_width("a\u{332}"), 1);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads `s` with trailing spaces up to `width` columns.
///
/// Strings already at least `width` wide are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(current));
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(current)));
    out
}

/// Cuts `s` down to at most `max_width` columns, ending in `…` when
/// anything was removed.
///
/// Combining marks stay with the character they follow.
///
/// ```rust
/// use fancytext::truncate_to_width;
///
/// assert_eq!(truncate_to_width("𝐇𝐢", 10), "𝐇𝐢");
/// assert_eq!(truncate_to_width("Ⓗⓔⓛⓛⓞ", 4), "Ⓗⓔⓛ…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    // the ellipsis takes the last column
    let budget = max_width - 1;
    let mut used = 0;
    let cut = s
        .char_indices()
        .find(|&(_, c)| {
            used += c.width().unwrap_or(0);
            used > budget
        })
        .map_or(s.len(), |(i, _)| i);
    format!("{}…", &s[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_wide_and_combining() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("Ａ　Ｂ"), 6);
        assert_eq!(display_width("T\u{332}e\u{332}"), 2);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("ＡＢ", 5), "ＡＢ ");
        assert_eq!(pad_to_width("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
        assert_eq!(truncate_to_width("Hello World", 7), "Hello …");
    }

    #[test]
    fn test_truncate_counts_wide_glyphs() {
        assert_eq!(truncate_to_width("ＡＢＣ", 4), "Ａ…");
    }

    #[test]
    fn test_truncate_keeps_marks_attached() {
        assert_eq!(
            truncate_to_width("a\u{332}b\u{332}c\u{332}", 2),
            "a\u{332}…"
        );
    }

    #[test]
    fn test_truncate_empty() {
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn test_truncate_to_nothing() {
        assert_eq!(truncate_to_width("Hello", 0), "");
    }
}
