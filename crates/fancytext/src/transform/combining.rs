//! Zero-width combining mark decorations.

/// COMBINING LOW LINE.
pub const UNDERLINE: char = '\u{0332}';
/// COMBINING LONG STROKE OVERLAY.
pub const STRIKETHROUGH: char = '\u{0336}';
/// COMBINING DOUBLE LOW LINE.
pub const DOUBLE_UNDERLINE: char = '\u{0333}';
/// COMBINING OVERLINE.
pub const OVERLINE: char = '\u{0305}';

/// Places `mark` after every character of `text`, the last one included.
///
/// ```rust
/// use fancytext::transform::{combine, UNDERLINE};
///
/// assert_eq!(combine("Test", UNDERLINE), "T̲e̲s̲t̲");
/// assert_eq!(combine("", UNDERLINE), "");
/// ```
pub fn combine(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len() + text.len() * mark.len_utf8());
    for c in text.chars() {
        out.push(c);
        out.push(mark);
    }
    out
}
