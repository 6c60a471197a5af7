//! Halfwidth to fullwidth code point shifting.

/// Distance between printable ASCII and the Halfwidth and Fullwidth Forms block.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// IDEOGRAPHIC SPACE, the fullwidth counterpart of U+0020.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Maps a single character to its fullwidth form.
///
/// Printable ASCII (`!` through `~`) shifts by `0xFEE0`, the space becomes
/// U+3000 and everything else is returned unchanged.
pub fn to_fullwidth_char(c: char) -> char {
    match u32::from(c) {
        32 => IDEOGRAPHIC_SPACE,
        cp @ 33..=126 => char::from_u32(cp + FULLWIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}

/// Converts every character of `text` with [`to_fullwidth_char`].
///
/// ```rust
/// use fancytext::transform::fullwidth;
///
/// assert_eq!(fullwidth("A B"), "Ａ　Ｂ");
/// ```
pub fn fullwidth(text: &str) -> String {
    text.chars().map(to_fullwidth_char).collect()
}
