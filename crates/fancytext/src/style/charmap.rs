//! Character substitution tables.

use std::borrow::Cow;
use std::collections::HashMap;

/// An immutable single-character substitution table.
///
/// Every standard style is one `CharacterMap`. Replacements are strings,
/// not characters, so a source character may expand into several code
/// points (a base letter plus a combining overlay, `u` → `(_)`, ...).
///
/// Lookups that miss are never an error: [`apply`](Self::apply) passes
/// unmapped characters through unchanged.
///
/// # Example
///
/// ```rust
/// use fancytext::CharacterMap;
///
/// let map = CharacterMap::from_static(&[('a', "α"), ('b', "β")]);
/// assert_eq!(map.apply("abc!"), "αβc!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMap {
    entries: HashMap<char, Cow<'static, str>>,
}

impl CharacterMap {
    /// Builds a map that borrows its replacements from static data.
    pub fn from_static(pairs: &[(char, &'static str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|&(source, replacement)| (source, Cow::Borrowed(replacement)))
            .collect();
        Self { entries }
    }

    /// Builds a map from owned pairs, e.g. a table read from a stylesheet.
    ///
    /// When a source character appears twice the last replacement wins.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(source, replacement)| (source, Cow::Owned(replacement.into())))
            .collect();
        Self { entries }
    }

    /// Returns the replacement for `c`, if the table has one.
    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(|r| r.as_ref())
    }

    /// Returns true if `c` has a replacement in this table.
    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    /// Replaces each character of `text` independently, keeping order.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 4);
        for c in text.chars() {
            match self.get(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }

    /// Returns true if every replacement is exactly one character.
    ///
    /// Styles built from such tables preserve the character count of
    /// their input.
    pub fn is_one_to_one(&self) -> bool {
        self.entries.values().all(|r| r.chars().count() == 1)
    }

    /// Number of mapped source characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(source, replacement)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(c, r)| (*c, r.as_ref()))
    }
}
