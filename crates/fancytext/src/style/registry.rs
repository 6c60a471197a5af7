//! Ordered registry of standard styles and special transformers.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::charmap::CharacterMap;
use super::error::StyleError;
use super::tables::STANDARD_STYLES;
use crate::transform::{builtin_transforms_with_zalgo, Transform, ZalgoConfig};

/// Whether a style is a plain substitution table or a special effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Character-local substitution through a [`CharacterMap`].
    Standard,
    /// A [`Transform`] applied to the whole text.
    Special,
}

impl Category {
    /// Returns the lowercase name used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Standard => "standard",
            Category::Special => "special",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two shapes a registered style can take.
#[derive(Debug, Clone)]
pub enum StyleKind {
    Standard(CharacterMap),
    Special(Transform),
}

/// A named style.
#[derive(Debug, Clone)]
pub struct Style {
    name: String,
    kind: StyleKind,
}

impl Style {
    /// Returns the style's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &StyleKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        match self.kind {
            StyleKind::Standard(_) => Category::Standard,
            StyleKind::Special(_) => Category::Special,
        }
    }

    /// Converts `text` with this style.
    pub fn apply<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        match &self.kind {
            StyleKind::Standard(map) => map.apply(text),
            StyleKind::Special(transform) => transform.apply(text, rng),
        }
    }

    /// Returns false if repeated calls may produce different output.
    pub fn is_deterministic(&self) -> bool {
        match &self.kind {
            StyleKind::Standard(_) => true,
            StyleKind::Special(transform) => transform.is_deterministic(),
        }
    }
}

/// Registry of named styles.
///
/// Styles keep their registration order, but standard styles always come
/// before special transformers when listed or iterated, matching the
/// order in which conversion results are produced.
///
/// Names are unique across both categories, so a lookup never has to
/// choose between a standard style and a transformer of the same name.
///
/// # Example
///
/// ```rust
/// use fancytext::{CharacterMap, StyleRegistry, Transform};
///
/// let mut registry = StyleRegistry::new();
/// registry
///     .add_special("Shout", Transform::custom(|t| t.to_uppercase()))
///     .unwrap();
/// registry
///     .add_standard("Greek", CharacterMap::from_static(&[('a', "α")]))
///     .unwrap();
///
/// assert_eq!(registry.names(), ["Greek", "Shout"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: Vec<Style>,
    index: HashMap<String, usize>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in style and transformer.
    pub fn builtin() -> Self {
        Self::builtin_with_zalgo(ZalgoConfig::default())
    }

    /// Like [`builtin`](Self::builtin), with the Zalgo transformer tuned by `zalgo`.
    pub fn builtin_with_zalgo(zalgo: ZalgoConfig) -> Self {
        let mut registry = Self::new();
        for &(name, table) in STANDARD_STYLES {
            registry.push(name.to_string(), StyleKind::Standard(CharacterMap::from_static(table)));
        }
        for (name, transform) in builtin_transforms_with_zalgo(zalgo) {
            registry.push(name.to_string(), StyleKind::Special(transform));
        }
        registry
    }

    /// Registers a standard style.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::DuplicateStyle`] if the name is taken and
    /// [`StyleError::EmptyName`] if it is blank.
    pub fn add_standard(
        &mut self,
        name: impl Into<String>,
        map: CharacterMap,
    ) -> Result<(), StyleError> {
        self.insert(name.into(), StyleKind::Standard(map))
    }

    /// Registers a special transformer.
    ///
    /// # Errors
    ///
    /// Same as [`add_standard`](Self::add_standard).
    pub fn add_special(
        &mut self,
        name: impl Into<String>,
        transform: Transform,
    ) -> Result<(), StyleError> {
        self.insert(name.into(), StyleKind::Special(transform))
    }

    /// Looks up a style by exact name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.index.get(name).map(|&i| &self.styles[i])
    }

    /// Returns true if a style with this exact name exists.
    pub fn has(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates standard styles, then special transformers.
    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.standard().chain(self.special())
    }

    /// Iterates standard styles in registration order.
    pub fn standard(&self) -> impl Iterator<Item = &Style> {
        self.styles
            .iter()
            .filter(|s| s.category() == Category::Standard)
    }

    /// Iterates special transformers in registration order.
    pub fn special(&self) -> impl Iterator<Item = &Style> {
        self.styles
            .iter()
            .filter(|s| s.category() == Category::Special)
    }

    /// Style names: standard first, then special, each in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Style::name).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    fn insert(&mut self, name: String, kind: StyleKind) -> Result<(), StyleError> {
        if name.trim().is_empty() {
            return Err(StyleError::EmptyName);
        }
        if self.index.contains_key(&name) {
            return Err(StyleError::DuplicateStyle { name });
        }
        log::debug!("registering style \"{}\"", name);
        self.push(name, kind);
        Ok(())
    }

    fn push(&mut self, name: String, kind: StyleKind) {
        debug_assert!(!self.index.contains_key(&name), "duplicate style {name}");
        self.index.insert(name.clone(), self.styles.len());
        self.styles.push(Style { name, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_counts() {
        let registry = StyleRegistry::builtin();
        assert_eq!(registry.standard().count(), 16);
        assert_eq!(registry.special().count(), 10);
        assert_eq!(registry.len(), 26);
    }

    #[test]
    fn test_builtin_names_order() {
        let registry = StyleRegistry::builtin();
        let names = registry.names();
        assert_eq!(names.first(), Some(&"Bold"));
        assert_eq!(names[15], "Slashed");
        assert_eq!(names[16], "Underline");
        assert_eq!(names.last(), Some(&"Square"));
    }

    #[test]
    fn test_script_and_fraktur() {
        let registry = StyleRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(0);
        let script = registry.get("Script").unwrap();
        assert_eq!(script.apply("Hello", &mut rng), "𝓗𝓮𝓵𝓵𝓸");
        let fraktur = registry.get("Fraktur").unwrap();
        assert_eq!(fraktur.apply("Test", &mut rng), "𝔗𝔢𝔰𝔱");
    }

    #[test]
    fn test_letterlike_exceptions() {
        let registry = StyleRegistry::builtin();
        let mut rng = StdRng::seed_from_u64(0);
        let apply = |name: &str, text: &str, rng: &mut StdRng| {
            registry.get(name).unwrap().apply(text, rng)
        };
        assert_eq!(apply("Double Struck", "CNRZ", &mut rng), "ℂℕℝℤ");
        assert_eq!(apply("Italic", "h", &mut rng), "ℎ");
        assert_eq!(apply("Fraktur", "CHIRZ", &mut rng), "ℭℌℑℜℨ");
        assert_eq!(apply("Calligraphy", "Beo", &mut rng), "ℬℯℴ");
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut registry = StyleRegistry::builtin();
        let err = registry
            .add_standard("Bold", CharacterMap::default())
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::DuplicateStyle {
                name: "Bold".to_string()
            }
        );
        let err = registry
            .add_special("Bold", Transform::Fullwidth)
            .unwrap_err();
        assert!(matches!(err, StyleError::DuplicateStyle { .. }));
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut registry = StyleRegistry::new();
        assert_eq!(
            registry.add_standard("  ", CharacterMap::default()),
            Err(StyleError::EmptyName)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_standard_listed_before_special() {
        let mut registry = StyleRegistry::new();
        registry.add_special("Wide", Transform::Fullwidth).unwrap();
        registry
            .add_standard("Greek", CharacterMap::from_static(&[('a', "α")]))
            .unwrap();
        registry.add_special("Flat", Transform::custom(str::to_lowercase)).unwrap();

        assert_eq!(registry.names(), ["Greek", "Wide", "Flat"]);
    }

    #[test]
    fn test_names_reflect_additions() {
        let mut registry = StyleRegistry::builtin();
        let before = registry.names().len();
        registry
            .add_standard("Custom", CharacterMap::from_static(&[('x', "✗")]))
            .unwrap();
        assert_eq!(registry.names().len(), before + 1);
        assert!(registry.has("Custom"));
        assert_eq!(registry.names()[16], "Custom");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Standard).unwrap(),
            "\"standard\""
        );
        assert_eq!(Category::Special.to_string(), "special");
    }
}
