//! # Fancytext - Unicode text stylizer
//!
//! `fancytext` turns plain text into decorative Unicode variants: bold,
//! script and fraktur letters, bubble and square glyphs, fullwidth forms,
//! combining-mark underlines, leet speak, upside-down text and zalgo.
//!
//! ## Concepts
//!
//! * [`CharacterMap`]: a read-only table mapping one character to a
//!   replacement string. Each *standard* style is one table; characters a
//!   table does not know pass through unchanged.
//! * [`Transform`]: a *special* effect that is not plain substitution
//!   (combining marks, reversal, code point shifting, random decoration).
//! * [`StyleRegistry`]: the ordered list of named styles of both kinds.
//! * [`Converter`]: runs text through the registry and returns one
//!   [`ConversionResult`] per style.
//!
//! ## Quick start
//!
//! ```rust
//! let results = fancytext::convert_all("Test");
//! for result in &results {
//!     println!("{:>16}: {}", result.name, result.text);
//! }
//!
//! assert_eq!(fancytext::convert_to_style("Test", "Underline").as_deref(), Some("T̲e̲s̲t̲"));
//! assert!(fancytext::has_style("Leet Speak"));
//! ```
//!
//! ## Custom styles
//!
//! Extra standard styles can be declared in YAML or JSON and loaded with
//! [`StyleSheet`], or built directly:
//!
//! ```rust
//! use fancytext::{CharacterMap, Converter, StyleRegistry, Transform};
//!
//! let mut registry = StyleRegistry::builtin();
//! registry.add_standard("Greek", CharacterMap::from_static(&[('a', "α"), ('b', "β")])).unwrap();
//! registry.add_special("Shout", Transform::custom(|t| t.to_uppercase())).unwrap();
//!
//! let converter = Converter::new(registry);
//! assert_eq!(converter.convert_to_style("abc", "Greek").as_deref(), Some("αβc"));
//! ```
//!
//! ## Randomness
//!
//! Only the Zalgo transformer is random. The `*_with_rng` methods on
//! [`Converter`] take any [`rand::Rng`], so a seeded generator makes its
//! output reproducible.

pub mod engine;
pub mod style;
pub mod transform;
mod util;

use once_cell::sync::Lazy;

pub use engine::{ConversionResult, Converter};
pub use style::{
    Category, CharacterMap, SheetFormat, Style, StyleError, StyleKind, StyleRegistry, StyleSheet,
    StyleSheetError,
};
pub use transform::{Transform, ZalgoConfig};
pub use util::{display_width, pad_to_width, truncate_to_width};

/// Built-in converter shared by the free functions below.
static DEFAULT_CONVERTER: Lazy<Converter> = Lazy::new(Converter::builtin);

/// Converts `text` with every built-in style.
pub fn convert_all(text: &str) -> Vec<ConversionResult> {
    DEFAULT_CONVERTER.convert_all(text)
}

/// Converts `text` with one built-in style, or `None` for unknown names.
pub fn convert_to_style(text: &str, style_name: &str) -> Option<String> {
    DEFAULT_CONVERTER.convert_to_style(text, style_name)
}

/// Names of all built-in styles, standard first.
pub fn available_styles() -> Vec<&'static str> {
    Lazy::force(&DEFAULT_CONVERTER).available_styles()
}

/// Returns true if a built-in style has this name.
pub fn has_style(style_name: &str) -> bool {
    DEFAULT_CONVERTER.has_style(style_name)
}

/// Returns the shared built-in converter.
pub fn default_converter() -> &'static Converter {
    Lazy::force(&DEFAULT_CONVERTER)
}
