//! Conversion engine.
//!
//! [`Converter`] runs one input string through every registered style and
//! returns a fresh [`ConversionResult`] per style. The registry is shared
//! read-only, so one converter can serve any number of callers and threads.

use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::style::{Category, StyleError, StyleRegistry};

/// One style applied to one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    /// Style name as registered.
    pub name: String,
    /// Converted text.
    pub text: String,
    /// Whether the style is a substitution table or a special effect.
    pub category: Category,
}

/// Converts text with the styles of a [`StyleRegistry`].
///
/// # Example
///
/// ```rust
/// use fancytext::{Category, Converter};
///
/// let converter = Converter::builtin();
/// let results = converter.convert_all("Hi");
///
/// assert_eq!(results.len(), converter.available_styles().len());
/// assert_eq!(results[0].category, Category::Standard);
/// assert_eq!(converter.convert_to_style("LEET", "Leet Speak").as_deref(), Some("|337"));
/// assert_eq!(converter.convert_to_style("Test", "StyleInexistant"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    registry: Arc<StyleRegistry>,
}

impl Converter {
    /// Creates a converter that owns `registry`.
    pub fn new(registry: StyleRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    /// Creates a converter over an already shared registry.
    pub fn from_shared(registry: Arc<StyleRegistry>) -> Self {
        Self { registry }
    }

    /// Creates a converter over [`StyleRegistry::builtin`].
    pub fn builtin() -> Self {
        Self::new(StyleRegistry::builtin())
    }

    /// The registry this converter reads from.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Converts `text` with every style, using the thread-local RNG for zalgo.
    ///
    /// Results follow [`available_styles`](Self::available_styles) order.
    pub fn convert_all(&self, text: &str) -> Vec<ConversionResult> {
        self.convert_all_with_rng(text, &mut rand::rng())
    }

    /// Like [`convert_all`](Self::convert_all), drawing randomness from `rng`.
    pub fn convert_all_with_rng<R: Rng>(&self, text: &str, rng: &mut R) -> Vec<ConversionResult> {
        self.registry
            .iter()
            .map(|style| ConversionResult {
                name: style.name().to_string(),
                text: style.apply(text, rng),
                category: style.category(),
            })
            .collect()
    }

    /// Converts `text` with a single style.
    ///
    /// Returns `None` if no standard style or special transformer has this
    /// name.
    pub fn convert_to_style(&self, text: &str, style_name: &str) -> Option<String> {
        self.convert_to_style_with_rng(text, style_name, &mut rand::rng())
    }

    /// Like [`convert_to_style`](Self::convert_to_style), drawing randomness from `rng`.
    pub fn convert_to_style_with_rng<R: Rng>(
        &self,
        text: &str,
        style_name: &str,
        rng: &mut R,
    ) -> Option<String> {
        match self.registry.get(style_name) {
            Some(style) => Some(style.apply(text, rng)),
            None => {
                log::debug!("no style named \"{}\"", style_name);
                None
            }
        }
    }

    /// Like [`convert_to_style`](Self::convert_to_style), for callers that
    /// propagate errors with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotFound`] for unknown names.
    pub fn try_convert_to_style(&self, text: &str, style_name: &str) -> Result<String, StyleError> {
        self.convert_to_style(text, style_name)
            .ok_or_else(|| StyleError::NotFound {
                name: style_name.to_string(),
            })
    }

    /// Standard style names, then special transformer names.
    pub fn available_styles(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Returns true if a style with this exact name is registered.
    pub fn has_style(&self, style_name: &str) -> bool {
        self.registry.has(style_name)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::builtin()
    }
}
