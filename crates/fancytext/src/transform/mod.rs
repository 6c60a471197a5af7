//! Special transformers: effects that are not plain 1:1 substitution.
//!
//! This module provides:
//!
//! - [`Transform`]: the closed set of special effects, plus host closures
//! - [`combine`]: zero-width mark insertion (underline, strikethrough, ...)
//! - [`fullwidth`]: ASCII to fullwidth code point shifting
//! - [`zalgo`]: randomized mark stacking, driven by an injected [`Rng`]
//!
//! The built-in transformer list lives in [`builtin_transforms`].

mod combining;
mod fullwidth;
mod tables;
mod zalgo;

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::style::CharacterMap;

pub use combining::{combine, DOUBLE_UNDERLINE, OVERLINE, STRIKETHROUGH, UNDERLINE};
pub use fullwidth::{fullwidth, to_fullwidth_char};
pub use zalgo::{
    is_zalgo_mark, zalgo, ZalgoConfig, MARKS_ABOVE, MARKS_BELOW, MARKS_THROUGH,
};

/// A host-supplied pure transformation.
pub type TransformFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A named special effect applied to the whole input text.
#[derive(Clone)]
pub enum Transform {
    /// Insert a combining mark after every character.
    Combining(char),
    /// Character-local substitution with identity on miss.
    Substitute(CharacterMap),
    /// Substitute each character, then reverse the sequence.
    Flip(CharacterMap),
    /// Shift printable ASCII into the fullwidth block.
    Fullwidth,
    /// Random combining-mark stacking.
    Zalgo(ZalgoConfig),
    /// Any other pure `&str -> String` function.
    Custom(TransformFn),
}

impl Transform {
    /// Wraps a closure as a [`Transform::Custom`].
    ///
    /// ```rust
    /// use fancytext::Transform;
    ///
    /// let shout = Transform::custom(|text| text.to_uppercase());
    /// assert_eq!(shout.apply("hey", &mut rand::rng()), "HEY");
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Transform::Custom(Arc::new(f))
    }

    /// Applies the effect to `text`. Only [`Transform::Zalgo`] draws from `rng`.
    pub fn apply<R: Rng>(&self, text: &str, rng: &mut R) -> String {
        match self {
            Transform::Combining(mark) => combine(text, *mark),
            Transform::Substitute(map) => map.apply(text),
            Transform::Flip(map) => flip(text, map),
            Transform::Fullwidth => fullwidth(text),
            Transform::Zalgo(config) => zalgo(text, config, rng),
            Transform::Custom(f) => f(text),
        }
    }

    /// Returns false for effects whose output varies between calls.
    pub fn is_deterministic(&self) -> bool {
        !matches!(self, Transform::Zalgo(_))
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Combining(mark) => f
                .debug_tuple("Combining")
                .field(&format_args!("U+{:04X}", u32::from(*mark)))
                .finish(),
            Transform::Substitute(map) => f.debug_tuple("Substitute").field(&map.len()).finish(),
            Transform::Flip(map) => f.debug_tuple("Flip").field(&map.len()).finish(),
            Transform::Fullwidth => f.write_str("Fullwidth"),
            Transform::Zalgo(config) => f.debug_tuple("Zalgo").field(config).finish(),
            Transform::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Looks every character up in `map`, then reverses the item order.
///
/// Each lookup result stays intact, so multi-codepoint replacements are
/// not split by the reversal.
fn flip(text: &str, map: &CharacterMap) -> String {
    text.char_indices()
        .map(|(i, c)| map.get(c).unwrap_or(&text[i..i + c.len_utf8()]))
        .rev()
        .collect()
}

/// Built-in special transformers in declaration order.
pub fn builtin_transforms() -> Vec<(&'static str, Transform)> {
    builtin_transforms_with_zalgo(ZalgoConfig::default())
}

/// Built-in special transformers, with Zalgo tuned by `zalgo`.
pub fn builtin_transforms_with_zalgo(zalgo: ZalgoConfig) -> Vec<(&'static str, Transform)> {
    vec![
        ("Underline", Transform::Combining(UNDERLINE)),
        ("Strikethrough", Transform::Combining(STRIKETHROUGH)),
        ("Double Underline", Transform::Combining(DOUBLE_UNDERLINE)),
        ("Overline", Transform::Combining(OVERLINE)),
        (
            "Leet Speak",
            Transform::Substitute(CharacterMap::from_static(tables::LEET)),
        ),
        (
            "Reverse",
            Transform::Flip(CharacterMap::from_static(tables::FLIPPED)),
        ),
        (
            "Bubble Text",
            Transform::Substitute(CharacterMap::from_static(tables::BUBBLE)),
        ),
        ("Fullwidth", Transform::Fullwidth),
        ("Zalgo", Transform::Zalgo(zalgo)),
        (
            "Square",
            Transform::Substitute(CharacterMap::from_static(tables::SQUARE)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builtin(name: &str) -> Transform {
        builtin_transforms()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, t)| t)
            .unwrap_or_else(|| panic!("missing builtin transform {name}"))
    }

    fn run(name: &str, text: &str) -> String {
        builtin(name).apply(text, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_builtin_order() {
        let names: Vec<_> = builtin_transforms().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            [
                "Underline",
                "Strikethrough",
                "Double Underline",
                "Overline",
                "Leet Speak",
                "Reverse",
                "Bubble Text",
                "Fullwidth",
                "Zalgo",
                "Square",
            ]
        );
    }

    #[test]
    fn test_underline() {
        assert_eq!(run("Underline", "Test"), "T̲e̲s̲t̲");
    }

    #[test]
    fn test_leet_speak() {
        assert_eq!(run("Leet Speak", "LEET"), "|337");
        assert_eq!(run("Leet Speak", "xyz"), "xy2");
        assert_eq!(run("Leet Speak", "Bus"), "8(_)5");
    }

    #[test]
    fn test_reverse_looks_up_then_reverses() {
        assert_eq!(run("Reverse", "abc"), "ɔqɐ");
        assert_eq!(run("Reverse", "Hi!"), "!ıH");
    }

    #[test]
    fn test_flip_keeps_multi_codepoint_items_whole() {
        let map = CharacterMap::from_static(&[('a', "xy")]);
        assert_eq!(flip("ab", &map), "bxy");
    }

    #[test]
    fn test_bubble_covers_digits() {
        assert_eq!(run("Bubble Text", "Ab9"), "Ⓐⓑ⑨");
    }

    #[test]
    fn test_square_shares_case() {
        assert_eq!(run("Square", "aA"), "🄰🄰");
        assert_eq!(run("Square", "a1"), "🄰1");
    }

    #[test]
    fn test_fullwidth() {
        assert_eq!(run("Fullwidth", "A B"), "Ａ　Ｂ");
    }

    #[test]
    fn test_every_builtin_keeps_empty_empty() {
        for (name, transform) in builtin_transforms() {
            let out = transform.apply("", &mut StdRng::seed_from_u64(11));
            assert_eq!(out, "", "{name} changed empty input");
        }
    }

    #[test]
    fn test_only_zalgo_is_random() {
        for (name, transform) in builtin_transforms() {
            assert_eq!(transform.is_deterministic(), name != "Zalgo");
        }
    }

    #[test]
    fn test_zalgo_config_is_threaded_through() {
        let config = ZalgoConfig::new(0, 1.0);
        let zalgo = builtin_transforms_with_zalgo(config)
            .into_iter()
            .find(|(n, _)| *n == "Zalgo")
            .map(|(_, t)| t)
            .unwrap();
        assert_eq!(zalgo.apply("calm", &mut StdRng::seed_from_u64(1)), "calm");
    }

    #[test]
    fn test_custom_transform() {
        let t = Transform::custom(|s| s.chars().rev().collect());
        assert_eq!(t.apply("abc", &mut StdRng::seed_from_u64(0)), "cba");
        assert_eq!(format!("{t:?}"), "Custom(..)");
    }

    #[test]
    fn test_debug_combining() {
        assert_eq!(
            format!("{:?}", Transform::Combining(UNDERLINE)),
            "Combining(U+0332)"
        );
    }
}
