//! Randomized combining-mark stacking.
//!
//! Every non-space character receives up to `3 * intensity` marks. Each
//! round rolls the three pools independently, in the order above, below,
//! through, and picks one mark uniformly from every pool that hits.
//! Which characters get decorated and where the marks come from is fixed;
//! the marks themselves depend on the random source.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Marks that stack above the base character.
pub const MARKS_ABOVE: &[char] = &[
    '\u{030d}', '\u{030e}', '\u{0304}', '\u{0305}', '\u{033f}', '\u{0311}', '\u{0306}', '\u{0310}',
    '\u{0352}', '\u{0357}', '\u{0351}', '\u{0307}', '\u{0308}', '\u{030a}', '\u{0342}', '\u{0313}',
    '\u{0344}', '\u{034a}', '\u{034b}', '\u{034c}', '\u{0303}', '\u{0302}', '\u{030c}', '\u{0350}',
    '\u{0300}', '\u{0301}', '\u{030b}', '\u{030f}', '\u{0312}', '\u{0313}', '\u{0314}', '\u{033d}',
    '\u{0309}', '\u{0363}', '\u{0364}', '\u{0365}', '\u{0366}', '\u{0367}', '\u{0368}', '\u{0369}',
    '\u{036a}', '\u{036b}', '\u{036c}', '\u{036d}', '\u{036e}', '\u{036f}', '\u{033e}', '\u{035b}',
    '\u{0346}', '\u{031a}',
];

/// Marks that hang below the base character.
pub const MARKS_BELOW: &[char] = &[
    '\u{0316}', '\u{0317}', '\u{0318}', '\u{0319}', '\u{031c}', '\u{031d}', '\u{031e}', '\u{031f}',
    '\u{0320}', '\u{0324}', '\u{0325}', '\u{0326}', '\u{0329}', '\u{032a}', '\u{032b}', '\u{032c}',
    '\u{032d}', '\u{032e}', '\u{032f}', '\u{0330}', '\u{0331}', '\u{0332}', '\u{0333}', '\u{0339}',
    '\u{033a}', '\u{033b}', '\u{033c}', '\u{0345}', '\u{0347}', '\u{0348}', '\u{0349}', '\u{034d}',
    '\u{034e}', '\u{0353}', '\u{0354}', '\u{0355}', '\u{0356}', '\u{0359}', '\u{035a}', '\u{0323}',
];

/// Marks that overlay or cut through the base character.
pub const MARKS_THROUGH: &[char] = &[
    '\u{0315}', '\u{031b}', '\u{0300}', '\u{0301}', '\u{0358}', '\u{0321}', '\u{0322}', '\u{0327}',
    '\u{0328}', '\u{0334}', '\u{0335}', '\u{0336}', '\u{035c}', '\u{035d}', '\u{035e}', '\u{035f}',
    '\u{0360}', '\u{0362}', '\u{0338}', '\u{0337}', '\u{0361}',
];

/// Tuning for [`zalgo`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZalgoConfig {
    /// Number of rounds per character.
    pub intensity: u8,
    /// Chance that a pool contributes a mark in a given round.
    pub probability: f64,
}

impl ZalgoConfig {
    /// Creates a config, clamping `probability` into `[0, 1]`.
    pub fn new(intensity: u8, probability: f64) -> Self {
        Self {
            intensity,
            probability,
        }
        .normalized()
    }

    /// Upper bound on marks added to one character.
    pub fn max_marks_per_char(&self) -> usize {
        usize::from(self.intensity) * 3
    }

    fn normalized(self) -> Self {
        let probability = if self.probability.is_nan() {
            0.0
        } else {
            self.probability.clamp(0.0, 1.0)
        };
        Self {
            intensity: self.intensity,
            probability,
        }
    }
}

impl Default for ZalgoConfig {
    fn default() -> Self {
        Self {
            intensity: 3,
            probability: 0.5,
        }
    }
}

/// Returns true if `c` belongs to one of the three mark pools.
pub fn is_zalgo_mark(c: char) -> bool {
    MARKS_ABOVE.contains(&c) || MARKS_BELOW.contains(&c) || MARKS_THROUGH.contains(&c)
}

/// Decorates every character except U+0020 with random combining marks.
pub fn zalgo<R: Rng>(text: &str, config: &ZalgoConfig, rng: &mut R) -> String {
    let config = config.normalized();
    let mut out = String::with_capacity(text.len() * (1 + config.max_marks_per_char()));

    for c in text.chars() {
        out.push(c);
        if c == ' ' {
            continue;
        }
        for _ in 0..config.intensity {
            for pool in [MARKS_ABOVE, MARKS_BELOW, MARKS_THROUGH] {
                if rng.random_bool(config.probability) {
                    out.push(pool[rng.random_range(0..pool.len())]);
                }
            }
        }
    }

    out
}
