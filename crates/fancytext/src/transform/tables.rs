//! Lookup tables used by the special transformers.

/// Letters to digit and symbol look-alikes. Both cases map to the same value.
pub(crate) const LEET: &[(char, &str)] = &[
    ('a', "4"), ('A', "4"), ('e', "3"), ('E', "3"), ('i', "1"), ('I', "1"),
    ('o', "0"), ('O', "0"), ('u', "(_)"), ('U', "(_)"), ('l', "|"), ('L', "|"),
    ('s', "5"), ('S', "5"), ('t', "7"), ('T', "7"), ('g', "9"), ('G', "9"),
    ('b', "8"), ('B', "8"), ('z', "2"), ('Z', "2"),
];

/// Upside-down look-alikes, applied before the text is reversed.
pub(crate) const FLIPPED: &[(char, &str)] = &[
    ('a', "ɐ"), ('b', "q"), ('c', "ɔ"), ('d', "p"), ('e', "ǝ"), ('f', "ɟ"), ('g', "ƃ"), ('h', "ɥ"),
    ('i', "ı"), ('j', "ɾ"), ('k', "ʞ"), ('l', "ן"), ('m', "ɯ"), ('n', "u"), ('p', "d"), ('q', "b"),
    ('r', "ɹ"), ('t', "ʇ"), ('u', "n"), ('v', "ʌ"), ('w', "ʍ"), ('y', "ʎ"), ('A', "∀"), ('B', "ᗺ"),
    ('C', "Ɔ"), ('D', "ᗡ"), ('E', "Ǝ"), ('F', "Ⅎ"), ('G', "⅁"), ('J', "ſ"), ('K', "⋊"), ('L', "⅂"),
    ('M', "W"), ('P', "Ԁ"), ('Q', "Ό"), ('R', "ᴚ"), ('T', "⊥"), ('U', "∩"), ('V', "Λ"), ('W', "M"),
    ('Y', "⅄"),
];

/// Circled letters and digits.
pub(crate) const BUBBLE: &[(char, &str)] = &[
    ('a', "ⓐ"), ('b', "ⓑ"), ('c', "ⓒ"), ('d', "ⓓ"), ('e', "ⓔ"), ('f', "ⓕ"), ('g', "ⓖ"), ('h', "ⓗ"),
    ('i', "ⓘ"), ('j', "ⓙ"), ('k', "ⓚ"), ('l', "ⓛ"), ('m', "ⓜ"), ('n', "ⓝ"), ('o', "ⓞ"), ('p', "ⓟ"),
    ('q', "ⓠ"), ('r', "ⓡ"), ('s', "ⓢ"), ('t', "ⓣ"), ('u', "ⓤ"), ('v', "ⓥ"), ('w', "ⓦ"), ('x', "ⓧ"),
    ('y', "ⓨ"), ('z', "ⓩ"), ('A', "Ⓐ"), ('B', "Ⓑ"), ('C', "Ⓒ"), ('D', "Ⓓ"), ('E', "Ⓔ"), ('F', "Ⓕ"),
    ('G', "Ⓖ"), ('H', "Ⓗ"), ('I', "Ⓘ"), ('J', "Ⓙ"), ('K', "Ⓚ"), ('L', "Ⓛ"), ('M', "Ⓜ"), ('N', "Ⓝ"),
    ('O', "Ⓞ"), ('P', "Ⓟ"), ('Q', "Ⓠ"), ('R', "Ⓡ"), ('S', "Ⓢ"), ('T', "Ⓣ"), ('U', "Ⓤ"), ('V', "Ⓥ"),
    ('W', "Ⓦ"), ('X', "Ⓧ"), ('Y', "Ⓨ"), ('Z', "Ⓩ"), ('0', "⓪"), ('1', "①"), ('2', "②"), ('3', "③"),
    ('4', "④"), ('5', "⑤"), ('6', "⑥"), ('7', "⑦"), ('8', "⑧"), ('9', "⑨"),
];

/// Squared Latin capitals. Lowercase shares the capital glyph.
pub(crate) const SQUARE: &[(char, &str)] = &[
    ('a', "🄰"), ('b', "🄱"), ('c', "🄲"), ('d', "🄳"), ('e', "🄴"), ('f', "🄵"), ('g', "🄶"), ('h', "🄷"),
    ('i', "🄸"), ('j', "🄹"), ('k', "🄺"), ('l', "🄻"), ('m', "🄼"), ('n', "🄽"), ('o', "🄾"), ('p', "🄿"),
    ('q', "🅀"), ('r', "🅁"), ('s', "🅂"), ('t', "🅃"), ('u', "🅄"), ('v', "🅅"), ('w', "🅆"), ('x', "🅇"),
    ('y', "🅈"), ('z', "🅉"), ('A', "🄰"), ('B', "🄱"), ('C', "🄲"), ('D', "🄳"), ('E', "🄴"), ('F', "🄵"),
    ('G', "🄶"), ('H', "🄷"), ('I', "🄸"), ('J', "🄹"), ('K', "🄺"), ('L', "🄻"), ('M', "🄼"), ('N', "🄽"),
    ('O', "🄾"), ('P', "🄿"), ('Q', "🅀"), ('R', "🅁"), ('S', "🅂"), ('T', "🅃"), ('U', "🅄"), ('V', "🅅"),
    ('W', "🅆"), ('X', "🅇"), ('Y', "🅈"), ('Z', "🅉"),
];
