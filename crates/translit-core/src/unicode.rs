//! Character-level classification for Devanagari, Bengali and the two
//! Roman schemes.
//!
//! Every set here is a fixed list of codepoints; no Unicode property lookups.

use crate::script::RomanScheme;

pub const DEVANAGARI_NUKTA: char = '\u{093C}';
pub const BENGALI_NUKTA: char = '\u{09BC}';
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';

/// Devanagari `ब`, the heuristic spelling of the ambiguous Bengali `ব`.
pub const DEVANAGARI_BA: char = 'ब';
pub const DEVANAGARI_VA: char = 'व';
pub const BENGALI_BA: char = 'ব';

pub fn is_nukta(c: char) -> bool {
    c == DEVANAGARI_NUKTA || c == BENGALI_NUKTA
}

/// Drop combining marks that only modify the preceding base letter.
///
/// Nukta-bearing letters are produced by the mapping tables' own multi-char
/// keys; a nukta that reaches the converters on its own is noise.
pub fn strip_combining(c: char) -> Option<char> {
    if is_nukta(c) || c == ZERO_WIDTH_NON_JOINER {
        None
    } else {
        Some(c)
    }
}

/// Precomposed nukta letter for `base` followed by a nukta.
///
/// Covers the letters whose precomposed codepoints are excluded from NFC
/// composition, so normalization alone leaves them decomposed.
pub fn precomposed_nukta(base: char) -> Option<char> {
    let composed = match base {
        'क' => '\u{0958}',
        'ख' => '\u{0959}',
        'ग' => '\u{095A}',
        'ज' => '\u{095B}',
        'ड' => '\u{095C}',
        'ढ' => '\u{095D}',
        'फ' => '\u{095E}',
        'य' => '\u{095F}',
        'ড' => '\u{09DC}',
        'ঢ' => '\u{09DD}',
        'য' => '\u{09DF}',
        _ => return None,
    };
    Some(composed)
}

/// Word boundaries and punctuation that close an implicit vowel.
pub fn is_end_of_term(c: char) -> bool {
    matches!(
        c,
        ' ' | '\n'
            | '\t'
            | '-'
            | '.'
            | ','
            | '?'
            | '!'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | 'ऽ'
            | 'ঽ'
    )
}

pub fn is_devanagari_consonant(c: char) -> bool {
    matches!(
        c,
        'क' | 'ख' | 'ग' | 'घ' | 'ङ'
            | 'च' | 'छ' | 'ज' | 'झ' | 'ञ'
            | 'ट' | 'ठ' | 'ड' | 'ढ' | 'ण'
            | 'त' | 'थ' | 'द' | 'ध' | 'न'
            | 'प' | 'फ' | 'ब' | 'भ' | 'म'
            | 'य' | 'र' | 'ल' | 'व'
            | 'श' | 'ष' | 'स' | 'ह'
            | 'ळ' | 'ऴ' | 'ऱ' | 'ऩ'
            | '\u{0958}' | '\u{0959}' | '\u{095A}' | '\u{095B}'
            | '\u{095C}' | '\u{095D}' | '\u{095E}' | '\u{095F}'
    )
}

/// Bengali consonants that can precede a `্ব` conjunct in which `ব` is
/// pronounced as the semivowel `v`.
///
/// After any other consonant `ব` keeps its plain `b` value.
pub fn is_bengali_native_consonant(c: char) -> bool {
    matches!(
        c,
        'ক' | 'খ' | 'গ' | 'ঘ'
            | 'চ' | 'ছ' | 'জ' | 'ঝ'
            | 'ট' | 'ঠ' | 'ড' | 'ঢ' | 'ণ'
            | 'ত' | 'থ' | 'দ' | 'ধ' | 'ন'
            | 'ল' | 'স' | 'শ' | 'ষ' | 'হ'
    )
}

pub fn is_bengali_consonant(c: char) -> bool {
    is_bengali_native_consonant(c)
        || matches!(
            c,
            'ঙ' | 'ঞ' | 'প' | 'ফ' | 'ব' | 'ভ' | 'ম' | 'য' | 'র'
                | '\u{09DC}' | '\u{09DD}' | '\u{09DF}'
        )
}

const IAST_VOWELS: &[&str] = &[
    "a", "ā", "i", "ī", "u", "ū", "ṛ", "ṝ", "ḷ", "ḹ", "e", "o", "ĕ", "ŏ", "æ", "ô", "m̐", "ṃ",
];

const IAST_CONSONANTS: &[&str] = &[
    "k", "g", "ṅ", "c", "j", "ñ", "ṭ", "ḍ", "ṇ", "t", "d", "n", "p", "b", "m", "y", "r", "l", "v",
    "ś", "ṣ", "s", "h", "l̤", "ḻ", "ṟ", "ṉ", "q", "ġ", "z", "r̤", "f", "ẏ",
];

const ITRANS_VOWELS: &[&str] = &[
    "a", "A", "i", "I", "u", "U", "R^", "L^", "e", "o", "^e", "^o", ".N", "M",
];

const ITRANS_CONSONANTS: &[&str] = &[
    "k", "g", "~N", "c", "C", "j", "~n", "T", "D", "N", "t", "d", "n", "p", "b", "m", "y", "r",
    "l", "v", "w", "s", "S", "h", "L", "z", "R", "^n", "q", "K", "G", ".D", "f", "Y",
];

/// True when `unit` spells the first one or two characters of `chars`.
fn unit_matches(chars: &[char], unit: &str) -> bool {
    let mut n = 0;
    for u in unit.chars() {
        if chars.get(n) != Some(&u) {
            return false;
        }
        n += 1;
    }
    n > 0
}

fn starts_with_any(chars: &[char], units: &[&str]) -> bool {
    units.iter().any(|unit| unit_matches(chars, unit))
}

/// Whether the remaining Roman input starts with a vowel unit.
///
/// Units are at most two characters long, so this is a one- and
/// two-character lookahead.
pub fn starts_with_roman_vowel(scheme: RomanScheme, chars: &[char]) -> bool {
    match scheme {
        RomanScheme::Iast => starts_with_any(chars, IAST_VOWELS),
        RomanScheme::Itrans => starts_with_any(chars, ITRANS_VOWELS),
    }
}

pub fn starts_with_roman_consonant(scheme: RomanScheme, chars: &[char]) -> bool {
    match scheme {
        RomanScheme::Iast => starts_with_any(chars, IAST_CONSONANTS),
        RomanScheme::Itrans => starts_with_any(chars, ITRANS_CONSONANTS),
    }
}
