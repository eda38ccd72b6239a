//! Property-based tests over randomly assembled words.

use std::sync::OnceLock;

use proptest::prelude::*;

use super::{test_tries, TestTries};
use crate::convert::{indic_to_indic, indic_to_roman, roman_to_indic};
use crate::script::{Abugida, RomanScheme};

fn tries() -> &'static TestTries {
    static TRIES: OnceLock<TestTries> = OnceLock::new();
    TRIES.get_or_init(test_tries)
}

const DEVANAGARI_CONSONANTS: &[char] = &[
    'क', 'ख', 'ग', 'घ', 'ङ', 'च', 'छ', 'ज', 'झ', 'ञ', 'ट', 'ठ', 'ड', 'ढ', 'ण', 'त', 'थ', 'द',
    'ध', 'न', 'प', 'फ', 'भ', 'म', 'य', 'र', 'ल', 'श', 'ष', 'स', 'ह',
];
const DEVANAGARI_VOWELS: &[char] = &['अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ए', 'ऐ', 'ओ', 'औ'];
const DEVANAGARI_SIGNS: &[char] = &['ा', 'ि', 'ी', 'ु', 'ू', 'ृ', 'े', 'ै', 'ो', 'ौ'];
const DEVANAGARI_MARKS: &[char] = &['ं', 'ः', 'ँ', '्', ' '];

// No unit here is a prefix of another unit followed by a consonant.
const IAST_CONSONANTS: &[&str] = &[
    "k", "g", "ṅ", "c", "j", "ñ", "ṭ", "ḍ", "ṇ", "t", "d", "n", "p", "b", "m", "y", "r", "l",
    "v", "ś", "ṣ", "s",
];
const IAST_VOWELS: &[&str] = &["a", "ā", "i", "ī", "u", "ū", "e", "ai", "o", "au"];
const ITRANS_CONSONANTS: &[&str] = &[
    "k", "g", "ch", "j", "T", "D", "N", "t", "d", "n", "p", "b", "m", "y", "r", "l", "v", "s",
    "Sh", "sh",
];
const ITRANS_VOWELS: &[&str] = &["a", "A", "i", "I", "u", "U", "e", "ai", "o", "au"];

/// Devanagari text without `ब`/`व`, whose Bengali spelling is ambiguous.
fn arb_unambiguous_devanagari() -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = [
        DEVANAGARI_CONSONANTS,
        DEVANAGARI_VOWELS,
        DEVANAGARI_SIGNS,
        DEVANAGARI_MARKS,
    ]
    .concat();
    prop::collection::vec(prop::sample::select(alphabet), 0..16)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Consonant (+ optional vowel sign) syllables ending in a bare consonant.
fn arb_devanagari_word_ending_in_consonant() -> impl Strategy<Value = String> {
    let syllable = (
        prop::sample::select(DEVANAGARI_CONSONANTS),
        prop::option::of(prop::sample::select(DEVANAGARI_SIGNS)),
    );
    (
        prop::collection::vec(syllable, 0..6),
        prop::sample::select(DEVANAGARI_CONSONANTS),
    )
        .prop_map(|(syllables, last)| {
            let mut word = String::new();
            for (consonant, sign) in syllables {
                word.push(consonant);
                word.extend(sign);
            }
            word.push(last);
            word
        })
}

fn arb_scheme() -> impl Strategy<Value = RomanScheme> {
    prop_oneof![Just(RomanScheme::Iast), Just(RomanScheme::Itrans)]
}

fn arb_target() -> impl Strategy<Value = Abugida> {
    prop_oneof![Just(Abugida::Devanagari), Just(Abugida::Bengali)]
}

fn roman_units(scheme: RomanScheme) -> (&'static [&'static str], &'static [&'static str]) {
    match scheme {
        RomanScheme::Iast => (IAST_CONSONANTS, IAST_VOWELS),
        RomanScheme::Itrans => (ITRANS_CONSONANTS, ITRANS_VOWELS),
    }
}

/// Roman word of consonant-vowel syllables closed by a consonant.
fn arb_roman_word(scheme: RomanScheme) -> impl Strategy<Value = String> {
    let (consonants, vowels) = roman_units(scheme);
    let syllable = (
        prop::sample::select(consonants),
        prop::sample::select(vowels),
    );
    (
        prop::collection::vec(syllable, 0..6),
        prop::sample::select(consonants),
    )
        .prop_map(|(syllables, last)| {
            let mut word: String = syllables.iter().map(|(c, v)| format!("{c}{v}")).collect();
            word.push_str(last);
            word
        })
}

fn trie(scheme: RomanScheme) -> &'static crate::trie::PrefixTrie<crate::table::RomanForms> {
    match scheme {
        RomanScheme::Iast => &tries().iast,
        RomanScheme::Itrans => &tries().itrans,
    }
}

proptest! {
    #[test]
    fn devanagari_bengali_round_trip(text in arb_unambiguous_devanagari()) {
        let t = tries();
        let bengali = indic_to_indic(&t.devanagari, Abugida::Devanagari, &text);
        let back = indic_to_indic(&t.bengali, Abugida::Bengali, &bengali.text);
        prop_assert!(!back.ambiguous);
        prop_assert_eq!(back.text, text);
    }

    #[test]
    fn virama_only_drops_final_schwa(
        word in arb_devanagari_word_ending_in_consonant(),
        scheme in arb_scheme(),
    ) {
        let t = &tries().devanagari;
        let bare = indic_to_roman(t, Abugida::Devanagari, scheme, &word);
        let halant = indic_to_roman(t, Abugida::Devanagari, scheme, &format!("{word}्"));
        prop_assert_eq!(bare, format!("{halant}a"));
    }

    #[test]
    fn final_consonant_gets_one_virama(
        (scheme, word) in arb_scheme().prop_flat_map(|s| (Just(s), arb_roman_word(s))),
        target in arb_target(),
    ) {
        let out = roman_to_indic(trie(scheme), scheme, target, &word);
        let virama = target.virama();
        prop_assert!(out.ends_with(virama), "{word} -> {out}");
        let doubled: String = [virama, virama].iter().collect();
        prop_assert!(!out.ends_with(&doubled), "{word} -> {out}");
    }

    #[test]
    fn adjacent_consonants_are_joined(
        (scheme, first, second) in arb_scheme().prop_flat_map(|s| {
            let (consonants, _) = roman_units(s);
            (
                Just(s),
                prop::sample::select(consonants),
                prop::sample::select(consonants),
            )
        }),
        target in arb_target(),
    ) {
        let t = trie(scheme);
        let joined = roman_to_indic(t, scheme, target, &format!("{first}{second}a"));
        let expected = format!(
            "{}{}",
            roman_to_indic(t, scheme, target, first),
            roman_to_indic(t, scheme, target, &format!("{second}a")),
        );
        prop_assert_eq!(joined, expected);
    }
}
