use tracing::debug_span;

use crate::script::{Abugida, RomanScheme};
use crate::table::RomanForms;
use crate::trie::PrefixTrie;
use crate::unicode::{starts_with_roman_consonant, starts_with_roman_vowel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Other,
    /// Vowel opening a syllable: written with its independent letter.
    Vowel,
    /// Vowel after a consonant or another vowel: written as a vowel sign.
    VowelSign,
    Consonant,
}

impl State {
    fn next(self, scheme: RomanScheme, rest: &[char]) -> Self {
        if starts_with_roman_vowel(scheme, rest) {
            if self == State::Other {
                State::Vowel
            } else {
                State::VowelSign
            }
        } else if starts_with_roman_consonant(scheme, rest) {
            State::Consonant
        } else {
            State::Other
        }
    }
}

/// Convert IAST or ITRANS into Devanagari or Bengali.
///
/// Roman text spells every vowel, so two consonant units in a row are joined
/// with the target's virama, and a consonant at the very end gets one too.
pub fn roman_to_indic(
    trie: &PrefixTrie<RomanForms>,
    scheme: RomanScheme,
    target: Abugida,
    text: &str,
) -> String {
    let _span = debug_span!("roman_to_indic", ?scheme, ?target, len = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let virama = target.virama();
    let mut output = String::with_capacity(text.len() * 3);
    let mut state = State::Other;
    let mut i = 0;

    while i < chars.len() {
        let rest = &chars[i..];
        let prev = state;
        state = state.next(scheme, rest);

        match trie.match_longest(rest) {
            Some(m) => {
                let forms = m.value.target(target);
                if prev == State::Consonant && state == State::Consonant {
                    output.push(virama);
                    output.push_str(&forms.standalone);
                } else if state == State::Vowel {
                    output.push_str(&forms.standalone);
                } else {
                    output.push_str(&forms.attached);
                }
                i += m.len;
            }
            None => {
                output.push(chars[i]);
                i += 1;
            }
        }
    }

    if state == State::Consonant {
        output.push(virama);
    }
    output
}
