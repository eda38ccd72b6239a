use tracing::debug_span;

use crate::script::{Abugida, RomanScheme, BENGALI_VIRAMA, IMPLICIT_VOWEL};
use crate::table::IndicForms;
use crate::trie::PrefixTrie;
use crate::unicode::{
    is_bengali_consonant, is_bengali_native_consonant, is_devanagari_consonant, is_end_of_term,
    strip_combining, BENGALI_BA,
};

/// Bengali `ব` after a native consonant + virama is romanized as this letter
/// in both schemes.
const BENGALI_CONJUNCT_VA: &str = "v";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Other,
    Consonant,
    /// Bengali native consonant; may open a `্ব` conjunct.
    BaseConsonant,
    /// Bengali virama directly after a native consonant.
    Virama,
}

impl State {
    /// A bare consonant still owes its implicit vowel.
    fn is_consonant(self) -> bool {
        matches!(self, State::Consonant | State::BaseConsonant)
    }
}

/// Classify `c` given the previous state. Returns the new state and, for the
/// Bengali `্ব` conjunct, a fixed spelling that bypasses the table.
fn transition(source: Abugida, state: State, c: Option<char>) -> (State, Option<&'static str>) {
    let Some(c) = c else {
        return (State::Other, None);
    };
    match source {
        Abugida::Devanagari => {
            if is_devanagari_consonant(c) {
                (State::Consonant, None)
            } else {
                (State::Other, None)
            }
        }
        Abugida::Bengali => match state {
            State::Virama if c == BENGALI_BA => (State::Consonant, Some(BENGALI_CONJUNCT_VA)),
            State::BaseConsonant if c == BENGALI_VIRAMA => (State::Virama, None),
            _ if is_bengali_native_consonant(c) => (State::BaseConsonant, None),
            _ if is_bengali_consonant(c) => (State::Consonant, None),
            _ => (State::Other, None),
        },
    }
}

/// Romanize Devanagari or Bengali text, spelling out implicit vowels.
///
/// A bare consonant is followed by `a` when the next unit is another
/// consonant, a word boundary, or the end of input. The inserted vowel lands
/// between the previous consonant and the current unit.
pub fn indic_to_roman(
    trie: &PrefixTrie<IndicForms>,
    source: Abugida,
    scheme: RomanScheme,
    text: &str,
) -> String {
    let _span = debug_span!("indic_to_roman", ?source, ?scheme, len = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len() * 2);
    let mut state = State::Other;
    let mut i = 0;

    while i < chars.len() {
        let raw = strip_combining(chars[i]);
        let prev = state;
        let (next, fixed) = transition(source, state, raw);
        state = next;

        if prev.is_consonant() && (state.is_consonant() || raw.is_some_and(is_end_of_term)) {
            output.push(IMPLICIT_VOWEL);
        }

        if let Some(spelling) = fixed {
            output.push_str(spelling);
            i += 1;
            continue;
        }
        match trie.match_longest(&chars[i..]) {
            Some(m) => {
                output.push_str(m.value.roman(scheme));
                i += m.len;
            }
            None => {
                output.extend(raw);
                i += 1;
            }
        }
    }

    if state.is_consonant() {
        output.push(IMPLICIT_VOWEL);
    }
    output
}
