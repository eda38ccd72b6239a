use tracing::{debug, debug_span};

use crate::script::{Abugida, BENGALI_VIRAMA};
use crate::table::IndicForms;
use crate::trie::PrefixTrie;
use crate::unicode::{
    is_bengali_native_consonant, strip_combining, BENGALI_BA, DEVANAGARI_BA, DEVANAGARI_VA,
};

/// Output of a Devanagari↔Bengali scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicConversion {
    pub text: String,
    /// Set when the output spells a Bengali `ব` as `ब` without context to
    /// decide between `b` and `v`.
    pub ambiguous: bool,
}

/// Tracks a Bengali native consonant followed by virama, the only context
/// in which `ব` is known to be the semivowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    BaseConsonant,
    Virama,
}

impl State {
    fn next(self, source: Abugida, c: char) -> Self {
        if source != Abugida::Bengali {
            return State::Start;
        }
        if is_bengali_native_consonant(c) {
            State::BaseConsonant
        } else if self == State::BaseConsonant && c == BENGALI_VIRAMA {
            State::Virama
        } else {
            State::Start
        }
    }
}

/// Convert between the two abugidas. `trie` is the table of `source`.
pub fn indic_to_indic(
    trie: &PrefixTrie<IndicForms>,
    source: Abugida,
    text: &str,
) -> IndicConversion {
    let _span = debug_span!("indic_to_indic", ?source, len = text.len()).entered();

    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    let mut state = State::Start;
    let mut ambiguous = false;
    let mut i = 0;

    while i < chars.len() {
        let raw = strip_combining(chars[i]);

        if state == State::Virama && raw == Some(BENGALI_BA) {
            output.push(DEVANAGARI_VA);
            state = State::Start;
            i += 1;
            continue;
        }
        state = raw.map_or(State::Start, |c| state.next(source, c));

        match trie.match_longest(&chars[i..]) {
            Some(m) => {
                let form = m.value.sibling.as_str();
                if source == Abugida::Bengali && is_ambiguous_ba(form) {
                    ambiguous = true;
                }
                output.push_str(form);
                i += m.len;
            }
            None => {
                output.extend(raw);
                i += 1;
            }
        }
    }

    if ambiguous {
        debug!(output = %output, "ambiguous ba in output");
    }
    IndicConversion {
        text: output,
        ambiguous,
    }
}

fn is_ambiguous_ba(form: &str) -> bool {
    let mut chars = form.chars();
    chars.next() == Some(DEVANAGARI_BA) && chars.next().is_none()
}
