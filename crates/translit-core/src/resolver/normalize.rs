use unicode_normalization::UnicodeNormalization;

use crate::unicode::{is_nukta, precomposed_nukta};

/// Bring an oracle candidate into the same form the mapping tables produce.
///
/// NFC first; nukta letters excluded from composition come out decomposed,
/// so a base letter followed by a nukta is folded back into its precomposed
/// codepoint. Any nukta left over is dropped.
pub fn normalize_candidate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.nfc().peekable();

    while let Some(c) = chars.next() {
        if is_nukta(c) {
            continue;
        }
        if chars.peek().copied().is_some_and(is_nukta) {
            if let Some(composed) = precomposed_nukta(c) {
                out.push(composed);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}
