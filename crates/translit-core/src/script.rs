//! Script names and per-script constants.

use std::fmt;
use std::str::FromStr;

use crate::error::TranslitError;

/// One of the four supported writing systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Devanagari,
    Bengali,
    Iast,
    Itrans,
}

/// Abugida scripts: consonant letters carry an implicit vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abugida {
    Devanagari,
    Bengali,
}

/// Alphabetic Roman schemes: every sound is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RomanScheme {
    Iast,
    Itrans,
}

pub const DEVANAGARI_VIRAMA: char = '\u{094D}';
pub const BENGALI_VIRAMA: char = '\u{09CD}';

/// Vowel letter spelled after a bare consonant in both Roman schemes.
pub const IMPLICIT_VOWEL: char = 'a';

impl Script {
    pub const ALL: [Script; 4] = [
        Script::Bengali,
        Script::Devanagari,
        Script::Iast,
        Script::Itrans,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Script::Devanagari => "devanagari",
            Script::Bengali => "bengali",
            Script::Iast => "iast",
            Script::Itrans => "itrans",
        }
    }

    pub fn is_roman(self) -> bool {
        self.as_roman().is_some()
    }

    pub fn as_abugida(self) -> Option<Abugida> {
        match self {
            Script::Devanagari => Some(Abugida::Devanagari),
            Script::Bengali => Some(Abugida::Bengali),
            Script::Iast | Script::Itrans => None,
        }
    }

    pub fn as_roman(self) -> Option<RomanScheme> {
        match self {
            Script::Iast => Some(RomanScheme::Iast),
            Script::Itrans => Some(RomanScheme::Itrans),
            Script::Devanagari | Script::Bengali => None,
        }
    }
}

impl Abugida {
    pub fn virama(self) -> char {
        match self {
            Abugida::Devanagari => DEVANAGARI_VIRAMA,
            Abugida::Bengali => BENGALI_VIRAMA,
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Script {
    type Err = TranslitError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Script::ALL
            .into_iter()
            .find(|script| script.name() == name)
            .ok_or(TranslitError::UnsupportedScript(name))
    }
}
