//! Transliteration between Devanagari, Bengali, IAST and ITRANS.
//!
//! A longest-prefix trie over per-script mapping tables drives three
//! converter families; Bengali→Devanagari output can additionally be
//! corrected by an [`resolver::CorrectionOracle`].

pub mod convert;
pub mod engine;
pub mod error;
#[cfg(feature = "neural")]
pub mod neural;
pub mod resolver;
pub mod script;
pub mod settings;
pub mod table;
#[cfg(test)]
pub(crate) mod testutil;
pub mod trie;
pub mod unicode;

pub use engine::Transliterator;
pub use error::TranslitError;
pub use script::{Abugida, RomanScheme, Script};
