//! Transliteration between Devanagari, Bengali, IAST and ITRANS.
//!
//! ```
//! use salid_translit::transliterate;
//!
//! assert_eq!(transliterate("devanagari", "bengali", "विश्व").unwrap(), "বিশ্ব");
//! assert_eq!(transliterate("itrans", "devanagari", "vishva").unwrap(), "विश्व");
//! ```

pub mod api;
mod trace_init;

pub use api::{
    engine_version, oracle_set, settings_default_config, settings_load_config, tables_default,
    tables_load_dir, trace_init, transliterate, ApiError,
};
#[cfg(feature = "neural")]
pub use api::oracle_load_model;
pub use translit_core::resolver::{CorrectionOracle, OracleError};
pub use translit_core::{Abugida, RomanScheme, Script, TranslitError, Transliterator};
