//! Process-level entry points: configuration loaders and the global
//! transliterator.
//!
//! Loaders must run before the first call to [`transliterate`]; later calls
//! fail with `InvalidData` ("already initialized").

mod types;

pub use types::ApiError;

use std::path::Path;
use std::sync::Arc;

use translit_core::resolver::CorrectionOracle;
use translit_core::table::{
    TableError, TableSet, DEFAULT_BENGALI_JSON, DEFAULT_DEVANAGARI_JSON, DEFAULT_IAST_JSON,
    DEFAULT_ITRANS_JSON,
};
use translit_core::{Script, TranslitError, Transliterator};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

pub fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert `text` from the `source` script to the `target` script.
///
/// ```
/// let out = salid_translit::transliterate("iast", "bengali", "viśva").unwrap();
/// assert_eq!(out, "বিশ্ব");
/// ```
pub fn transliterate(source: &str, target: &str, text: &str) -> Result<String, TranslitError> {
    Transliterator::global().transliterate(source, target, text)
}

/// Replace the embedded mapping tables with the four JSON files in `dir`.
pub fn tables_load_dir(dir: &Path) -> Result<(), ApiError> {
    let tables = TableSet::load_dir(dir).map_err(|e| {
        let msg = e.to_string();
        match e {
            TableError::Io { .. } => ApiError::Io { msg },
            _ => ApiError::InvalidData { msg },
        }
    })?;
    Transliterator::init_tables(tables).map_err(|e| ApiError::InvalidData { msg: e.to_string() })
}

/// The embedded JSON table for `script`.
pub fn tables_default(script: &str) -> Result<&'static str, TranslitError> {
    let json = match script.parse::<Script>()? {
        Script::Devanagari => DEFAULT_DEVANAGARI_JSON,
        Script::Bengali => DEFAULT_BENGALI_JSON,
        Script::Iast => DEFAULT_IAST_JSON,
        Script::Itrans => DEFAULT_ITRANS_JSON,
    };
    Ok(json)
}

pub fn settings_load_config(path: &Path) -> Result<(), ApiError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApiError::Io {
        msg: format!("{}: {e}", path.display()),
    })?;
    translit_core::settings::init_custom(content)
        .map_err(|e| ApiError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

pub fn settings_default_config() -> String {
    translit_core::settings::default_toml().to_string()
}

/// Use `oracle` to correct ambiguous Bengali→Devanagari output.
pub fn oracle_set(oracle: Arc<dyn CorrectionOracle>) -> Result<(), ApiError> {
    Transliterator::init_oracle(oracle).map_err(|e| ApiError::InvalidData { msg: e.to_string() })
}

/// Load the mT5 corrector from `model_dir` and install it as the oracle.
#[cfg(feature = "neural")]
pub fn oracle_load_model(model_dir: &Path) -> Result<(), ApiError> {
    let neural = &translit_core::settings::settings().neural;
    let oracle = translit_core::neural::Mt5Oracle::open(model_dir, neural)
        .map_err(|e| ApiError::Internal {
            msg: format!("failed to load model from {}: {e}", model_dir.display()),
        })?;
    oracle_set(Arc::new(oracle))
}

pub fn trace_init(log_dir: &Path) {
    crate::trace_init::init_tracing(log_dir);
}
