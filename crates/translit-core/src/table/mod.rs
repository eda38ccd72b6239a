//! Mapping tables: one JSON object per script, key = source character
//! sequence, value = fixed-arity representation array.
//!
//! Loading is kept apart from matching: this module only parses and
//! validates, and [`crate::trie::PrefixTrie::from_table`] consumes the result.

mod forms;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::script::Script;

pub use forms::{IndicForms, RomanForms, ScriptForms};

pub const DEFAULT_DEVANAGARI_JSON: &str = include_str!("devanagari.json");
pub const DEFAULT_BENGALI_JSON: &str = include_str!("bengali.json");
pub const DEFAULT_IAST_JSON: &str = include_str!("iast.json");
pub const DEFAULT_ITRANS_JSON: &str = include_str!("itrans.json");

/// Parsed table, sorted by key.
pub type MappingTable<V> = BTreeMap<String, V>;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error reading {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("{script} table: JSON parse error: {source}")]
    Json {
        script: Script,
        source: serde_json::Error,
    },

    #[error("{0} table is empty")]
    Empty(Script),

    #[error("{0} table contains an empty key")]
    EmptyKey(Script),

    #[error("mapping tables already initialized")]
    AlreadyInitialized,
}

/// The four parsed tables the engine is built from.
#[derive(Debug, Clone)]
pub struct TableSet {
    pub devanagari: MappingTable<IndicForms>,
    pub bengali: MappingTable<IndicForms>,
    pub iast: MappingTable<RomanForms>,
    pub itrans: MappingTable<RomanForms>,
}

impl TableSet {
    /// Tables compiled into the crate.
    pub fn embedded() -> Result<Self, TableError> {
        Self::from_json(
            DEFAULT_DEVANAGARI_JSON,
            DEFAULT_BENGALI_JSON,
            DEFAULT_IAST_JSON,
            DEFAULT_ITRANS_JSON,
        )
    }

    pub fn from_json(
        devanagari: &str,
        bengali: &str,
        iast: &str,
        itrans: &str,
    ) -> Result<Self, TableError> {
        Ok(Self {
            devanagari: parse_table(Script::Devanagari, devanagari)?,
            bengali: parse_table(Script::Bengali, bengali)?,
            iast: parse_table(Script::Iast, iast)?,
            itrans: parse_table(Script::Itrans, itrans)?,
        })
    }

    /// Read `devanagari.json`, `bengali.json`, `iast.json` and `itrans.json`
    /// from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, TableError> {
        let read = |script: Script| {
            let path = dir.join(format!("{}.json", script.name()));
            fs::read_to_string(&path).map_err(|source| TableError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        let set = Self::from_json(
            &read(Script::Devanagari)?,
            &read(Script::Bengali)?,
            &read(Script::Iast)?,
            &read(Script::Itrans)?,
        )?;
        info!(
            dir = %dir.display(),
            devanagari = set.devanagari.len(),
            bengali = set.bengali.len(),
            iast = set.iast.len(),
            itrans = set.itrans.len(),
            "loaded mapping tables"
        );
        Ok(set)
    }
}

/// Parse one script's JSON object into a sorted table.
pub fn parse_table<V: DeserializeOwned>(
    script: Script,
    json: &str,
) -> Result<MappingTable<V>, TableError> {
    let table: MappingTable<V> =
        serde_json::from_str(json).map_err(|source| TableError::Json { script, source })?;

    if table.is_empty() {
        return Err(TableError::Empty(script));
    }
    if table.contains_key("") {
        return Err(TableError::EmptyKey(script));
    }

    Ok(table)
}
