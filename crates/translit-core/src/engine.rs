//! Dispatch from a (source, target) script pair to the matching converter.

use std::sync::{Arc, OnceLock};

use tracing::{debug_span, warn};

use crate::convert::{indic_to_indic, indic_to_roman, roman_to_indic};
use crate::error::TranslitError;
use crate::resolver::{AmbiguityResolver, CorrectionOracle, ResolverError};
use crate::script::{Abugida, RomanScheme, Script};
use crate::settings::{settings, ResolverSettings};
use crate::table::{IndicForms, RomanForms, TableError, TableSet};
use crate::trie::PrefixTrie;

static CUSTOM_TABLES: OnceLock<TableSet> = OnceLock::new();
static CUSTOM_ORACLE: OnceLock<Arc<dyn CorrectionOracle>> = OnceLock::new();

/// One prefix trie per script plus the optional ambiguity resolver.
///
/// Immutable after construction and safe to share between threads.
pub struct Transliterator {
    devanagari: PrefixTrie<IndicForms>,
    bengali: PrefixTrie<IndicForms>,
    iast: PrefixTrie<RomanForms>,
    itrans: PrefixTrie<RomanForms>,
    resolver: Option<AmbiguityResolver>,
}

impl Transliterator {
    pub fn new(tables: TableSet) -> Self {
        Self {
            devanagari: PrefixTrie::from_table(tables.devanagari),
            bengali: PrefixTrie::from_table(tables.bengali),
            iast: PrefixTrie::from_table(tables.iast),
            itrans: PrefixTrie::from_table(tables.itrans),
            resolver: None,
        }
    }

    /// Route ambiguous Bengali→Devanagari output through `oracle`.
    pub fn with_oracle(
        mut self,
        oracle: Arc<dyn CorrectionOracle>,
        settings: &ResolverSettings,
    ) -> Result<Self, ResolverError> {
        self.resolver = Some(AmbiguityResolver::new(oracle, settings)?);
        Ok(self)
    }

    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Set custom tables before the first `global()` call.
    pub fn init_tables(tables: TableSet) -> Result<(), TableError> {
        CUSTOM_TABLES
            .set(tables)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Set the correction oracle before the first `global()` call.
    pub fn init_oracle(oracle: Arc<dyn CorrectionOracle>) -> Result<(), ResolverError> {
        CUSTOM_ORACLE
            .set(oracle)
            .map_err(|_| ResolverError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Transliterator {
        static INSTANCE: OnceLock<Transliterator> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let tables = match CUSTOM_TABLES.get() {
                Some(tables) => tables.clone(),
                None => TableSet::embedded().expect("embedded tables must be valid"),
            };
            let engine = Transliterator::new(tables);
            let Some(oracle) = CUSTOM_ORACLE.get() else {
                return engine;
            };
            let resolver = AmbiguityResolver::new(Arc::clone(oracle), &settings().resolver);
            match resolver {
                Ok(resolver) => Transliterator {
                    resolver: Some(resolver),
                    ..engine
                },
                Err(e) => {
                    warn!(error = %e, "correction oracle unavailable; using heuristic output");
                    engine
                }
            }
        })
    }

    /// Convert `text` between two scripts given by name.
    ///
    /// Names are case-insensitive: `devanagari`, `bengali`, `iast`, `itrans`.
    pub fn transliterate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, TranslitError> {
        let from: Script = source.parse()?;
        let to: Script = target.parse()?;
        self.convert(from, to, text)
    }

    /// Convert `text` from `from` to `to`.
    ///
    /// Every pair of distinct scripts is supported except Roman to Roman.
    pub fn convert(&self, from: Script, to: Script, text: &str) -> Result<String, TranslitError> {
        let _span = debug_span!("convert", %from, %to).entered();
        let invalid = || TranslitError::InvalidCombination { from, to };
        if from == to {
            return Err(invalid());
        }

        match (from.as_abugida(), to.as_abugida()) {
            (Some(Abugida::Bengali), Some(Abugida::Devanagari)) => {
                Ok(self.bengali_to_devanagari(text))
            }
            (Some(source), Some(_)) => {
                Ok(indic_to_indic(self.indic_trie(source), source, text).text)
            }
            (Some(source), None) => {
                let scheme = to.as_roman().ok_or_else(invalid)?;
                Ok(indic_to_roman(self.indic_trie(source), source, scheme, text))
            }
            (None, Some(target)) => {
                let scheme = from.as_roman().ok_or_else(invalid)?;
                Ok(roman_to_indic(self.roman_trie(scheme), scheme, target, text))
            }
            (None, None) => Err(invalid()),
        }
    }

    fn bengali_to_devanagari(&self, text: &str) -> String {
        let conversion = indic_to_indic(&self.bengali, Abugida::Bengali, text);
        match &self.resolver {
            Some(resolver) if conversion.ambiguous => resolver.resolve(text, &conversion.text),
            _ => conversion.text,
        }
    }

    fn indic_trie(&self, script: Abugida) -> &PrefixTrie<IndicForms> {
        match script {
            Abugida::Devanagari => &self.devanagari,
            Abugida::Bengali => &self.bengali,
        }
    }

    fn roman_trie(&self, scheme: RomanScheme) -> &PrefixTrie<RomanForms> {
        match scheme {
            RomanScheme::Iast => &self.iast,
            RomanScheme::Itrans => &self.itrans,
        }
    }
}
