use crate::script::Script;

/// Errors surfaced by the dispatch façade.
///
/// Unmatched characters inside a converter are never errors; they pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslitError {
    #[error("unsupported script: {0:?}")]
    UnsupportedScript(String),

    #[error("invalid combination: {from} -> {to}")]
    InvalidCombination { from: Script, to: Script },
}
