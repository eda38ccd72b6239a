//! Correction of the Bengali→Devanagari `ब`/`व` ambiguity.
//!
//! The heuristic converter spells every unresolved `ব` as `ब`. A
//! [`CorrectionOracle`] proposes a corrected sentence, and the resolver
//! accepts it only when it stays within one edit per ambiguous letter of
//! the heuristic output. Every failure falls back to the heuristic output.

mod distance;
mod normalize;
mod worker;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, debug_span, warn};

use crate::settings::ResolverSettings;
use crate::unicode::DEVANAGARI_BA;

pub use distance::levenshtein;
pub use normalize::normalize_candidate;
use worker::OracleWorker;

/// Marker after which an echoing oracle writes its answer.
pub const PROMPT_ANSWER_MARKER: &str = "Correct transliteration:";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("oracle did not answer within {0:?}")]
    Timeout(Duration),
    #[error("oracle worker is not running")]
    Disconnected,
    #[error("oracle panicked")]
    Panicked,
    #[error("oracle failed: {0}")]
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("failed to spawn oracle worker: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("correction oracle already initialized")]
    AlreadyInitialized,
}

/// Proposes a corrected Devanagari spelling for a Bengali sentence.
///
/// Called from a dedicated worker thread, one request at a time.
pub trait CorrectionOracle: Send + Sync {
    fn correct(&self, original: &str, heuristic: &str) -> Result<String, OracleError>;
}

impl<F> CorrectionOracle for F
where
    F: Fn(&str, &str) -> Result<String, OracleError> + Send + Sync,
{
    fn correct(&self, original: &str, heuristic: &str) -> Result<String, OracleError> {
        self(original, heuristic)
    }
}

pub struct AmbiguityResolver {
    worker: OracleWorker,
    timeout: Duration,
}

impl AmbiguityResolver {
    pub fn new(
        oracle: Arc<dyn CorrectionOracle>,
        settings: &ResolverSettings,
    ) -> Result<Self, ResolverError> {
        Ok(Self {
            worker: OracleWorker::spawn(oracle)?,
            timeout: settings.timeout(),
        })
    }

    /// Return the oracle's correction of `heuristic` if it passes the
    /// distance guard, else `heuristic` unchanged.
    pub fn resolve(&self, original: &str, heuristic: &str) -> String {
        let _span = debug_span!("resolve", len = heuristic.len()).entered();

        let raw = match self.worker.call(original, heuristic, self.timeout) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "correction oracle failed; keeping heuristic output");
                return heuristic.to_string();
            }
        };
        match accept_candidate(strip_prompt_echo(&raw), heuristic) {
            Some(candidate) => candidate,
            None => {
                debug!(candidate = %raw, "oracle candidate rejected");
                heuristic.to_string()
            }
        }
    }
}

/// Normalize `candidate` and accept it if its edit distance to `heuristic`
/// is at most the number of `ब` in `heuristic`.
pub fn accept_candidate(candidate: &str, heuristic: &str) -> Option<String> {
    let candidate = normalize_candidate(candidate);
    let budget = heuristic.chars().filter(|&c| c == DEVANAGARI_BA).count();
    let distance = levenshtein(&candidate, heuristic);
    debug!(distance, budget, "oracle candidate distance");
    (distance <= budget).then_some(candidate)
}

/// The instruction sent to a sequence-to-sequence corrector.
pub fn build_prompt(original: &str, heuristic: &str) -> String {
    format!(
        "Task: Correct the transliteration of the following Bengali sentence. \
         The partial transliteration may contain misspellings.\n\
         Bengali: {original}\n\
         Partial transliteration: {heuristic}\n\
         {PROMPT_ANSWER_MARKER}\n"
    )
}

/// Drop everything up to and including the answer marker and the one
/// separator character after it. Text without the marker is returned as is.
pub fn strip_prompt_echo(output: &str) -> &str {
    match output.find(PROMPT_ANSWER_MARKER) {
        Some(pos) => {
            let mut rest = output[pos + PROMPT_ANSWER_MARKER.len()..].chars();
            rest.next();
            rest.as_str()
        }
        None => output,
    }
}
