// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Failure of a loader entry point. Conversion itself reports
/// [`translit_core::TranslitError`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}
