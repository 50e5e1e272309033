// Error types for stream selection and extractor invocation

use thiserror::Error;

/// Errors from the selection core.
///
/// Only true exhaustion is fatal: a missing video or audio half in adaptive
/// mode is a soft absence the caller handles, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Combined-mode selection ran out of fallback candidates
    #[error("no playable formats in the catalog")]
    EmptyCatalog,
}

/// Errors from the extractor collaborator (integration glue, never raised by
/// the selection core itself).
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    /// The extraction tool is not installed or not on PATH
    #[error("extraction tool not found: {0}")]
    ToolNotFound(String),

    /// The source is not something the extractor can resolve
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// The tool did not finish within the configured timeout
    #[error("extraction timed out after {0}s")]
    Timeout(u64),

    /// The tool's JSON output did not parse
    #[error("failed to parse extractor output: {0}")]
    Parse(String),

    /// The tool ran and failed
    #[error("extractor failed: {0}")]
    Execution(String),

    /// No extractor backend is available on this machine
    #[error("no extractor backend available")]
    Unavailable,
}

impl ExtractError {
    /// Map raw tool stderr to a variant by substring heuristics.
    /// Classification is for reporting only; it never affects selection.
    pub fn classify(stderr: &str) -> Self {
        let text = stderr.trim();

        if text.contains("Unsupported URL") || text.contains("is not a valid URL") {
            return Self::InvalidSource(text.to_string());
        }

        if text.contains("command not found") || text.contains("No such file") {
            return Self::ToolNotFound(text.to_string());
        }

        Self::Execution(text.to_string())
    }
}
