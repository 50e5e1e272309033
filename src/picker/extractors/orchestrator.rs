// Extractor orchestrator - backend selection and fallback
//
// Auto mode tries the native binary first (no interpreter startup) and falls
// back to the Python module once. Explicit modes use exactly one backend.

use tracing::{info, warn};

use super::cli::CliInfoExtractor;
use super::python::PythonInfoExtractor;
use super::traits::{ExtractorConfig, ExtractorMode, InfoExtractor};
use crate::picker::errors::ExtractError;
use crate::picker::models::ExtractionResult;

/// Orchestrator over the CLI and Python backends
pub struct ExtractorOrchestrator {
    cli: CliInfoExtractor,
    python: PythonInfoExtractor,
}

impl ExtractorOrchestrator {
    pub fn new() -> Self {
        Self {
            cli: CliInfoExtractor::new(),
            python: PythonInfoExtractor::new(),
        }
    }

    /// Resolve a source with the configured backend mode
    pub async fn extract(
        &self,
        source: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, ExtractError> {
        match config.mode {
            ExtractorMode::Cli => self.cli.extract(source, config).await,
            ExtractorMode::Python => self.python.extract(source, config).await,
            ExtractorMode::Auto => self.extract_auto(source, config).await,
        }
    }

    async fn extract_auto(
        &self,
        source: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, ExtractError> {
        let primary: &dyn InfoExtractor = &self.cli;
        let fallback: &dyn InfoExtractor = &self.python;

        if !primary.is_available() && !fallback.is_available() {
            return Err(ExtractError::Unavailable);
        }

        if primary.is_available() {
            info!(backend = primary.name(), "extracting");
            match primary.extract(source, config).await {
                Ok(result) => return Ok(result),
                // a source the tool rejects will not fare better elsewhere
                Err(e @ ExtractError::InvalidSource(_)) => return Err(e),
                Err(e) => {
                    if !fallback.is_available() {
                        return Err(e);
                    }
                    warn!(backend = primary.name(), error = %e, "backend failed, trying fallback");
                }
            }
        }

        info!(backend = fallback.name(), "extracting");
        fallback.extract(source, config).await
    }
}

impl Default for ExtractorOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
