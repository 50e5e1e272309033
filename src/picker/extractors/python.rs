// Python backend - uses `python3 -m yt_dlp`
//
// Works on machines where only the Python module is installed. The
// interpreter can be overridden through STREAM_PICKER_PYTHON.

use async_trait::async_trait;
use std::process::Command as StdCommand;
use tracing::debug;

use super::traits::{validate_source, ExtractorConfig, InfoExtractor};
use crate::picker::errors::ExtractError;
use crate::picker::models::ExtractionResult;
use crate::picker::utils::run_output_with_timeout;

/// Extractor backend driving the yt_dlp Python module
pub struct PythonInfoExtractor {
    python_cmd: String,
}

impl PythonInfoExtractor {
    pub fn new() -> Self {
        Self {
            python_cmd: Self::find_python(),
        }
    }

    /// Find a Python interpreter, honoring the environment override
    fn find_python() -> String {
        if let Ok(custom) = std::env::var("STREAM_PICKER_PYTHON") {
            return custom;
        }

        let candidates = ["python3", "/opt/homebrew/bin/python3", "/usr/local/bin/python3"];

        for cmd in candidates {
            if let Ok(output) = StdCommand::new(cmd).arg("--version").output() {
                if output.status.success() {
                    return cmd.to_string();
                }
            }
        }

        "python3".to_string()
    }

    fn has_ytdlp_module(&self) -> bool {
        match StdCommand::new(&self.python_cmd)
            .args(["-c", "import yt_dlp"])
            .output()
        {
            Ok(out) => out.status.success(),
            Err(_) => false,
        }
    }
}

impl Default for PythonInfoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InfoExtractor for PythonInfoExtractor {
    fn name(&self) -> &'static str {
        "python-yt-dlp"
    }

    fn is_available(&self) -> bool {
        self.has_ytdlp_module()
    }

    async fn extract(
        &self,
        source: &str,
        config: &ExtractorConfig,
    ) -> Result<ExtractionResult, ExtractError> {
        validate_source(source)?;
        if !self.is_available() {
            return Err(ExtractError::ToolNotFound("yt_dlp Python module".to_string()));
        }

        let mut args = vec!["-m".to_string(), "yt_dlp".to_string()];
        args.extend(config.tool_args(source));
        debug!(tool = %self.python_cmd, args = %args.join(" "), "running extraction");

        let output =
            run_output_with_timeout(&self.python_cmd, args, config.timeout_seconds).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractError::classify(&stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        ExtractionResult::from_json(&stdout).map_err(|e| ExtractError::Parse(e.to_string()))
    }
}
