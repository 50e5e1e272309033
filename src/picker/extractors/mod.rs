// Extractor collaborator - obtains the format catalog this crate selects from
//
// Two backends with the same contract:
// - CLI mode: native `yt-dlp` binary
// - Python mode: `python3 -m yt_dlp`
//
// The orchestrator picks a backend (Auto: binary first, module as fallback).
// Backends only produce metadata; no media bytes are fetched here.

mod cli;
mod orchestrator;
mod python;
mod traits;

pub use cli::CliInfoExtractor;
pub use orchestrator::ExtractorOrchestrator;
pub use python::PythonInfoExtractor;
pub use traits::{ExtractorConfig, ExtractorMode, InfoExtractor};
