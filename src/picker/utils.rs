// Helper for running the external extraction tool

use std::process::Stdio;

use tokio::io::AsyncReadExt;
use tokio::process::Command as TokioCommand;
use tokio::time::{timeout, Duration};

use super::errors::ExtractError;

/// Run a command and collect its output, killing it after `timeout_secs`.
///
/// Stdout and stderr are drained concurrently with the wait so a chatty
/// child cannot deadlock on a full pipe.
pub async fn run_output_with_timeout(
    program: &str,
    args: Vec<String>,
    timeout_secs: u64,
) -> Result<std::process::Output, ExtractError> {
    let mut child = TokioCommand::new(program)
        .args(&args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ExtractError::Execution(format!("failed to start {}: {}", program, e)))?;

    let mut stdout_pipe = child
        .stdout
        .take()
        .ok_or_else(|| ExtractError::Execution(format!("no stdout pipe from {}", program)))?;
    let mut stderr_pipe = child
        .stderr
        .take()
        .ok_or_else(|| ExtractError::Execution(format!("no stderr pipe from {}", program)))?;

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stdout_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });
    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        stderr_pipe.read_to_end(&mut buf).await.map(|_| buf)
    });

    match timeout(Duration::from_secs(timeout_secs), child.wait()).await {
        Ok(status_res) => {
            let status = status_res
                .map_err(|e| ExtractError::Execution(format!("failed to wait for {}: {}", program, e)))?;
            let stdout = stdout_task
                .await
                .map_err(|e| ExtractError::Execution(format!("stdout task failed: {}", e)))?
                .map_err(|e| ExtractError::Execution(format!("failed to read stdout: {}", e)))?;
            let stderr = stderr_task
                .await
                .map_err(|e| ExtractError::Execution(format!("stderr task failed: {}", e)))?
                .map_err(|e| ExtractError::Execution(format!("failed to read stderr: {}", e)))?;
            Ok(std::process::Output {
                status,
                stdout,
                stderr,
            })
        }
        Err(_) => {
            let _ = child.kill().await;
            stdout_task.abort();
            stderr_task.abort();
            Err(ExtractError::Timeout(timeout_secs))
        }
    }
}
