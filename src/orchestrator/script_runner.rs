use super::generator::{GenerationRequest, Generator};
use crate::error::GenerationError;
use crate::models::GeneratorConfig;
use async_trait::async_trait;
use indicatif::{ProgressBar as IndicatifProgressBar, ProgressStyle};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::debug;

/// Generator that pipes prompts to a local LLM CLI (e.g. `claude -p`)
#[derive(Debug, Clone)]
pub struct CliGenerator {
    command: String,
    args: Vec<String>,
    show_progress: bool,
}

impl CliGenerator {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            show_progress: false,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone()).with_progress(config.show_progress)
    }

    /// Show a spinner on the terminal while the command runs
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// CLIs take a single stdin prompt, so the system instruction leads it
    fn compose_stdin(request: &GenerationRequest) -> String {
        format!("{}\n\n{}", request.system, request.prompt)
    }

    async fn run_command(&self, input: &str) -> Result<String, GenerationError> {
        let mut cmd = Command::new(&self.command);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let progress = if self.show_progress {
            let pb = IndicatifProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
                pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
            }
            pb.set_message(format!("Running {}...", self.command));
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let mut child = cmd.spawn().map_err(|e| {
            GenerationError::Process(format!(
                "Command '{}' not found. Please ensure it is installed and in your PATH ({})",
                self.command, e
            ))
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input.as_bytes())
                .await
                .map_err(|e| GenerationError::Process(format!("Failed to write to stdin: {}", e)))?;
            stdin
                .flush()
                .await
                .map_err(|e| GenerationError::Process(format!("Failed to flush stdin: {}", e)))?;
            drop(stdin);
        }

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| GenerationError::Process("Failed to capture stdout".to_string()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| GenerationError::Process("Failed to capture stderr".to_string()))?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let mut output = String::new();
        let mut stderr_output = String::new();
        let mut stdout_done = false;
        let mut stderr_done = false;

        // Drain both pipes together to avoid backpressure deadlock
        while !stdout_done || !stderr_done {
            tokio::select! {
                line = stdout_reader.next_line(), if !stdout_done => {
                    match line {
                        Ok(Some(line)) => {
                            output.push_str(&line);
                            output.push('\n');
                        }
                        Ok(None) => stdout_done = true,
                        Err(e) => {
                            return Err(GenerationError::Process(format!("Failed to read stdout: {}", e)))
                        }
                    }
                }
                line = stderr_reader.next_line(), if !stderr_done => {
                    match line {
                        Ok(Some(line)) => {
                            stderr_output.push_str(&line);
                            stderr_output.push('\n');
                        }
                        Ok(None) => stderr_done = true,
                        Err(e) => {
                            return Err(GenerationError::Process(format!("Failed to read stderr: {}", e)))
                        }
                    }
                }
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| GenerationError::Process(e.to_string()))?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        if !status.success() {
            return Err(GenerationError::Process(format!(
                "Command '{}' failed with exit code {:?}\nStderr: {}",
                self.command,
                status.code(),
                stderr_output.trim()
            )));
        }

        Ok(output)
    }
}

#[async_trait]
impl Generator for CliGenerator {
    fn name(&self) -> &str {
        &self.command
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        debug!(command = %self.command, "Running generation command");
        self.run_command(&Self::compose_stdin(request)).await
    }
}
