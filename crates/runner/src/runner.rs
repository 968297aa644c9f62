use crate::commands::format_invocation;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use cutsheet_sheet::CommandLogEntry;
use std::io;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

const STDERR_TAIL_LINES: usize = 5;

/// Result of one external process run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub entry: CommandLogEntry,
    /// Exit code, `None` if the process was killed or timed out.
    pub status: Option<i32>,
    pub stderr_tail: String,
    pub finished_at: DateTime<Utc>,
}

impl RunOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == Some(0)
    }
}

#[derive(Debug, Clone)]
pub struct CommandRunner {
    ffmpeg_path: String,
    timeout: Duration,
}

impl CommandRunner {
    pub fn new(ffmpeg_path: String, timeout: Duration) -> Self {
        Self {
            ffmpeg_path,
            timeout,
        }
    }

    fn resolve<'a>(&'a self, program: &'a str) -> &'a str {
        if program == "ffmpeg" {
            &self.ffmpeg_path
        } else {
            program
        }
    }

    pub async fn check_binary(&self) -> Result<()> {
        let output = Command::new(&self.ffmpeg_path)
            .arg("-version")
            .output()
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            Err(anyhow!(
                "ffmpeg binary not found or not executable: {}",
                self.ffmpeg_path
            ))
        }
    }

    /// Runs `program` to completion and returns the logged invocation.
    ///
    /// The log entry records what was actually executed, so the resolved
    /// binary path replaces a bare `ffmpeg`.
    pub async fn run(&self, program: &str, args: &[String]) -> Result<RunOutcome> {
        let program = self.resolve(program);
        let entry = CommandLogEntry::new(format_invocation(program, args));
        info!("Running {}", entry.command);

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| anyhow!("Failed to start {program}: {e}"))?;

        let waited = timeout(self.timeout, child.wait_with_output()).await.ok();
        let (status, stderr_tail) = settle(waited, self.timeout);
        if status.is_none() {
            warn!(command = %entry.command, "{}", stderr_tail);
        }

        debug!(?status, "{} finished", program);

        Ok(RunOutcome {
            entry,
            status,
            stderr_tail,
            finished_at: Utc::now(),
        })
    }
}

/// Maps a finished (or abandoned) wait to the reported status and stderr.
///
/// `None` means the wait timed out. The process was started either way, so
/// every case yields a result that still gets logged.
fn settle(waited: Option<io::Result<Output>>, limit: Duration) -> (Option<i32>, String) {
    match waited {
        Some(Ok(output)) => (output.status.code(), tail_lines(&output.stderr)),
        Some(Err(e)) => (None, format!("failed waiting for process: {e}")),
        None => (None, format!("timed out after {}s", limit.as_secs())),
    }
}

fn tail_lines(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
