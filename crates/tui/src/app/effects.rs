use super::*;

impl App {
    /// Checks for the ffmpeg binary in the background.
    pub fn init(&mut self) {
        let runner = self.runner.clone();
        self.spawn_app_task(async move {
            let error = runner.check_binary().await.err().map(|e| e.to_string());
            AppAsyncEvent::BinaryChecked { error }
        });
    }

    pub(super) fn submit_command(&mut self) {
        let line = self.input.take();
        if line.trim().is_empty() {
            return;
        }

        let Some((program, args)) = parse_command_line(&line) else {
            self.report_error("Invalid command line", "unterminated quote or escape");
            return;
        };

        if let Some(ref running) = self.running_command {
            self.report_error("Busy", format!("still running {running}"));
            return;
        }

        self.clear_error();
        self.running_command = Some(line.clone());
        let runner = self.runner.clone();
        self.spawn_app_task(async move {
            match runner.run(&program, &args).await {
                Ok(outcome) => AppAsyncEvent::CommandFinished {
                    command: line,
                    outcome: Some(outcome),
                    error: None,
                },
                Err(e) => AppAsyncEvent::CommandFinished {
                    command: line,
                    outcome: None,
                    error: Some(e.to_string()),
                },
            }
        });
    }

    pub fn process_async_events(&mut self) {
        let mut events = Vec::new();
        if let Some(rx) = self.app_async_rx.as_mut() {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }

        for event in events {
            match event {
                AppAsyncEvent::CommandFinished {
                    command,
                    outcome,
                    error,
                } => {
                    self.running_command = None;
                    if let Some(outcome) = outcome {
                        if !outcome.succeeded() {
                            self.report_error(
                                "Command failed",
                                format!("{command} ({})", outcome.stderr_tail),
                            );
                        }
                        self.command_log.push(outcome.entry.clone());
                        self.last_outcome = Some(outcome);
                    }
                    if let Some(error) = error {
                        self.report_error("Failed to run command", error);
                    }
                }
                AppAsyncEvent::BinaryChecked { error } => {
                    if let Some(error) = error {
                        self.report_error("ffmpeg check failed", error);
                    }
                }
            }
        }
    }
}
