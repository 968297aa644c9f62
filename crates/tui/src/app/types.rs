use cutsheet_runner::RunOutcome;

pub enum AppAsyncEvent {
    CommandFinished {
        command: String,
        outcome: Option<RunOutcome>,
        error: Option<String>,
    },
    BinaryChecked {
        error: Option<String>,
    },
}
