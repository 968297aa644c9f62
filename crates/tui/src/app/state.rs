use super::*;

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    /// Whether the help sheet should be on screen. Only the app flips it.
    pub show_help: bool,
    /// Every executed command, oldest first. Never reordered or trimmed.
    pub command_log: Vec<CommandLogEntry>,
    pub help_sheet: HelpSheet,
    pub sheet_areas: SheetHitAreas,
    pub host: Box<dyn Host>,
    pub toasts: ToastQueue,
    pub input: InputState,
    pub layout: LayoutState,
    pub runner: CommandRunner,
    pub running_command: Option<String>,
    pub last_outcome: Option<RunOutcome>,
    pub last_error: Option<String>,
    pub last_tick: Instant,
    pub notify_rx: Option<mpsc::UnboundedReceiver<Notification>>,
    pub app_async_tx: Option<mpsc::UnboundedSender<AppAsyncEvent>>,
    pub app_async_rx: Option<mpsc::UnboundedReceiver<AppAsyncEvent>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default(), Locale::default())
    }
}

impl App {
    pub fn new(config: Config, locale: Locale) -> Self {
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();
        let host = SystemHost::new(locale, notify_tx);
        let mut app = Self::with_host(config, Box::new(host));
        app.notify_rx = Some(notify_rx);
        app
    }

    pub fn with_host(config: Config, host: Box<dyn Host>) -> Self {
        let (app_async_tx, app_async_rx) = mpsc::unbounded_channel();
        let help_sheet = HelpSheet::new(config.homepage_url.clone(), config.ui.transition());
        let runner = CommandRunner::new(config.runner.ffmpeg_path.clone(), config.runner.timeout());

        Self {
            should_quit: false,
            config,
            show_help: false,
            command_log: Vec::new(),
            help_sheet,
            sheet_areas: SheetHitAreas::default(),
            host,
            toasts: ToastQueue::default(),
            input: InputState::new(),
            layout: LayoutState::default(),
            runner,
            running_command: None,
            last_outcome: None,
            last_error: None,
            last_tick: Instant::now(),
            notify_rx: None,
            app_async_tx: Some(app_async_tx),
            app_async_rx: Some(app_async_rx),
        }
    }
}
