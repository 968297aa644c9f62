mod app;
mod config;
mod host;
mod input;
mod keybinds;
mod toast;
mod ui;

use app::App;
use config::Config;
use cutsheet_sheet::Locale;
use directories::ProjectDirs;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
};
use ratatui::crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "cutsheet", "cutsheet")
}

fn get_config_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("config"))
}

/// Logs go to a file: the terminal belongs to the UI.
fn init_logging() -> io::Result<()> {
    let log_dir = project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("cutsheet.log"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cutsheet=info,cutsheet_sheet=info,cutsheet_runner=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    let _ = dotenvy::dotenv();
    color_eyre::install()?;
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    let config_dir = get_config_dir();
    let config = Config::load_or_default(&config_dir.join("config.toml"));
    let locale = config
        .locale_path(&config_dir)
        .map(|path| Locale::load_or_default(&path))
        .unwrap_or_default();

    let rt = tokio::runtime::Runtime::new()?;
    let _guard = rt.enter();

    terminal::enable_raw_mode()?;
    let mut terminal = ratatui::init();
    ratatui::crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let result = run(&mut terminal, App::new(config, locale));

    let _ = ratatui::crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    ratatui::restore();

    result
}

fn run(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> color_eyre::Result<()> {
    tracing::info!("cutsheet started");
    app.init();

    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        let poll = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(poll)? {
            let event = event::read()?;

            if let Event::Key(key) = &event {
                if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
            }

            match app.handle_event(event) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => tracing::warn!("Event handling failed: {}", e),
            }
        }

        app.process_async_events();

        if app.should_quit {
            break;
        }
    }

    tracing::info!("cutsheet exiting");
    Ok(())
}
