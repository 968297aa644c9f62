use crate::host::SystemHost;
use crate::input::InputState;
use crate::keybinds;
use crate::toast::ToastQueue;
use crate::ui::help_sheet::{render_help_sheet, SheetHitAreas};
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::Config;
use anyhow::Result;
use cutsheet_runner::{parse_command_line, CommandRunner, RunOutcome};
use cutsheet_sheet::{CommandLogEntry, HelpSheet, Host, Locale, Notification, SheetAction};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::future::Future;
use std::time::Instant;
use tokio::sync::mpsc;

mod actions;
mod effects;
mod input;
mod render;
mod state;
mod types;

pub use state::App;
pub use types::AppAsyncEvent;

impl App {
    pub(super) fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = format!("{context}: {error}");
        self.last_error = Some(message.clone());
        tracing::warn!("{message}");
    }

    pub(super) fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub(super) fn spawn_app_task<F>(&self, future: F)
    where
        F: Future<Output = AppAsyncEvent> + Send + 'static,
    {
        if let Some(tx) = self.app_async_tx.clone() {
            tokio::spawn(async move {
                let event = future.await;
                let _ = tx.send(event);
            });
        }
    }

    /// Flips the help sheet flag. The sheet itself never does this.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        tracing::debug!(show_help = self.show_help, "help sheet toggled");
    }

    /// Advances animations and expires toasts. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.last_tick = now;
        self.help_sheet.sync(self.show_help, now);
        if !self.help_sheet.is_mounted() {
            self.sheet_areas = SheetHitAreas::default();
        }

        if let Some(rx) = self.notify_rx.as_mut() {
            while let Ok(notification) = rx.try_recv() {
                self.toasts.push(notification, now);
            }
        }
        self.toasts.prune(now);
    }

    /// True while something on screen is moving and wants a faster redraw.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.help_sheet.phase(),
            cutsheet_sheet::Phase::Entering { .. } | cutsheet_sheet::Phase::Exiting { .. }
        ) || !self.toasts.is_empty()
    }
}
