use crate::actions::{copy_command, open_homepage, SheetAction};
use crate::gate::{Phase, VisibilityGate};
use crate::host::Host;
use crate::log_view::LogSelection;
use crate::types::{CommandLogEntry, EntryKey};
use std::time::{Duration, Instant};

/// The help sheet: visibility gate plus the small amount of interaction
/// state a keyboard-driven list needs.
///
/// Owns neither the visibility flag nor the command log. Both are read from
/// the owner on every frame.
#[derive(Debug, Clone)]
pub struct HelpSheet {
    gate: VisibilityGate,
    selection: LogSelection,
    homepage_url: String,
    reference_scroll: u16,
}

impl HelpSheet {
    pub fn new(homepage_url: impl Into<String>, transition: Duration) -> Self {
        Self {
            gate: VisibilityGate::new(transition),
            selection: LogSelection::default(),
            homepage_url: homepage_url.into(),
            reference_scroll: 0,
        }
    }

    pub fn sync(&mut self, visible: bool, now: Instant) {
        let was_mounted = self.gate.is_mounted();
        self.gate.sync(visible, now);
        if !was_mounted && self.gate.is_mounted() {
            self.selection.reset();
            self.reference_scroll = 0;
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.gate.is_mounted()
    }

    pub fn progress(&self, now: Instant) -> f32 {
        self.gate.progress(now)
    }

    pub fn phase(&self) -> Phase {
        self.gate.phase()
    }

    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    pub fn selection(&self) -> LogSelection {
        self.selection
    }

    pub fn reference_scroll(&self) -> u16 {
        self.reference_scroll
    }

    /// Clamps the shortcut reference scroll to what the last render could show.
    pub fn clamp_reference_scroll(&mut self, max: u16) {
        self.reference_scroll = self.reference_scroll.min(max);
    }

    fn accepts_input(&self) -> bool {
        matches!(self.gate.phase(), Phase::Entering { .. } | Phase::Visible)
    }

    /// Runs one user action against the current log.
    ///
    /// `on_toggle_press` is the owner's dismissal callback. It is called once
    /// for [`SheetAction::Dismiss`] and never otherwise.
    pub fn activate<H, F>(
        &mut self,
        action: SheetAction,
        log: &[CommandLogEntry],
        host: &mut H,
        on_toggle_press: F,
    ) where
        H: Host + ?Sized,
        F: FnOnce(),
    {
        if !self.accepts_input() {
            tracing::debug!(?action, "help sheet not accepting input");
            return;
        }

        match action {
            SheetAction::Dismiss => on_toggle_press(),
            SheetAction::OpenHomepage => open_homepage(host, &self.homepage_url),
            SheetAction::Copy(key) => self.copy(key, log, host),
            SheetAction::CopySelected => {
                if let Some(key) = self.selection.current(log) {
                    self.copy(key, log, host);
                }
            }
            SheetAction::SelectNewer => self.selection.select_newer(log),
            SheetAction::SelectOlder => self.selection.select_older(log),
            SheetAction::ScrollUp => {
                self.reference_scroll = self.reference_scroll.saturating_sub(1);
            }
            SheetAction::ScrollDown => {
                self.reference_scroll = self.reference_scroll.saturating_add(1);
            }
        }
    }

    fn copy<H: Host + ?Sized>(&mut self, key: EntryKey, log: &[CommandLogEntry], host: &mut H) {
        match log.get(key.0) {
            Some(entry) => {
                self.selection.select(key);
                copy_command(host, entry);
            }
            None => tracing::debug!(?key, "copy requested for unknown log entry"),
        }
    }
}
