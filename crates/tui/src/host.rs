use cutsheet_sheet::{Host, Locale, Notification, Translate};
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Failed to open {url}: {source}")]
    OpenLink {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Notification presenter is gone")]
    PresenterClosed,
}

/// Desktop-backed collaborators for the help sheet.
///
/// Notifications are forwarded to the app, which owns the toast queue.
pub struct SystemHost {
    locale: Locale,
    clipboard: Option<arboard::Clipboard>,
    notify_tx: mpsc::UnboundedSender<Notification>,
}

impl SystemHost {
    pub fn new(locale: Locale, notify_tx: mpsc::UnboundedSender<Notification>) -> Self {
        Self {
            locale,
            clipboard: None,
            notify_tx,
        }
    }

    fn try_write_clipboard(&mut self, text: &str) -> Result<(), HostError> {
        // Kept alive for the whole session: on X11 the selection is lost
        // when the owning handle is dropped.
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }

    fn try_open(&self, url: &str) -> Result<(), HostError> {
        open::that_detached(url).map_err(|source| HostError::OpenLink {
            url: url.to_string(),
            source,
        })
    }

    fn try_notify(&self, notification: Notification) -> Result<(), HostError> {
        self.notify_tx
            .send(notification)
            .map_err(|_| HostError::PresenterClosed)
    }
}

impl Translate for SystemHost {
    fn translate(&self, key: &str) -> String {
        self.locale.translate(key)
    }
}

impl Host for SystemHost {
    fn open_external_link(&mut self, url: &str) {
        if let Err(e) = self.try_open(url) {
            tracing::warn!("{e}");
        }
    }

    fn write_clipboard_text(&mut self, text: &str) {
        match self.try_write_clipboard(text) {
            Ok(()) => tracing::debug!(bytes = text.len(), "copied to clipboard"),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    fn show_notification(&mut self, notification: Notification) {
        if let Err(e) = self.try_notify(notification) {
            tracing::warn!("{e}");
        }
    }
}
