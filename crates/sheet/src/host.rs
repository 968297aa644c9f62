use crate::types::Notification;

/// Resolves a translation key to display text.
///
/// Keys are the English source strings, so returning the key unchanged is a
/// valid fallback.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

/// Host application services the help sheet delegates to.
///
/// Every call is fire-and-forget. Implementations deal with their own
/// failures and never report them back.
pub trait Host: Translate {
    fn open_external_link(&mut self, url: &str);
    fn write_clipboard_text(&mut self, text: &str);
    fn show_notification(&mut self, notification: Notification);
}
