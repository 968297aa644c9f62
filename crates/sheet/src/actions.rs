use crate::catalog::COPIED_MESSAGE;
use crate::host::Host;
use crate::types::{CommandLogEntry, EntryKey, Notification, NotificationKind};
use std::time::Duration;

pub const COPY_NOTIFICATION_DURATION: Duration = Duration::from_millis(2000);

/// User intents the help sheet responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    Dismiss,
    OpenHomepage,
    Copy(EntryKey),
    CopySelected,
    SelectNewer,
    SelectOlder,
    ScrollUp,
    ScrollDown,
}

/// Copies the literal command text and confirms with a short notification.
pub fn copy_command<H: Host + ?Sized>(host: &mut H, entry: &CommandLogEntry) {
    host.write_clipboard_text(&entry.command);
    let message = host.translate(COPIED_MESSAGE);
    host.show_notification(Notification {
        duration: COPY_NOTIFICATION_DURATION,
        kind: NotificationKind::Success,
        message,
    });
}

pub fn open_homepage<H: Host + ?Sized>(host: &mut H, url: &str) {
    host.open_external_link(url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;

    #[test]
    fn copies_the_exact_command_text() {
        let mut host = RecordingHost::default();
        let entry = CommandLogEntry::new("ffmpeg -i in.mp4 out.mkv");

        copy_command(&mut host, &entry);

        assert_eq!(host.clipboard_writes, vec!["ffmpeg -i in.mp4 out.mkv"]);
    }

    #[test]
    fn whitespace_and_quotes_are_not_touched() {
        let mut host = RecordingHost::default();
        let raw = "  ffmpeg -i 'my clip.mov' -c copy \"out put.mp4\"\n";

        copy_command(&mut host, &CommandLogEntry::new(raw));

        assert_eq!(host.clipboard_writes, vec![raw]);
    }

    #[test]
    fn copy_shows_a_two_second_success_notification() {
        let mut host = RecordingHost::default();
        copy_command(&mut host, &CommandLogEntry::new("ffprobe x"));

        assert_eq!(
            host.notifications,
            vec![Notification {
                duration: Duration::from_millis(2000),
                kind: NotificationKind::Success,
                message: COPIED_MESSAGE.to_string(),
            }]
        );
    }

    #[test]
    fn homepage_url_is_passed_through() {
        let mut host = RecordingHost::default();
        open_homepage(&mut host, "https://example.org/help?x=1#top");
        assert_eq!(host.opened_links, vec!["https://example.org/help?x=1#top"]);
    }
}
