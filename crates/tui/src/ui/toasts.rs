use crate::toast::ToastQueue;
use cutsheet_sheet::NotificationKind;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const TOAST_HEIGHT: u16 = 3;

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
        NotificationKind::Error => Color::Red,
    }
}

/// Stacks the queued toasts in the top-right corner of `area`.
pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    for (i, toast) in toasts.iter().enumerate() {
        let y = area.y + 1 + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.bottom() {
            break;
        }
        let message = &toast.notification.message;
        let width = (message.chars().count() as u16 + 4).min(area.width);
        let rect = Rect::new(area.right() - width, y, width, TOAST_HEIGHT);
        let color = kind_color(toast.notification.kind);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(message.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
    }
}
