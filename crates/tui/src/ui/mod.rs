pub mod help_sheet;
pub mod layout;
pub mod panel;
pub mod toasts;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Shrinks `area` around its centre by `factor` (0.0 to 1.0).
pub fn scale_rect(area: Rect, factor: f32) -> Rect {
    let factor = factor.clamp(0.0, 1.0);
    let width = (f32::from(area.width) * factor).round() as u16;
    let height = (f32::from(area.height) * factor).round() as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
