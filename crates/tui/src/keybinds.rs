use cutsheet_sheet::SheetAction;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Hint shown in the help sheet border.
pub const SHEET_HINT: &str = " Esc close · ↑/↓ select · c copy · o homepage · PgUp/PgDn scroll ";

/// Hint shown in the main screen top bar.
pub const MAIN_HINT: &str = "[F1] help   [Enter] run   [Ctrl+Q] quit";

pub fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Toggles the help sheet from anywhere, including while typing.
pub fn is_help_toggle(key: &KeyEvent) -> bool {
    key.code == KeyCode::F(1)
        || key.code == KeyCode::Char('h') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Keys understood while the help sheet is on screen.
pub fn sheet_action(key: &KeyEvent) -> Option<SheetAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
            Some(SheetAction::Dismiss)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(SheetAction::SelectNewer),
        KeyCode::Down | KeyCode::Char('j') => Some(SheetAction::SelectOlder),
        KeyCode::Enter | KeyCode::Char('c') => Some(SheetAction::CopySelected),
        KeyCode::Char('o') => Some(SheetAction::OpenHomepage),
        KeyCode::PageUp => Some(SheetAction::ScrollUp),
        KeyCode::PageDown => Some(SheetAction::ScrollDown),
        _ => None,
    }
}
