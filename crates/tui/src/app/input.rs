use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => Ok(false),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if keybinds::is_quit(&key) {
            return Ok(true);
        }

        if keybinds::is_help_toggle(&key) {
            self.toggle_help();
            return Ok(false);
        }

        if self.help_sheet.is_mounted() {
            if let Some(action) = keybinds::sheet_action(&key) {
                self.activate_sheet(action);
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Enter => self.submit_command(),
            KeyCode::Esc => self.input.clear(),
            KeyCode::Backspace => self.input.handle_backspace(),
            KeyCode::Char(c) => self.input.handle_char(c),
            _ => {}
        }
        Ok(false)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        if !self.help_sheet.is_mounted() {
            return Ok(false);
        }

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.sheet_areas.action_at(mouse.column, mouse.row)
            }
            MouseEventKind::ScrollUp => Some(SheetAction::ScrollUp),
            MouseEventKind::ScrollDown => Some(SheetAction::ScrollDown),
            _ => None,
        };

        if let Some(action) = action {
            self.activate_sheet(action);
        }
        Ok(false)
    }
}
