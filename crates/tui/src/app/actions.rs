use super::*;

impl App {
    pub(super) fn activate_sheet(&mut self, action: SheetAction) {
        let mut toggle_pressed = false;
        self.help_sheet.activate(
            action,
            &self.command_log,
            self.host.as_mut(),
            || toggle_pressed = true,
        );

        if toggle_pressed {
            self.toggle_help();
        }
    }
}
