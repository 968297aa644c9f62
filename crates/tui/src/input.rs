/// The command prompt on the main screen.
pub struct InputState {
    pub buffer: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    pub fn handle_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn handle_backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the typed line and empties the prompt.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}
