use super::*;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(area);
        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Topbar => self.render_topbar(frame, panel.rect),
                PanelType::Output => self.render_output(frame, panel.rect),
                PanelType::InputBar => self.render_input_bar(frame, panel.rect),
            }
        }

        if self.help_sheet.is_mounted() {
            let progress = self.help_sheet.progress(self.last_tick);
            self.sheet_areas = render_help_sheet(
                frame,
                area,
                &mut self.help_sheet,
                &self.command_log,
                self.host.as_ref(),
                progress,
            );
        }

        crate::ui::toasts::render_toasts(frame, area, &self.toasts);
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Paragraph};

        let status = match self.running_command {
            Some(ref command) => format!("running: {command}"),
            None => format!("{} commands run", self.command_log.len()),
        };

        let text = format!(
            " ● cutsheet   {}{}   {}",
            status,
            if self.last_error.is_some() {
                "   ⚠ error"
            } else {
                ""
            },
            keybinds::MAIN_HINT,
        );

        frame.render_widget(Paragraph::new(text).block(Block::default()), area);
    }

    fn render_output(&self, frame: &mut Frame, area: Rect) {
        use ratatui::style::{Color, Style};
        use ratatui::text::Line;
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let mut lines: Vec<Line> = Vec::new();

        if let Some(ref outcome) = self.last_outcome {
            let status = match outcome.status {
                Some(code) => format!("exit {code}"),
                None => "killed".to_string(),
            };
            lines.push(Line::from(format!(
                "{} [{}] {}",
                outcome.finished_at.format("%H:%M:%S"),
                status,
                outcome.entry.command
            )));
            lines.extend(outcome.stderr_tail.lines().map(|l| Line::from(format!("  {l}"))));
        } else {
            lines.push(Line::from(
                "Type a command (e.g. ffmpeg -i in.mp4 -c copy out.mkv) and press Enter.",
            ));
            lines.push(Line::from("Executed commands appear in the help sheet [F1]."));
        }

        if let Some(ref error) = self.last_error {
            lines.push(Line::default());
            lines.push(Line::styled(error.clone(), Style::default().fg(Color::Red)));
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Output ")),
            area,
        );
    }

    fn render_input_bar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph};

        frame.render_widget(
            Paragraph::new(format!("> {}", self.input.buffer))
                .block(Block::default().borders(Borders::ALL).title(" Run ")),
            area,
        );
    }
}
