use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const TOPBAR_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;

#[derive(Default)]
pub struct LayoutState {
    cached_panels: Vec<Panel>,
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOPBAR_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(INPUT_HEIGHT),
            ])
            .split(area);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Topbar,
                rect: main_layout[0],
            },
            Panel {
                panel_type: PanelType::Output,
                rect: main_layout[1],
            },
            Panel {
                panel_type: PanelType::InputBar,
                rect: main_layout[2],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_topbar_output_and_input() {
        let mut layout = LayoutState::default();
        let panels = layout.calculate_layout(Rect::new(0, 0, 80, 24));

        let kinds: Vec<PanelType> = panels.iter().map(|p| p.panel_type).collect();
        assert_eq!(
            kinds,
            vec![PanelType::Topbar, PanelType::Output, PanelType::InputBar]
        );
        assert_eq!(panels[0].rect.height, 1);
        assert_eq!(panels[1].rect.height, 20);
        assert_eq!(panels[2].rect, Rect::new(0, 21, 80, 3));
    }
}
