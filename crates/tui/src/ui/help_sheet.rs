use super::{centered_rect, scale_rect};
use crate::keybinds::SHEET_HINT;
use cutsheet_sheet::catalog::{
    Shortcut, CATALOG, COMMAND_LOG_HEADING, COPY_TOOLTIP, HOMEPAGE_LEAD_IN, HOVER_HINT,
    SHORTCUTS_HEADING, TOGGLE_SHORTCUT,
};
use cutsheet_sheet::{CommandLogEntry, EntryKey, HelpSheet, LogView, SheetAction, Translate};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const COPY_LABEL: &str = "[copy]";
const CLOSE_LABEL: &str = "[x]";
const KEY_COLUMN: usize = 16;
const LOG_HEIGHT: u16 = 8;
const MIN_WIDTH: u16 = 24;
const MIN_HEIGHT: u16 = 12;

/// Clickable regions recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct SheetHitAreas {
    close: Option<Rect>,
    homepage: Option<Rect>,
    copy_buttons: Vec<(Rect, EntryKey)>,
}

impl SheetHitAreas {
    pub fn action_at(&self, column: u16, row: u16) -> Option<SheetAction> {
        let position = Position::new(column, row);
        if self.close.is_some_and(|r| r.contains(position)) {
            return Some(SheetAction::Dismiss);
        }
        if self.homepage.is_some_and(|r| r.contains(position)) {
            return Some(SheetAction::OpenHomepage);
        }
        self.copy_buttons
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, key)| SheetAction::Copy(*key))
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_none() && self.homepage.is_none() && self.copy_buttons.is_empty()
    }
}

fn shortcut_line<T: Translate + ?Sized>(shortcut: &Shortcut, translator: &T) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(
        format!("  {:<width$}", shortcut.key_label(), width = KEY_COLUMN),
        key_style,
    )];

    if let Some(gesture) = shortcut.gesture_key {
        spans.push(Span::styled(
            translator.translate(gesture),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
        spans.push(Span::raw(" - "));
    }
    spans.push(Span::raw(translator.translate(shortcut.description_key)));
    Line::from(spans)
}

/// The static shortcut reference, one entry per line.
pub fn reference_lines<T: Translate + ?Sized>(translator: &T) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(translator.translate(SHORTCUTS_HEADING), heading),
        shortcut_line(&TOGGLE_SHORTCUT, translator),
    ];

    for category in CATALOG {
        lines.push(Line::default());
        lines.push(Line::styled(translator.translate(category.title_key), bold));
        lines.extend(
            category
                .shortcuts
                .iter()
                .map(|shortcut| shortcut_line(shortcut, translator)),
        );
    }

    lines.push(Line::default());
    lines.push(Line::styled(translator.translate(HOVER_HINT), bold));
    lines
}

/// Draws the mounted help sheet scaled by `progress` and returns where its
/// affordances ended up.
pub fn render_help_sheet<T: Translate + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    sheet: &mut HelpSheet,
    log: &[CommandLogEntry],
    translator: &T,
    progress: f32,
) -> SheetHitAreas {
    let mut hits = SheetHitAreas::default();
    let popup = scale_rect(centered_rect(80, 90, area), progress);
    if popup.width < MIN_WIDTH || popup.height < MIN_HEIGHT {
        return hits;
    }

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_bottom(SHEET_HINT);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let close = Rect::new(popup.right() - CLOSE_LABEL.len() as u16 - 2, popup.y, 3, 1);
    frame.render_widget(
        Paragraph::new(CLOSE_LABEL).style(Style::default().fg(Color::Red)),
        close,
    );
    hits.close = Some(close);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(LOG_HEIGHT),
        ])
        .split(inner);

    hits.homepage = render_homepage(frame, chunks[0], sheet.homepage_url(), translator);
    render_reference(frame, chunks[1], sheet, translator);

    let view = LogView::build(log, translator);
    let mut heading = vec![Span::styled(
        translator.translate(COMMAND_LOG_HEADING),
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )];
    if matches!(view, LogView::Entries(_)) {
        heading.push(Span::styled(
            format!("  {COPY_LABEL} {}", translator.translate(COPY_TOOLTIP)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(heading)), chunks[2]);

    hits.copy_buttons = render_log(frame, chunks[3], sheet, log, view);
    hits
}

fn render_homepage<T: Translate + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    url: &str,
    translator: &T,
) -> Option<Rect> {
    let lines = vec![
        Line::styled(
            translator.translate(HOMEPAGE_LEAD_IN),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            url.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);

    (area.height >= 2).then(|| {
        let width = (url.chars().count() as u16).min(area.width);
        Rect::new(area.x, area.y + 1, width, 1)
    })
}

fn render_reference<T: Translate + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    sheet: &mut HelpSheet,
    translator: &T,
) {
    let paragraph = Paragraph::new(reference_lines(translator)).wrap(Wrap { trim: false });
    let line_count = u16::try_from(paragraph.line_count(area.width)).unwrap_or(u16::MAX);
    sheet.clamp_reference_scroll(line_count.saturating_sub(area.height));

    frame.render_widget(paragraph.scroll((sheet.reference_scroll(), 0)), area);
}

/// Splits `command` into rows of at most `width` characters, preferring to
/// break after a space. Every character is kept.
fn wrap_command(command: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![command.to_string()];
    }

    let mut rows = Vec::new();
    let mut current: Vec<char> = Vec::new();
    for c in command.chars() {
        current.push(c);
        if current.len() > width {
            let split = current[..current.len() - 1]
                .iter()
                .rposition(|c| *c == ' ')
                .map_or(current.len() - 1, |space| space + 1);
            let rest = current.split_off(split);
            rows.push(current.into_iter().collect());
            current = rest;
        }
    }
    rows.push(current.into_iter().collect());
    rows
}

/// The highlighted entry is wrapped so its full text can be read; the
/// others stay on one row.
fn render_log(
    frame: &mut Frame,
    area: Rect,
    sheet: &HelpSheet,
    log: &[CommandLogEntry],
    view: LogView<'_>,
) -> Vec<(Rect, EntryKey)> {
    let entries = match view {
        LogView::Placeholder(text) => {
            frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
            return Vec::new();
        }
        LogView::Entries(entries) => entries,
    };

    let selected = sheet.selection().display_position(log);
    let indent = COPY_LABEL.len() + 1;
    let text_width = (area.width as usize).saturating_sub(indent);

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let copy = Span::styled(COPY_LABEL, Style::default().fg(Color::Green));
            if Some(position) != selected {
                return ListItem::new(Line::from(vec![
                    copy,
                    Span::raw(" "),
                    Span::raw(entry.command),
                ]));
            }

            let mut rows = wrap_command(entry.command, text_width).into_iter();
            let mut lines = vec![Line::from(vec![
                copy,
                Span::raw(" "),
                Span::raw(rows.next().unwrap_or_default()),
            ])];
            lines.extend(rows.map(|row| Line::from(format!("{:indent$}{row}", ""))));
            ListItem::new(lines)
        })
        .collect();
    let heights: Vec<u16> = items.iter().map(|item| item.height() as u16).collect();

    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(
        List::new(items).highlight_style(Style::default().bg(Color::DarkGray)),
        area,
        &mut state,
    );

    let width = (COPY_LABEL.len() as u16).min(area.width);
    let mut buttons = Vec::new();
    let mut y = area.y;
    for (entry, height) in entries.iter().zip(heights).skip(state.offset()) {
        if y >= area.bottom() {
            break;
        }
        buttons.push((Rect::new(area.x, y, width, 1), entry.key));
        y = y.saturating_add(height);
    }
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutsheet_sheet::{Host, Locale, Notification};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::{Duration, Instant};

    const HOMEPAGE: &str = "https://github.com/mifi/lossless-cut";

    fn shown_sheet() -> HelpSheet {
        let mut sheet = HelpSheet::new(HOMEPAGE, Duration::ZERO);
        sheet.sync(true, Instant::now());
        sheet
    }

    fn draw(
        sheet: &mut HelpSheet,
        log: &[CommandLogEntry],
        locale: &Locale,
    ) -> (Vec<String>, SheetHitAreas) {
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).expect("terminal");
        let mut hits = SheetHitAreas::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                hits = render_help_sheet(frame, area, sheet, log, locale, 1.0);
            })
            .expect("draw");

        let buffer = terminal.backend().buffer();
        let rows = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect();
        (rows, hits)
    }

    fn row_of(rows: &[String], needle: &str) -> Option<usize> {
        rows.iter().position(|row| row.contains(needle))
    }

    #[test]
    fn empty_log_shows_placeholder_and_no_copy_buttons() {
        let mut sheet = shown_sheet();
        let (rows, hits) = draw(&mut sheet, &[], &Locale::default());

        assert!(row_of(&rows, "The last executed ffmpeg commands will show up here").is_some());
        assert!(row_of(&rows, "[copy] ").is_none());
        assert!(hits.copy_buttons.is_empty());
    }

    #[test]
    fn log_is_listed_newest_first() {
        let mut sheet = shown_sheet();
        let log = vec![
            CommandLogEntry::new("ffmpeg -i first.mp4 first.mkv"),
            CommandLogEntry::new("ffmpeg -i second.mp4 second.mkv"),
        ];
        let before = log.clone();

        let (rows, hits) = draw(&mut sheet, &log, &Locale::default());

        let newest = row_of(&rows, "second.mkv").expect("newest entry rendered");
        let oldest = row_of(&rows, "first.mkv").expect("oldest entry rendered");
        assert!(newest < oldest);
        assert_eq!(log, before);
        assert_eq!(
            hits.copy_buttons.iter().map(|(_, k)| *k).collect::<Vec<_>>(),
            vec![EntryKey(1), EntryKey(0)]
        );
    }

    #[test]
    fn copy_buttons_map_back_to_their_entries() {
        let mut sheet = shown_sheet();
        let log = vec![CommandLogEntry::new("a"), CommandLogEntry::new("b")];
        let (_, hits) = draw(&mut sheet, &log, &Locale::default());

        let (rect, key) = hits.copy_buttons[1];
        assert_eq!(key, EntryKey(0));
        assert_eq!(
            hits.action_at(rect.x + 1, rect.y),
            Some(SheetAction::Copy(EntryKey(0)))
        );
    }

    #[test]
    fn close_and_homepage_are_clickable() {
        let mut sheet = shown_sheet();
        let (rows, hits) = draw(&mut sheet, &[], &Locale::default());

        let close = hits.close.expect("close button");
        assert_eq!(hits.action_at(close.x, close.y), Some(SheetAction::Dismiss));
        assert!(rows[close.y as usize].contains(CLOSE_LABEL));

        let link = hits.homepage.expect("homepage link");
        assert_eq!(hits.action_at(link.x, link.y), Some(SheetAction::OpenHomepage));
        assert!(rows[link.y as usize].contains(HOMEPAGE));
    }

    #[test]
    fn descriptions_go_through_the_translator() {
        let mut sheet = shown_sheet();
        let locale = Locale::from_toml(
            "[strings]\n\"Keyboard & mouse shortcuts\" = \"Raccourcis clavier et souris\"\n",
        )
        .expect("locale");

        let (rows, _) = draw(&mut sheet, &[], &locale);

        assert!(row_of(&rows, "Raccourcis clavier et souris").is_some());
        assert!(row_of(&rows, "Show/hide this screen").is_some());
    }

    #[test]
    fn too_small_to_draw_while_animating() {
        let mut sheet = shown_sheet();
        let mut terminal = Terminal::new(TestBackend::new(100, 50)).expect("terminal");
        let mut hits = SheetHitAreas::default();
        terminal
            .draw(|frame| {
                let area = frame.area();
                hits = render_help_sheet(
                    frame,
                    area,
                    &mut sheet,
                    &[],
                    &Locale::default(),
                    0.1,
                );
            })
            .expect("draw");
        assert!(hits.is_empty());
    }

    #[test]
    fn reference_lists_every_category_in_order() {
        let lines = reference_lines(&Locale::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        let playback = text.iter().position(|l| l == "Playback").expect("playback");
        let files = text
            .iter()
            .position(|l| l == "File system actions")
            .expect("file actions");
        assert!(playback < files);
        assert!(text.iter().any(|l| l.contains("SPACE, k") && l.contains("Play/pause")));
        assert!(text
            .iter()
            .any(|l| l.contains("CTRL") && l.contains("Mouse scroll/wheel up/down - Zoom in/out timeline")));
    }

    struct SilentHost;

    impl Translate for SilentHost {
        fn translate(&self, key: &str) -> String {
            key.to_string()
        }
    }

    impl Host for SilentHost {
        fn open_external_link(&mut self, _url: &str) {}
        fn write_clipboard_text(&mut self, _text: &str) {}
        fn show_notification(&mut self, _notification: Notification) {}
    }

    const LONG_COMMAND: &str = "ffmpeg -hide_banner -ss 00:00:01.000 -i '/home/user/Videos/holiday clip.mp4' -t 10 -avoid_negative_ts make_zero -map 0:0 -map 0:1 -c copy -f mp4 -y '/home/user/Videos/holiday clip-00.00.01.000-00.00.11.000.mp4'";

    #[test]
    fn highlighted_long_command_is_shown_in_full() {
        let mut sheet = shown_sheet();
        let log = vec![
            CommandLogEntry::new("ffprobe short.mp4"),
            CommandLogEntry::new(LONG_COMMAND),
        ];

        let (rows, hits) = draw(&mut sheet, &log, &Locale::default());

        let head = row_of(&rows, "[copy] ffmpeg -hide_banner").expect("head row");
        let tail = row_of(&rows, "clip-00.00.01.000-00.00.11.000.mp4'").expect("tail row");
        let older = row_of(&rows, "ffprobe short.mp4").expect("older entry");
        assert!(head < tail && tail < older);
        assert_eq!(
            hits.copy_buttons.iter().map(|(_, k)| *k).collect::<Vec<_>>(),
            vec![EntryKey(1), EntryKey(0)]
        );
        assert_eq!(hits.copy_buttons[1].0.y as usize, older);
    }

    #[test]
    fn copy_legend_is_shown_only_with_entries() {
        let mut sheet = shown_sheet();
        let (rows, _) = draw(&mut sheet, &[CommandLogEntry::new("a")], &Locale::default());
        assert!(row_of(&rows, "[copy] Copy to clipboard").is_some());

        let (rows, _) = draw(&mut sheet, &[], &Locale::default());
        assert!(row_of(&rows, "Copy to clipboard").is_none());
    }

    #[test]
    fn wrapping_keeps_every_character() {
        let rows = wrap_command(LONG_COMMAND, 30);
        assert_eq!(rows.concat(), LONG_COMMAND);
        assert!(rows.iter().all(|row| row.chars().count() <= 30));

        let unbroken = "x".repeat(25);
        assert_eq!(
            wrap_command(&unbroken, 10),
            vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]
        );
        assert_eq!(wrap_command("", 10), vec![String::new()]);
    }

    #[test]
    fn long_descriptions_wrap_instead_of_clipping() {
        let mut sheet = shown_sheet();
        let (rows, _) = draw(&mut sheet, &[], &Locale::default());
        assert!(row_of(&rows, "comfortable zoom").is_some());
        assert!(row_of(&rows, "level").is_some());
    }

    #[test]
    fn scrolling_reaches_the_last_wrapped_line() {
        let mut sheet = shown_sheet();
        for _ in 0..200 {
            sheet.activate(SheetAction::ScrollDown, &[], &mut SilentHost, || {});
        }

        let (rows, _) = draw(&mut sheet, &[], &Locale::default());

        assert!(row_of(&rows, HOVER_HINT).is_some());
        assert!(sheet.reference_scroll() > 0);
        assert!(sheet.reference_scroll() < 200);
    }
}
