//! The shortcut reference shown at the top of the help sheet.
//!
//! All text here is a translation key. Key labels are not translated.

pub const SHORTCUTS_HEADING: &str = "Keyboard & mouse shortcuts";
pub const COMMAND_LOG_HEADING: &str = "Last ffmpeg commands";
pub const HOMEPAGE_LEAD_IN: &str = "For usage help and issues, go to";
pub const HOVER_HINT: &str =
    "Hover mouse over buttons in the main interface to see which function they have";
pub const COPY_TOOLTIP: &str = "Copy to clipboard";
pub const COPIED_MESSAGE: &str = "Copied to clipboard";
pub const EMPTY_LOG_PLACEHOLDER: &str = "The last executed ffmpeg commands will show up here after you run operations. You can copy them to clipboard and modify them to your needs before running on your command line.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyJoin {
    /// Keys pressed together.
    Chord,
    /// Any one of the keys.
    Either,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: &'static [&'static str],
    pub join: KeyJoin,
    /// Mouse gesture that completes the keys, e.g. a wheel scroll.
    pub gesture_key: Option<&'static str>,
    pub description_key: &'static str,
}

impl Shortcut {
    const fn chord(keys: &'static [&'static str], description_key: &'static str) -> Self {
        Self {
            keys,
            join: KeyJoin::Chord,
            gesture_key: None,
            description_key,
        }
    }

    const fn either(keys: &'static [&'static str], description_key: &'static str) -> Self {
        Self {
            keys,
            join: KeyJoin::Either,
            gesture_key: None,
            description_key,
        }
    }

    const fn gesture(
        keys: &'static [&'static str],
        gesture_key: &'static str,
        description_key: &'static str,
    ) -> Self {
        Self {
            keys,
            join: KeyJoin::Chord,
            gesture_key: Some(gesture_key),
            description_key,
        }
    }

    pub fn key_label(&self) -> String {
        let separator = match self.join {
            KeyJoin::Chord => " + ",
            KeyJoin::Either => ", ",
        };
        self.keys.join(separator)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutCategory {
    pub title_key: &'static str,
    pub shortcuts: &'static [Shortcut],
}

pub const TOGGLE_SHORTCUT: Shortcut = Shortcut::chord(&["H"], "Show/hide this screen");

pub const CATALOG: &[ShortcutCategory] = &[
    ShortcutCategory {
        title_key: "Playback",
        shortcuts: &[
            Shortcut::either(&["SPACE", "k"], "Play/pause"),
            Shortcut::chord(&["J"], "Slow down playback"),
            Shortcut::chord(&["L"], "Speed up playback"),
        ],
    },
    ShortcutCategory {
        title_key: "Seeking",
        shortcuts: &[
            Shortcut::chord(&[","], "Step backward 1 frame"),
            Shortcut::chord(&["."], "Step forward 1 frame"),
            Shortcut::chord(&["ALT / OPT", "←"], "Seek to previous keyframe"),
            Shortcut::chord(&["ALT / OPT", "→"], "Seek to next keyframe"),
            Shortcut::chord(&["←"], "Seek backward 1 sec"),
            Shortcut::chord(&["→"], "Seek forward 1 sec"),
            Shortcut::chord(
                &["CTRL / CMD", "←"],
                "Seek backward 1% of timeline at current zoom",
            ),
            Shortcut::chord(
                &["CTRL / CMD", "→"],
                "Seek forward 1% of timeline at current zoom",
            ),
        ],
    },
    ShortcutCategory {
        title_key: "Timeline/zoom operations",
        shortcuts: &[
            Shortcut::chord(
                &["Z"],
                "Toggle zoom between 1x and a calculated comfortable zoom level",
            ),
            Shortcut::chord(&["CTRL / CMD", "↑"], "Zoom in timeline"),
            Shortcut::chord(&["CTRL / CMD", "↓"], "Zoom out timeline"),
            Shortcut::gesture(
                &["CTRL"],
                "Mouse scroll/wheel up/down",
                "Zoom in/out timeline",
            ),
            Shortcut::gesture(&[], "Mouse scroll/wheel left/right", "Pan timeline"),
        ],
    },
    ShortcutCategory {
        title_key: "Segments and cut points",
        shortcuts: &[
            Shortcut::chord(&["I"], "Mark in / cut start point for current segment"),
            Shortcut::chord(&["O"], "Mark out / cut end point for current segment"),
            Shortcut::chord(&["+"], "Add cut segment"),
            Shortcut::chord(&["BACKSPACE"], "Remove current segment"),
            Shortcut::chord(&["↑"], "Select previous segment"),
            Shortcut::chord(&["↓"], "Select next segment"),
        ],
    },
    ShortcutCategory {
        title_key: "File system actions",
        shortcuts: &[
            Shortcut::chord(&["E"], "Export segment(s)"),
            Shortcut::chord(&["C"], "Capture snapshot"),
            Shortcut::chord(&["D"], "Delete source file"),
        ],
    },
];
