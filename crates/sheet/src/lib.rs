pub mod actions;
pub mod catalog;
pub mod error;
pub mod gate;
pub mod host;
pub mod i18n;
pub mod log_view;
pub mod sheet;
pub mod types;

pub use actions::SheetAction;
pub use error::{LocaleError, LocaleResult};
pub use gate::{Phase, VisibilityGate};
pub use host::{Host, Translate};
pub use i18n::Locale;
pub use log_view::{DisplayEntry, LogSelection, LogView};
pub use sheet::HelpSheet;
pub use types::*;
