use termcolor::{Color, ColorSpec};
use self::Level::*;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl Level {
    pub(crate) fn color(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Error => {
                spec.set_fg(Some(Color::Red)).set_intense(true);
            }
            Warning => {
                spec.set_fg(Some(Color::Yellow)).set_intense(cfg!(windows));
            }
            Note => {
                spec.set_fg(Some(Color::Green)).set_intense(true);
            }
        }
        spec.set_bold(true);
        spec
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Error => "error",
            Warning => "warning",
            Note => "note",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Error)
    }
}
