use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl From<Level> for LogColor {
    fn from(level: Level) -> Self {
        match level {
            Level::Info => LogColor::Info,
            Level::Success => LogColor::Highlight,
            Level::Warning => LogColor::Warning,
            Level::Error => LogColor::Error,
        }
    }
}

/// Renders `[LEVEL] label message`, with the tag, label and message each in their own color.
fn render(level: Level, label: impl Display, msg: impl Display) -> String {
    let tag = format!("[{level}]").color(LogColor::from(level));
    let label = label.to_string().color(LogColor::Label);
    let msg = msg.to_string().color(LogColor::Gray);
    format!("{tag} {label} {msg}")
}

pub fn log_info(label: impl Display, msg: impl Display) {
    println!("{}", render(Level::Info, label, msg));
}

pub fn log_success(label: impl Display, msg: impl Display) {
    println!("{}", render(Level::Success, label, msg));
}

/// Like [`log_success`], but on stderr so stdout stays machine-readable.
pub fn log_success_to_stderr(label: impl Display, msg: impl Display) {
    eprintln!("{}", render(Level::Success, label, msg));
}

pub fn log_warning(label: impl Display, msg: impl Display) {
    println!("{}", render(Level::Warning, label, msg));
}

pub fn log_error(label: impl Display, msg: impl Display) {
    println!("{}", render(Level::Error, label, msg));
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Label,
    Error,
    Warning,
    Info,
    Gray,
}

impl LogColor {
    const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Highlight => (98, 209, 120),
            Self::Label => (86, 156, 214),
            Self::Error => (230, 57, 70),
            Self::Warning => (229, 160, 30),
            Self::Info => (72, 132, 232),
            Self::Gray => (150, 150, 150),
        }
    }
}

impl From<LogColor> for Color {
    fn from(value: LogColor) -> Color {
        let (r, g, b) = value.rgb();
        Color::TrueColor { r, g, b }
    }
}

/// Formats `key: value` with the key colored, [`LogColor::Info`] unless a color is passed.
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $crate::LogColor::Info)
    };
    ($key:expr, $value:expr, $color:expr $(,)?) => {{
        use $crate::colored::Colorize;
        format!("{}: {}", ::std::string::ToString::to_string(&$key).color($color), $value)
    }};
}

#[macro_export]
macro_rules! print_kv {
    ($($args:tt)*) => {
        println!("{}", $crate::fmt_kv!($($args)*))
    };
}
