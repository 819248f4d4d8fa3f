//! Console messages: colored, icon-prefixed lines.
//! Warnings and errors go to stderr so grid output on stdout stays clean.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// (color, icon)
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let (color, icon) = level.style();
    let line = format!("{color}{BOLD}{icon} {RESET}{msg}");
    if level.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Secondary line (e.g. "Last updated: ...").
pub fn note<T: fmt::Display>(msg: T) {
    println!("{DIM}{msg}{RESET}");
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let (color, _) = Level::Info.style();
    println!("\n{color}{BOLD}=== {msg} ==={RESET}");
}
