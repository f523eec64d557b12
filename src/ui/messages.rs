//! Status-line helpers: icon plus color, one line per event.

use std::fmt;

use crate::utils::colors::{BOLD, CYAN, GREEN, GREY, RED, RESET, YELLOW};

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_STEP: &str = "🤖";

fn stamp(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", stamp(CYAN, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", stamp(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", stamp(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", stamp(RED, ICON_ERR, msg));
}

/// Progress marker for the long-running annotation phase.
pub fn step<T: fmt::Display>(msg: T) {
    println!("{}", stamp(CYAN, ICON_STEP, msg));
}

/// Grey diagnostics, printed only when --debug is active.
pub fn debug<T: fmt::Display>(enabled: bool, msg: T) {
    if enabled {
        println!("{GREY}{msg}{RESET}");
    }
}

/// Formatted section header.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{CYAN}{BOLD}== {msg} =={RESET}");
}
