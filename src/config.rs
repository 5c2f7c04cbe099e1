//! Support for application configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Two-digit years `YY` are read as `TWO_DIGIT_YEAR_BASE + YY`, i.e. every date lands in 2000-2099
pub const TWO_DIGIT_YEAR_BASE: i32 = 2000;

/// The file tasks are saved to when no other path is given on the command line.
/// Feel free to override it before starting a session.
pub static DEFAULT_STORAGE_FILE: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| Arc::new(Mutex::new(PathBuf::from("atas.json"))));

/// The line drawn between a prompt and the user's answer
pub static DIVIDER: Lazy<String> = Lazy::new(|| "_".repeat(60));
