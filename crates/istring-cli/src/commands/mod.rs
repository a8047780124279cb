//! CLI command implementations.

mod check;
mod choice;
mod format;
mod parse;
mod shared;

pub use check::{run_check, CheckArgs};
pub use choice::{run_choice, ChoiceArgs};
pub use format::{run_format, FormatArgs};
pub use parse::{run_parse, ParseArgs};
