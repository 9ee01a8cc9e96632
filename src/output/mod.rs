//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    colored_feedback, colored_guess, format_scoreboard, paint, palette_legend, print_check_result,
};
