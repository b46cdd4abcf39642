//! Terminal output formatting
//!
//! Emoji rows, colored tiles, share text and printers for command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_calendar, print_challenge_links, print_check_result, print_decoded, print_today_result,
};
pub use formatters::{Palette, feedback_to_emoji, share_text};
