// src/output/mod.rs
// =============================================================================
// This module renders the activity digest for the terminal.
//
// Submodules:
// - theme: console styles (colored or plain)
// - format: EventSummary -> display lines with icons and ages
// - present: writes the intro, the lines, or the notice/error line
// =============================================================================

mod format;
mod present;
mod theme;

pub use format::format_summary;
pub use present::{present_error, present_summary};
pub use theme::Theme;
