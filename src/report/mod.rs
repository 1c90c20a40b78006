//! Report rendering
//!
//! Turns the collected capability rows and the period timeline into the
//! plain-text report:
//! - Pipe-delimited capability table
//! - `===== PERIOD TIMELINE =====` block, one stanza per period

pub mod table;
pub mod timeline;

pub use table::format_table;
pub use timeline::format_period_timeline;

use crate::extract::CapabilityRow;
use crate::timeline::PeriodEntry;

/// Render the full report text
pub fn render_report(rows: &[CapabilityRow], timeline: &[PeriodEntry]) -> String {
    let mut output = format_table(rows);
    output.push('\n');
    output.push_str(&format_period_timeline(timeline));
    output
}
