//! Capability table formatting

use crate::extract::CapabilityRow;

const HEADER: &str = "| S.No | Capability Category | Capability / Criteria | Available in MPD |";
const SEPARATOR: &str = "|-----:|---------------------|----------------------|------------------|";

/// Format capability rows as a pipe-delimited table
///
/// Serial numbers start at 1. Category and criterion are left-aligned to a
/// minimum width; longer values widen their cell rather than being cut.
pub fn format_table(rows: &[CapabilityRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(HEADER.to_string());
    lines.push(SEPARATOR.to_string());

    for (i, row) in rows.iter().enumerate() {
        lines.push(format!(
            "| {:<4} | {:<19} | {:<20} | {} |",
            i + 1,
            row.category.label(),
            row.criterion,
            row.value
        ));
    }

    lines.join("\n")
}
