//! Period timeline formatting

use crate::duration::format_duration;
use crate::timeline::PeriodEntry;

/// Format the period timeline block
pub fn format_period_timeline(timeline: &[PeriodEntry]) -> String {
    let mut lines = vec![
        String::new(),
        "===== PERIOD TIMELINE =====".to_string(),
        String::new(),
    ];

    for period in timeline {
        lines.push(format!("Period {}:", period.index));
        lines.push(format!(
            "  Start    : {} ({})",
            format_duration(period.start),
            period.source
        ));
        lines.push(format!(
            "  Duration : {}",
            period
                .duration
                .map_or_else(|| "Not specified".to_string(), |d| format_duration(Some(d)))
        ));
        lines.push(format!(
            "  End      : {}",
            period
                .end
                .map_or_else(|| "Not determinable".to_string(), |e| format_duration(Some(e)))
        ));
        lines.push(String::new());
    }

    lines.join("\n")
}
