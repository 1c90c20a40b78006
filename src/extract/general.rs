//! General MPD capability extraction
//!
//! Presentation type, profiles, buffering, period structure and ad signaling.

use crate::duration::{format_duration, parse_duration};
use crate::mpd::MpdTree;
use crate::timeline::{extract_period_timeline, max_period_end, total_playtime};

use super::{CapabilityRow, Category, CategoryRows, NOT_SPECIFIED};

const NOT_SPECIFIED_IN_MPD: &str = "Not specified in MPD";

/// Upper-case the first character and lower-case the rest
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// How ad breaks are signaled in the manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdMarker {
    PeriodBased,
    EventStream,
    None,
}

impl AdMarker {
    /// Multiple periods take precedence over EventStream elements
    pub fn detect(has_event_stream: bool, multi_period: bool) -> Self {
        if multi_period {
            AdMarker::PeriodBased
        } else if has_event_stream {
            AdMarker::EventStream
        } else {
            AdMarker::None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdMarker::PeriodBased => "Period-based",
            AdMarker::EventStream => "EventStream",
            AdMarker::None => NOT_SPECIFIED,
        }
    }
}

/// Extract general capability rows
pub fn extract_general_capabilities(tree: MpdTree<'_, '_>) -> Vec<CapabilityRow> {
    let mut rows = CategoryRows::new(Category::General);
    let root = tree.root();

    let mpd_type = capitalize(root.attribute("type").unwrap_or("static"));
    let is_dynamic = mpd_type.eq_ignore_ascii_case("dynamic");
    rows.push("MPD Type", mpd_type);

    rows.push(
        "MPD Profiles",
        root.attribute("profiles")
            .filter(|p| !p.is_empty())
            .unwrap_or(NOT_SPECIFIED),
    );

    rows.push(
        "Minimum Buffer Time",
        format_duration(parse_duration(root.attribute("minBufferTime"))),
    );

    rows.push(
        "Availability Start Time",
        root.attribute("availabilityStartTime")
            .filter(|t| !t.is_empty())
            .unwrap_or(NOT_SPECIFIED),
    );

    let time_shift = if is_dynamic {
        format_duration(parse_duration(root.attribute("timeShiftBufferDepth")))
    } else {
        "Not applicable (VOD)".to_string()
    };
    rows.push("Time Shift Buffer Depth", time_shift);

    let timeline = extract_period_timeline(tree);
    let multi_period = timeline.len() > 1;
    rows.push("Number of Periods", timeline.len().to_string());
    rows.push_flag("Multi-Period Content", multi_period);

    rows.push(
        "Total Playtime",
        match total_playtime(&timeline) {
            Some(total) => format_duration(Some(total)),
            None => NOT_SPECIFIED_IN_MPD.to_string(),
        },
    );

    rows.push(
        "Max Period End Time",
        match max_period_end(&timeline) {
            Some(end) => format_duration(Some(end)),
            None => NOT_SPECIFIED_IN_MPD.to_string(),
        },
    );

    let has_event_stream = tree.descendants(root, "EventStream").next().is_some();
    let marker = AdMarker::detect(has_event_stream, multi_period);
    rows.push_flag("Ad Signaling Present", marker != AdMarker::None);
    rows.push("Ad Marker Type", marker.label());

    rows.into_rows()
}
