//! Capability extraction
//!
//! Each submodule is one independent pass over the read-only MPD tree:
//! - General presentation attributes, periods and ad signaling
//! - Video tracks (codecs, resolutions, bitrate ladder, HDR)
//! - Audio tracks (codecs, languages, bitrates, surround)
//! - Subtitle tracks (languages, formats, forced, multi-period)
//! - DRM (ContentProtection schemes, clear tracks)
//!
//! Passes share no state, so their results do not depend on the order in
//! which they run. Only the concatenation order in [`EXTRACTORS`] is fixed.

pub mod audio;
pub mod drm;
pub mod general;
pub mod subtitle;
pub mod video;

use std::collections::BTreeSet;
use std::fmt;

use crate::mpd::MpdTree;

pub use audio::extract_audio_capabilities;
pub use drm::extract_drm_capabilities;
pub use general::extract_general_capabilities;
pub use subtitle::extract_subtitle_capabilities;
pub use video::extract_video_capabilities;

/// Value used for empty aggregation sets
pub const NOT_SPECIFIED: &str = "Not specified";

/// Report category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    General,
    Video,
    Audio,
    Subtitles,
    Drm,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Video => "Video",
            Category::Audio => "Audio",
            Category::Subtitles => "Subtitles",
            Category::Drm => "DRM",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the capability report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRow {
    pub category: Category,
    pub criterion: &'static str,
    pub value: String,
}

impl CapabilityRow {
    pub fn new(category: Category, criterion: &'static str, value: impl Into<String>) -> Self {
        Self {
            category,
            criterion,
            value: value.into(),
        }
    }
}

/// Signature shared by every extraction pass
pub type Extractor = for<'a, 'input> fn(MpdTree<'a, 'input>) -> Vec<CapabilityRow>;

/// All passes in report order
pub const EXTRACTORS: [(Category, Extractor); 5] = [
    (Category::General, extract_general_capabilities),
    (Category::Video, extract_video_capabilities),
    (Category::Audio, extract_audio_capabilities),
    (Category::Subtitles, extract_subtitle_capabilities),
    (Category::Drm, extract_drm_capabilities),
];

/// Ordered row collector for a single category
pub(crate) struct CategoryRows {
    category: Category,
    rows: Vec<CapabilityRow>,
}

impl CategoryRows {
    pub(crate) fn new(category: Category) -> Self {
        Self {
            category,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, criterion: &'static str, value: impl Into<String>) {
        self.rows
            .push(CapabilityRow::new(self.category, criterion, value));
    }

    pub(crate) fn push_flag(&mut self, criterion: &'static str, flag: bool) {
        self.push(criterion, yes_no(flag));
    }

    pub(crate) fn into_rows(self) -> Vec<CapabilityRow> {
        self.rows
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Sorted, comma-separated set members, or "Not specified" when empty
pub(crate) fn join_or_not_specified(values: &BTreeSet<String>) -> String {
    join_or(values, NOT_SPECIFIED)
}

pub(crate) fn join_or(values: &BTreeSet<String>, fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// Integer-truncated kilobits per second
pub(crate) fn kbps(bits_per_second: u64) -> String {
    format!("{} kbps", bits_per_second / 1000)
}

/// Whether a bitrate list holds more than one distinct value
pub(crate) fn has_multiple_values(values: &[u64]) -> bool {
    values.iter().collect::<BTreeSet<_>>().len() > 1
}

/// Look up a row value by criterion
#[cfg(test)]
pub(crate) fn value_of<'r>(rows: &'r [CapabilityRow], criterion: &str) -> Option<&'r str> {
    rows.iter()
        .find(|r| r.criterion == criterion)
        .map(|r| r.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Drm.to_string(), "DRM");
        assert_eq!(Category::Subtitles.label(), "Subtitles");
    }

    #[test]
    fn test_extractor_order() {
        let order: Vec<_> = EXTRACTORS.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::General,
                Category::Video,
                Category::Audio,
                Category::Subtitles,
                Category::Drm
            ]
        );
    }

    #[test]
    fn test_join_sorted() {
        let set: BTreeSet<String> = ["mp4a.40.2", "ec-3", "ac-3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(join_or_not_specified(&set), "ac-3, ec-3, mp4a.40.2");
        assert_eq!(join_or_not_specified(&BTreeSet::new()), "Not specified");
    }

    #[test]
    fn test_kbps_truncates() {
        assert_eq!(kbps(128_999), "128 kbps");
        assert_eq!(kbps(999), "0 kbps");
    }

    #[test]
    fn test_multiple_values() {
        assert!(!has_multiple_values(&[]));
        assert!(!has_multiple_values(&[500, 500]));
        assert!(has_multiple_values(&[500, 800]));
    }
}
