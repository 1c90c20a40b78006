//! Video capability extraction

use std::collections::BTreeSet;

use crate::mpd::query::attribute_u64;
use crate::mpd::MpdTree;

use super::{has_multiple_values, join_or, join_or_not_specified, kbps, CapabilityRow, Category, CategoryRows};

/// Transfer characteristics code for SMPTE ST 2084 (PQ / HDR10)
const TC_PQ: &str = "16";
/// Transfer characteristics code for ARIB STD-B67 (HLG)
const TC_HLG: &str = "18";

/// Resolution tiers, judged on the height of the largest resolution
const TIERS: [(&str, u64); 3] = [
    ("UHD Available (≥2160p)", 2160),
    ("FHD Available (≥1080p)", 1080),
    ("HD Available (≥720p)", 720),
];

/// A representation's pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u64,
    pub height: u64,
}

impl Resolution {
    pub fn pixels(&self) -> u64 {
        self.width.saturating_mul(self.height)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// Largest and smallest resolution by pixel count
///
/// On equal pixel counts the first occurrence wins for both ends.
pub fn resolution_bounds(resolutions: &[Resolution]) -> Option<(Resolution, Resolution)> {
    let first = *resolutions.first()?;
    let (max, min) = resolutions
        .iter()
        .skip(1)
        .fold((first, first), |(max, min), r| {
            let max = if r.pixels() > max.pixels() { *r } else { max };
            let min = if r.pixels() < min.pixels() { *r } else { min };
            (max, min)
        });
    Some((max, min))
}

/// Extract video capability rows
pub fn extract_video_capabilities(tree: MpdTree<'_, '_>) -> Vec<CapabilityRow> {
    let mut rows = CategoryRows::new(Category::Video);

    let video_sets: Vec<_> = tree.adaptation_sets_of_type(tree.root(), "video").collect();
    if video_sets.is_empty() {
        rows.push_flag("Video Tracks Present", false);
        return rows.into_rows();
    }
    rows.push_flag("Video Tracks Present", true);

    let mut codecs = BTreeSet::new();
    let mut resolutions = Vec::new();
    let mut bitrates = Vec::new();
    let mut hdr_types = BTreeSet::new();

    for rep in video_sets
        .iter()
        .flat_map(|aset| tree.children(*aset, "Representation"))
    {
        if let Some(codec) = rep.attribute("codecs").filter(|c| !c.is_empty()) {
            if codec.to_lowercase().contains("dvhe") {
                hdr_types.insert("Dolby Vision".to_string());
            }
            codecs.insert(codec.to_string());
        }

        if let (Some(width), Some(height)) =
            (attribute_u64(&rep, "width"), attribute_u64(&rep, "height"))
        {
            resolutions.push(Resolution { width, height });
        }

        if let Some(bandwidth) = attribute_u64(&rep, "bandwidth") {
            bitrates.push(bandwidth);
        }

        match rep.attribute("transferCharacteristics") {
            Some(TC_PQ) => {
                hdr_types.insert("PQ (HDR10)".to_string());
            }
            Some(TC_HLG) => {
                hdr_types.insert("HLG".to_string());
            }
            _ => {}
        }
    }

    tracing::debug!(
        "Video: {} adaptation sets, {} codecs, {} resolutions, {} bitrates",
        video_sets.len(),
        codecs.len(),
        resolutions.len(),
        bitrates.len()
    );

    rows.push_flag("HDR Present", !hdr_types.is_empty());
    rows.push("HDR Type(s)", join_or(&hdr_types, "Not applicable"));
    rows.push("Video Codec(s)", join_or_not_specified(&codecs));

    if let Some((max, min)) = resolution_bounds(&resolutions) {
        rows.push("Max Resolution", max.to_string());
        rows.push("Min Resolution", min.to_string());
        for (criterion, height) in TIERS {
            rows.push_flag(criterion, max.height >= height);
        }
    }

    if let (Some(max), Some(min)) = (bitrates.iter().max(), bitrates.iter().min()) {
        rows.push("Max Video Bitrate", kbps(*max));
        rows.push("Min Video Bitrate", kbps(*min));
        rows.push_flag("Multiple Bitrate Ladder Present", has_multiple_values(&bitrates));
    }

    rows.into_rows()
}
