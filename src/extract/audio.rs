//! Audio capability extraction

use std::collections::BTreeSet;

use crate::mpd::query::attribute_u64;
use crate::mpd::MpdTree;

use super::{has_multiple_values, join_or_not_specified, kbps, CapabilityRow, Category, CategoryRows};

/// Codec prefixes of Dolby Digital (AC-3) and Dolby Digital Plus (E-AC-3)
const SURROUND_CODEC_PREFIXES: [&str; 2] = ["ec-3", "ac-3"];

/// Check if a codec string names a surround-capable Dolby codec
pub fn is_surround_codec(codec: &str) -> bool {
    SURROUND_CODEC_PREFIXES
        .iter()
        .any(|prefix| codec.starts_with(prefix))
}

/// Extract audio capability rows
pub fn extract_audio_capabilities(tree: MpdTree<'_, '_>) -> Vec<CapabilityRow> {
    let mut rows = CategoryRows::new(Category::Audio);

    let audio_sets: Vec<_> = tree.adaptation_sets_of_type(tree.root(), "audio").collect();
    if audio_sets.is_empty() {
        rows.push_flag("Audio Tracks Present", false);
        return rows.into_rows();
    }
    rows.push_flag("Audio Tracks Present", true);

    let mut codecs = BTreeSet::new();
    let mut languages = BTreeSet::new();
    let mut bitrates = Vec::new();

    for aset in &audio_sets {
        // language lives on the adaptation set, not the representation
        if let Some(lang) = aset.attribute("lang").filter(|l| !l.is_empty()) {
            languages.insert(lang.to_string());
        }

        for rep in tree.children(*aset, "Representation") {
            if let Some(codec) = rep.attribute("codecs").filter(|c| !c.is_empty()) {
                codecs.insert(codec.to_string());
            }
            if let Some(bandwidth) = attribute_u64(&rep, "bandwidth") {
                bitrates.push(bandwidth);
            }
        }
    }

    tracing::debug!(
        "Audio: {} adaptation sets, codecs={:?}, languages={:?}",
        audio_sets.len(),
        codecs,
        languages
    );

    rows.push("Audio Codec(s)", join_or_not_specified(&codecs));
    rows.push("Audio Languages", join_or_not_specified(&languages));

    match (bitrates.iter().max(), bitrates.iter().min()) {
        (Some(max), Some(min)) => {
            rows.push("Max Audio Bitrate", kbps(*max));
            rows.push("Min Audio Bitrate", kbps(*min));
            rows.push_flag("Multiple Audio Bitrates Present", has_multiple_values(&bitrates));
        }
        _ => rows.push("Audio Bitrate Info", "Not specified"),
    }

    rows.push_flag("Multiple Audio AdaptationSets", audio_sets.len() > 1);
    rows.push_flag(
        "Surround-capable Codec Present",
        codecs.iter().any(|c| is_surround_codec(c)),
    );

    rows.into_rows()
}
