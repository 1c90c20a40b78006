//! Subtitle capability extraction

use std::collections::BTreeSet;

use crate::mpd::MpdTree;

use super::{join_or_not_specified, CapabilityRow, Category, CategoryRows};

/// Extract subtitle capability rows
///
/// The format set mixes the adaptation set MIME type with representation
/// codec strings (`application/ttml+xml`, `stpp`, `wvtt`, ...).
pub fn extract_subtitle_capabilities(tree: MpdTree<'_, '_>) -> Vec<CapabilityRow> {
    let mut rows = CategoryRows::new(Category::Subtitles);

    let subtitle_sets: Vec<_> = tree.adaptation_sets_of_type(tree.root(), "text").collect();
    if subtitle_sets.is_empty() {
        rows.push_flag("Subtitles Present", false);
        return rows.into_rows();
    }
    rows.push_flag("Subtitles Present", true);

    let mut languages = BTreeSet::new();
    let mut formats = BTreeSet::new();
    let mut forced_present = false;

    for aset in &subtitle_sets {
        if let Some(lang) = aset.attribute("lang").filter(|l| !l.is_empty()) {
            languages.insert(lang.to_string());
        }

        forced_present |= tree.children(*aset, "Role").any(|role| {
            role.attribute("value")
                .is_some_and(|v| v.eq_ignore_ascii_case("forced"))
        });

        let mime = aset.attribute("mimeType").filter(|m| !m.is_empty());
        for rep in tree.children(*aset, "Representation") {
            if let Some(mime) = mime {
                formats.insert(mime.to_string());
            }
            if let Some(codec) = rep.attribute("codecs").filter(|c| !c.is_empty()) {
                formats.insert(codec.to_string());
            }
        }
    }

    let periods_with_subs = tree
        .periods()
        .filter(|period| tree.adaptation_sets_of_type(*period, "text").next().is_some())
        .count();

    tracing::debug!(
        "Subtitles: {} adaptation sets across {} periods, formats={:?}",
        subtitle_sets.len(),
        periods_with_subs,
        formats
    );

    rows.push("Subtitle Languages", join_or_not_specified(&languages));
    rows.push("Subtitle Format(s)", join_or_not_specified(&formats));
    rows.push_flag("Forced Subtitles Present", forced_present);
    rows.push_flag("Multiple Subtitle AdaptationSets", subtitle_sets.len() > 1);
    rows.push_flag("Subtitles Across Multiple Periods", periods_with_subs > 1);

    rows.into_rows()
}
