//! DRM and encryption capability extraction
//!
//! ContentProtection elements are looked up both in the DASH namespace and
//! without a namespace, since manifests are inconsistent about it.

use std::collections::BTreeSet;

use crate::mpd::MpdTree;

use super::{join_or, yes_no, CapabilityRow, Category, CategoryRows};

/// Well-known DRM system IDs (lower case) and their names
pub const DRM_SYSTEMS: [(&str, &str); 3] = [
    ("edef8ba9-79d6-4ace-a3c8-27dcd51d21ed", "Widevine"),
    ("9a04f079-9840-4286-ab92-e65be0885f95", "PlayReady"),
    ("94ce86fb-07ff-4f43-adb8-93d2fa968ca2", "FairPlay"),
];

/// Names of the known DRM systems whose ID appears anywhere in `scheme_id_uri`
pub fn identify_drm_systems(scheme_id_uri: &str) -> impl Iterator<Item = &'static str> {
    let scheme = scheme_id_uri.to_lowercase();
    DRM_SYSTEMS
        .iter()
        .filter(move |(uuid, _)| scheme.contains(uuid))
        .map(|(_, name)| *name)
}

/// Extract DRM capability rows
pub fn extract_drm_capabilities(tree: MpdTree<'_, '_>) -> Vec<CapabilityRow> {
    let mut rows = CategoryRows::new(Category::Drm);

    let protections: Vec<_> = tree
        .descendants(tree.root(), "ContentProtection")
        .chain(tree.descendants_unqualified(tree.root(), "ContentProtection"))
        .collect();

    if protections.is_empty() {
        rows.push("Content Encrypted", yes_no(false));
        rows.push("DRM Systems Present", "None");
        return rows.into_rows();
    }
    rows.push("Content Encrypted", yes_no(true));

    let drm_systems: BTreeSet<String> = protections
        .iter()
        .flat_map(|cp| identify_drm_systems(cp.attribute("schemeIdUri").unwrap_or_default()))
        .map(str::to_string)
        .collect();

    let clear_tracks = tree
        .descendants(tree.root(), "AdaptationSet")
        .any(|aset| !tree.has_content_protection(aset));

    tracing::debug!(
        "DRM: {} ContentProtection elements, systems={:?}, clear tracks={}",
        protections.len(),
        drm_systems,
        clear_tracks
    );

    rows.push("DRM Systems Present", join_or(&drm_systems, "Unknown / Custom"));
    rows.push_flag("Multiple DRM Systems Present", drm_systems.len() > 1);
    rows.push_flag("Clear (Unencrypted) Tracks Present", clear_tracks);

    rows.into_rows()
}
