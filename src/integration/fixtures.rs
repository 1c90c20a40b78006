//! Test fixtures for integration tests
//!
//! Manifests covering the main report branches without touching the network.

/// A manifest plus, where available, its expected report
#[derive(Debug, Clone)]
pub struct TestManifest {
    pub name: &'static str,
    pub description: &'static str,
    pub xml: &'static str,
    pub expected_report: Option<&'static str>,
}

impl TestManifest {
    /// Three-period VOD with Widevine + PlayReady, HDR10 UHD ladder, forced subtitles
    pub fn vod_multi_drm() -> Self {
        Self {
            name: "vod_multi_drm",
            description: "Static multi-period manifest with multi-DRM and a clear text track",
            xml: include_str!("testdata/vod.mpd"),
            expected_report: Some(include_str!("testdata/vod_report.txt")),
        }
    }

    /// Single-period live manifest with an SCTE-35 EventStream
    pub fn live_event_stream() -> Self {
        Self {
            name: "live_event_stream",
            description: "Dynamic manifest, clear content, EventStream ad signaling",
            xml: include_str!("testdata/live.mpd"),
            expected_report: Some(include_str!("testdata/live_report.txt")),
        }
    }

    /// Manifest using a `dash:` prefix with an unprefixed ContentProtection
    pub fn prefixed_namespace() -> Self {
        Self {
            name: "prefixed_namespace",
            description: "Prefixed DASH namespace, FairPlay protection outside the namespace",
            xml: r#"<?xml version="1.0"?>
<dash:MPD xmlns:dash="urn:mpeg:dash:schema:mpd:2011" type="static">
  <dash:Period duration="PT45S">
    <dash:AdaptationSet contentType="video">
      <ContentProtection schemeIdUri="urn:uuid:94ce86fb-07ff-4f43-adb8-93d2fa968ca2"/>
      <dash:Representation codecs="dvhe.05.06" width="3840" height="2160" bandwidth="12000000"/>
    </dash:AdaptationSet>
  </dash:Period>
</dash:MPD>"#,
            expected_report: None,
        }
    }

    /// Chained and explicit period timing
    pub fn chained_periods() -> Self {
        Self {
            name: "chained_periods",
            description: "Derived starts followed by an explicit open-ended period",
            xml: r#"<MPD xmlns="urn:mpeg:dash:schema:mpd:2011">
  <Period duration="PT10M"/>
  <Period duration="PT5M"/>
  <Period start="PT1H"/>
</MPD>"#,
            expected_report: None,
        }
    }

    /// Get all test manifests
    pub fn all() -> Vec<Self> {
        vec![
            Self::vod_multi_drm(),
            Self::live_event_stream(),
            Self::prefixed_namespace(),
            Self::chained_periods(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names_unique() {
        let all = TestManifest::all();
        let mut names: Vec<_> = all.iter().map(|m| m.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_fixtures_are_well_formed() {
        for manifest in TestManifest::all() {
            assert!(
                roxmltree::Document::parse(manifest.xml).is_ok(),
                "{} ({}) is not well-formed",
                manifest.name,
                manifest.description
            );
        }
    }
}
