//! End-to-end integration tests

use std::collections::HashMap;

use chrono::TimeDelta;

use crate::analyzer::{analyze_text, collect_rows, run};
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::extract::{value_of, CapabilityRow, Category, EXTRACTORS};
use crate::integration::fixtures::TestManifest;
use crate::mpd::{MpdNamespace, MpdTree};
use crate::timeline::{extract_period_timeline, TimingSource};

fn rows_for(manifest: &TestManifest) -> Vec<CapabilityRow> {
    let doc = roxmltree::Document::parse(manifest.xml).unwrap();
    let ns = MpdNamespace::default();
    collect_rows(MpdTree::new(&doc, &ns))
}

#[test]
fn test_golden_reports() {
    for manifest in TestManifest::all() {
        let Some(expected) = manifest.expected_report else {
            continue;
        };
        let report = analyze_text(manifest.xml, &MpdNamespace::default()).unwrap();
        assert_eq!(report, expected, "report mismatch for {}", manifest.name);
    }
}

#[test]
fn test_run_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = TestManifest::vod_multi_drm();
    let document_path = dir.path().join("vod.mpd");
    std::fs::write(&document_path, manifest.xml).unwrap();

    let config = AnalyzerConfig::new(&document_path, dir.path().join("report.txt"));
    run(&config).unwrap();

    let written = std::fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(Some(written.as_str()), manifest.expected_report);
}

#[test]
fn test_run_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let document_path = dir.path().join("live.mpd");
    std::fs::write(&document_path, TestManifest::live_event_stream().xml).unwrap();

    let config = AnalyzerConfig::new(&document_path, dir.path().join("report.txt"));
    run(&config).unwrap();
    let first = std::fs::read(&config.output_path).unwrap();
    run(&config).unwrap();
    let second = std::fs::read(&config.output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_document_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = AnalyzerConfig::new(dir.path().join("missing.mpd"), dir.path().join("report.txt"));

    let err = run(&config).unwrap_err();
    assert!(matches!(err, AnalyzerError::Io { .. }));
    assert!(!config.output_path.exists());
}

#[test]
fn test_malformed_document_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let document_path = dir.path().join("broken.mpd");
    std::fs::write(&document_path, "<MPD><Period></MPD>").unwrap();

    let config = AnalyzerConfig::new(&document_path, dir.path().join("report.txt"));
    let err = run(&config).unwrap_err();
    assert!(matches!(err, AnalyzerError::Xml(_)));
    assert!(!config.output_path.exists());
}

#[test]
fn test_extractor_order_does_not_matter() {
    for manifest in TestManifest::all() {
        let doc = roxmltree::Document::parse(manifest.xml).unwrap();
        let ns = MpdNamespace::default();
        let tree = MpdTree::new(&doc, &ns);

        let forward: HashMap<Category, Vec<CapabilityRow>> =
            EXTRACTORS.iter().map(|(c, f)| (*c, f(tree))).collect();
        let reversed: HashMap<Category, Vec<CapabilityRow>> =
            EXTRACTORS.iter().rev().map(|(c, f)| (*c, f(tree))).collect();

        assert_eq!(forward, reversed, "order dependence in {}", manifest.name);
    }
}

#[test]
fn test_chained_period_timeline() {
    let manifest = TestManifest::chained_periods();
    let doc = roxmltree::Document::parse(manifest.xml).unwrap();
    let ns = MpdNamespace::default();
    let timeline = extract_period_timeline(MpdTree::new(&doc, &ns));

    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0].start, Some(TimeDelta::zero()));
    assert_eq!(timeline[0].end, Some(TimeDelta::minutes(10)));
    assert_eq!(timeline[0].source, TimingSource::Derived);
    assert_eq!(timeline[1].start, Some(TimeDelta::minutes(10)));
    assert_eq!(timeline[1].end, Some(TimeDelta::minutes(15)));
    assert_eq!(timeline[1].source, TimingSource::Derived);
    assert_eq!(timeline[2].start, Some(TimeDelta::hours(1)));
    assert_eq!(timeline[2].end, None);
    assert_eq!(timeline[2].source, TimingSource::Explicit);

    let rows = rows_for(&manifest);
    assert_eq!(value_of(&rows, "Max Period End Time"), Some("15m 00s"));
    assert_eq!(value_of(&rows, "Total Playtime"), Some("15m 00s"));
}

#[test]
fn test_prefixed_namespace() {
    let rows = rows_for(&TestManifest::prefixed_namespace());

    assert_eq!(value_of(&rows, "Number of Periods"), Some("1"));
    assert_eq!(value_of(&rows, "Total Playtime"), Some("0m 45s"));
    assert_eq!(value_of(&rows, "HDR Type(s)"), Some("Dolby Vision"));
    assert_eq!(value_of(&rows, "UHD Available (≥2160p)"), Some("Yes"));
    assert_eq!(value_of(&rows, "Audio Tracks Present"), Some("No"));
    assert_eq!(value_of(&rows, "Subtitles Present"), Some("No"));
    assert_eq!(value_of(&rows, "Content Encrypted"), Some("Yes"));
    assert_eq!(value_of(&rows, "DRM Systems Present"), Some("FairPlay"));
    assert_eq!(value_of(&rows, "Clear (Unencrypted) Tracks Present"), Some("No"));
}

#[test]
fn test_foreign_namespace_sees_nothing() {
    let ns = MpdNamespace {
        prefix: "dash".to_string(),
        uri: "urn:example:not-dash".to_string(),
    };
    let report = analyze_text(TestManifest::vod_multi_drm().xml, &ns).unwrap();

    assert!(report.contains("| Number of Periods    | 0 |"));
    assert!(report.contains("| Video Tracks Present | No |"));
    assert!(report.contains("| Content Encrypted    | No |"));
    assert!(report.ends_with("===== PERIOD TIMELINE =====\n"));
}
