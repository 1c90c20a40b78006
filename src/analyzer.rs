//! Analysis pipeline - load, extract, build timeline, render, write

use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::error::{AnalyzerError, Result};
use crate::extract::{CapabilityRow, EXTRACTORS};
use crate::mpd::{load_mpd, parse_mpd, MpdNamespace, MpdTree};
use crate::report::render_report;
use crate::timeline::extract_period_timeline;

/// Run every extraction pass and concatenate rows in report order
pub fn collect_rows(tree: MpdTree<'_, '_>) -> Vec<CapabilityRow> {
    let mut rows = Vec::new();
    for (category, extract) in EXTRACTORS {
        let category_rows = extract(tree);
        tracing::debug!("{}: {} rows", category, category_rows.len());
        rows.extend(category_rows);
    }
    rows
}

/// Analyse manifest text and render the report
pub fn analyze_text(text: &str, namespace: &MpdNamespace) -> Result<String> {
    let doc = parse_mpd(text)?;
    let tree = MpdTree::new(&doc, namespace);
    tracing::debug!(
        "Resolving {}: elements against {}",
        tree.namespace().prefix,
        tree.namespace().uri
    );

    let rows = collect_rows(tree);
    let timeline = extract_period_timeline(tree);

    tracing::info!(
        "Extracted {} capability rows, {} periods",
        rows.len(),
        timeline.len()
    );

    Ok(render_report(&rows, &timeline))
}

/// Analyse a manifest file and render the report
pub fn analyze_file<P: AsRef<Path>>(path: P, namespace: &MpdNamespace) -> Result<String> {
    let path = path.as_ref();
    tracing::info!("Analysing MPD: {:?}", path);
    let text = load_mpd(path)?;
    analyze_text(&text, namespace)
}

/// Analyse the configured manifest and write the report
///
/// Nothing is written when loading or parsing the manifest fails.
pub fn run(config: &AnalyzerConfig) -> Result<()> {
    let report = analyze_file(&config.document_path, &config.namespace)?;

    std::fs::write(&config.output_path, report)
        .map_err(|e| AnalyzerError::io(&config.output_path, e))?;

    tracing::info!("Report written to {:?}", config.output_path);
    Ok(())
}
