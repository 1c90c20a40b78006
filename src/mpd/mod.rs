//! MPD document loading
//!
//! This module owns everything between the file on disk and the read-only
//! element tree the extractors work on:
//! - Reading the manifest text
//! - Building the XML tree (roxmltree)
//! - The namespace binding used for `dash:` qualified lookups

pub mod query;

use std::path::Path;

use crate::error::{AnalyzerError, Result};

pub use query::MpdTree;

/// Namespace URI of MPEG-DASH manifests
pub const DASH_NAMESPACE_URI: &str = "urn:mpeg:dash:schema:mpd:2011";

/// Prefix → URI binding for qualified element lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpdNamespace {
    /// Prefix used in log output (`dash`)
    pub prefix: String,
    /// Namespace URI that qualified elements must carry
    pub uri: String,
}

impl Default for MpdNamespace {
    fn default() -> Self {
        Self {
            prefix: "dash".to_string(),
            uri: DASH_NAMESPACE_URI.to_string(),
        }
    }
}

/// Read the manifest text from disk
pub fn load_mpd<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| AnalyzerError::io(path, e))
}

/// Build the element tree for a manifest
///
/// No schema validation happens here; any well-formed XML is accepted.
pub fn parse_mpd(text: &str) -> Result<roxmltree::Document<'_>> {
    let doc = roxmltree::Document::parse(text)?;
    tracing::debug!(
        "Parsed MPD root <{}> ({} nodes)",
        doc.root_element().tag_name().name(),
        doc.descendants().count()
    );
    Ok(doc)
}
