//! Score Heuristics
//!
//! Deterministic, domain-keyed score labels. All are pure functions of the
//! URL, independent of the license lookup result. Quality has a finer
//! per-platform breakdown than adaptability and reusability.

use crate::classify::ResourceKind;

/// Online quality label, keyed by resource domain
pub fn quality(url: &str) -> String {
    let label = if url.contains("youtube.com") || url.contains("youtu.be") {
        "Quality score: High (YouTube verified content)"
    } else if url.contains("books.google") {
        "Quality score: High (Google Books content)"
    } else {
        "Quality score: Moderate (Standard web content)"
    };
    label.to_string()
}

/// Online adaptability label
pub fn adaptability(_url: &str) -> String {
    "Adaptability score: Medium".to_string()
}

/// Online reusability label
pub fn reusability(_url: &str) -> String {
    "Reusability score: High".to_string()
}

/// Offline quality label, keyed by resource kind
pub fn offline_quality(kind: ResourceKind) -> String {
    let label = match kind {
        ResourceKind::Video => "Quality score: Moderate (YouTube content - offline evaluation)",
        ResourceKind::Document => "Quality score: Good (Google Books content - offline evaluation)",
        ResourceKind::Other => "Quality score: Unable to determine (offline)",
    };
    label.to_string()
}

/// Offline adaptability label, keyed by resource kind
pub fn offline_adaptability(kind: ResourceKind) -> String {
    let label = match kind {
        ResourceKind::Video => "Adaptability score: Limited (Video content - offline evaluation)",
        ResourceKind::Document => "Adaptability score: Moderate (Book content - offline evaluation)",
        ResourceKind::Other => "Adaptability score: Unable to determine (offline)",
    };
    label.to_string()
}

/// Offline reusability label, keyed by resource kind
pub fn offline_reusability(kind: ResourceKind) -> String {
    let label = match kind {
        ResourceKind::Video => "Reusability score: Limited (Platform dependent - offline evaluation)",
        ResourceKind::Document => "Reusability score: Moderate (Book content - offline evaluation)",
        ResourceKind::Other => "Reusability score: Unable to determine (offline)",
    };
    label.to_string()
}
