//! Resource Classification
//!
//! Maps a URL to a resource kind by host-name pattern matching. Substring
//! matching on purpose: classification must stay robust against
//! near-malformed input, so no strict URL parsing happens here.

/// Classification tag derived from a URL's host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Video,
    Document,
    Other,
}

impl ResourceKind {
    /// Platform label used in license details
    pub fn platform(&self) -> &'static str {
        match self {
            ResourceKind::Video => "YouTube",
            ResourceKind::Document => "Google Books",
            ResourceKind::Other => "Unknown",
        }
    }
}

/// Classify a URL into a resource kind
///
/// Total over arbitrary input; anything that matches no known host pattern
/// is `Other`.
pub fn classify(url: &str) -> ResourceKind {
    if url.contains("youtube.com") || url.contains("youtu.be") {
        ResourceKind::Video
    } else if url.contains("books.google") {
        ResourceKind::Document
    } else {
        ResourceKind::Other
    }
}
