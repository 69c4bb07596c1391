//! Knowledge-base serialization: the structured JSON artifact, the
//! flattened prompt-context summary, and aggregate statistics.
//!
//! The two artifacts serve different consumers — machine-readable full
//! context vs. token-budget-constrained prompt injection — and are both
//! regenerated from the same in-memory [`KnowledgeBaseDocument`] so they
//! cannot drift apart.

mod summary;
mod writer;

use industrykb_shared::KnowledgeBaseDocument;
use serde::Serialize;

pub use summary::render_summary;
pub use writer::{ArtifactMeta, ArtifactReport, KNOWLEDGE_BASE_FILE, SUMMARY_FILE, write_artifacts};

/// Aggregate counts computed from a document for operator visibility.
///
/// Not persisted — recomputed from the document on demand, so a count
/// that disagrees with the document always indicates a synthesis defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Number of industries.
    pub industries: usize,
    /// Total module count summed across all industries.
    pub modules: usize,
    /// Number of pages.
    pub pages: usize,
}

impl DocumentStats {
    /// Compute the counts for `doc`.
    pub fn of(doc: &KnowledgeBaseDocument) -> Self {
        Self {
            industries: doc.industries.len(),
            modules: doc.modules.values().map(Vec::len).sum(),
            pages: doc.pages.len(),
        }
    }
}
