//! Artifact persistence: best-effort dual writes with atomic renames.

use std::path::{Path, PathBuf};

use industrykb_shared::{IndustryKbError, KnowledgeBaseDocument, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, error, info, instrument};

use crate::summary::render_summary;

/// File name of the structured JSON artifact.
pub const KNOWLEDGE_BASE_FILE: &str = "website_knowledge_base.json";

/// File name of the flattened summary artifact.
pub const SUMMARY_FILE: &str = "ai_context_summary.txt";

/// Metadata for a single written artifact file.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactMeta {
    pub filename: String,
    pub sha256: String,
    pub size_bytes: usize,
}

/// Outcome of a dual artifact write.
#[derive(Debug, Clone)]
pub struct ArtifactReport {
    /// Destination of the structured artifact.
    pub json_path: PathBuf,
    /// Destination of the summary artifact.
    pub summary_path: PathBuf,
    /// Metadata for each artifact that was actually written.
    pub written: Vec<ArtifactMeta>,
}

/// Serialize `doc` and persist both artifacts under `output_dir`.
///
/// The two writes are independent: a failure on one never suppresses
/// the attempt on the other. Each failure is logged with its path; if
/// any write failed, the first failure is returned after both attempts
/// so the run still reports overall failure.
#[instrument(skip_all, fields(output_dir = %output_dir.display()))]
pub fn write_artifacts(
    doc: &KnowledgeBaseDocument,
    output_dir: &Path,
) -> Result<ArtifactReport> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| IndustryKbError::io(output_dir, e))?;

    // Encode both renderings up front; encoding failures abort before
    // any file is touched.
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| IndustryKbError::Serialization(e.to_string()))?;
    let summary = render_summary(doc);

    let json_path = output_dir.join(KNOWLEDGE_BASE_FILE);
    let summary_path = output_dir.join(SUMMARY_FILE);

    let mut written = Vec::with_capacity(2);
    let mut first_failure: Option<IndustryKbError> = None;

    for (path, content) in [(&json_path, json.as_str()), (&summary_path, summary.as_str())] {
        match write_artifact(path, content) {
            Ok(meta) => {
                debug!(file = %meta.filename, size = meta.size_bytes, "wrote artifact");
                written.push(meta);
            }
            Err(err) => {
                error!(path = %path.display(), %err, "artifact write failed");
                first_failure.get_or_insert(err);
            }
        }
    }

    if let Some(err) = first_failure {
        return Err(err);
    }

    info!(count = written.len(), "artifact writes complete");

    Ok(ArtifactReport {
        json_path,
        summary_path,
        written,
    })
}

/// Write one artifact atomically: write to a temp file, then rename.
///
/// A reader never observes a partially written artifact; on failure the
/// temp file is removed and the previous artifact (if any) is intact.
fn write_artifact(path: &Path, content: &str) -> Result<ArtifactMeta> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp = path.with_file_name(format!(".{filename}.tmp"));

    std::fs::write(&temp, content).map_err(|e| IndustryKbError::write_failure(&temp, e))?;

    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(IndustryKbError::write_failure(path, e));
    }

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    Ok(ArtifactMeta {
        filename,
        sha256: hash,
        size_bytes: content.len(),
    })
}
