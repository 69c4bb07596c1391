//! Core domain types for the IndustryKB knowledge base.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum number of characters of page content persisted in the
/// knowledge base. Content beyond this is cut and an ellipsis appended.
pub const CONTENT_TRUNCATION_LIMIT: usize = 500;

/// Marker appended to truncated page content. Counted inside the
/// overall bound: truncated content is exactly 503 characters.
pub const TRUNCATION_MARKER: &str = "...";

// ---------------------------------------------------------------------------
// Taxonomy records
// ---------------------------------------------------------------------------

/// Fixed company identity included at the top of every document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
}

/// A curated industry vertical. Keyed by slug in the owning map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Glyph shown next to the name.
    pub icon: String,
}

/// A software module offered within one industry.
///
/// `id` is unique only within the owning industry; the `Vec<Module>`
/// order is presentation order and is preserved end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Position-stable identifier within the owning industry.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Glyph shown next to the name.
    pub icon: String,
}

// ---------------------------------------------------------------------------
// Page records
// ---------------------------------------------------------------------------

/// A page record as stored by the content indexer.
///
/// Immutable input for one build pass. Missing text columns are read
/// back as empty strings rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Site-relative path identifying the page.
    pub url_path: String,
    /// Page title (may be empty).
    pub title: String,
    /// Full extracted text content (arbitrary length, may be empty).
    pub content: String,
    /// Categorical page type (e.g., "landing", "dashboard").
    pub page_type: String,
}

/// A page as persisted in the knowledge base, with content bounded to
/// [`CONTENT_TRUNCATION_LIMIT`] characters plus the truncation marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncatedPage {
    /// Site-relative path identifying the page.
    pub url: String,
    /// Page title.
    pub title: String,
    /// Bounded content: at most 503 characters, never the uncut original
    /// when the source exceeded the limit.
    pub content: String,
    /// Categorical page type.
    #[serde(rename = "type")]
    pub page_type: String,
}

impl TruncatedPage {
    /// Build a bounded page from a raw [`PageRecord`].
    ///
    /// Content of 500 characters or fewer passes through unchanged;
    /// longer content is cut to exactly the first 500 characters with
    /// `"..."` appended. Counted in characters, not bytes, so multi-byte
    /// glyphs are never split.
    pub fn from_record(record: PageRecord) -> Self {
        Self {
            url: record.url_path,
            title: record.title,
            content: truncate_content(&record.content),
            page_type: record.page_type,
        }
    }
}

/// Apply the content truncation bound.
fn truncate_content(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(CONTENT_TRUNCATION_LIMIT) {
        // A 501st character exists: cut at the byte offset of the 500th
        // boundary and append the marker.
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
            out.push_str(&content[..cut]);
            out.push_str(TRUNCATION_MARKER);
            out
        }
        None => content.to_string(),
    }
}

// ---------------------------------------------------------------------------
// KnowledgeBaseDocument
// ---------------------------------------------------------------------------

/// The root artifact: curated taxonomy merged with indexed pages.
///
/// Field order here fixes the JSON top-level key order
/// (`company_info`, `industries`, `modules`, `pages`). The two maps use
/// `BTreeMap` so key order is deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseDocument {
    /// Fixed company identity.
    pub company_info: CompanyInfo,
    /// All curated industries, keyed by slug — present regardless of
    /// whether any page references them.
    pub industries: BTreeMap<String, Industry>,
    /// Curated module lists, keyed by industry slug. Only industries
    /// with curated lists appear; absence means "no modules defined".
    pub modules: BTreeMap<String, Vec<Module>>,
    /// One entry per indexed page, in source iteration order.
    pub pages: Vec<TruncatedPage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str) -> PageRecord {
        PageRecord {
            url_path: "/about".into(),
            title: "About".into(),
            content: content.into(),
            page_type: "info".into(),
        }
    }

    #[test]
    fn short_content_passes_through() {
        let page = TruncatedPage::from_record(record("hello"));
        assert_eq!(page.content, "hello");
    }

    #[test]
    fn content_at_exactly_limit_is_untouched() {
        let content = "x".repeat(500);
        let page = TruncatedPage::from_record(record(&content));
        assert_eq!(page.content, content);
        assert_eq!(page.content.chars().count(), 500);
    }

    #[test]
    fn content_one_over_limit_is_cut_with_marker() {
        let content = "x".repeat(501);
        let page = TruncatedPage::from_record(record(&content));
        assert_eq!(page.content, format!("{}...", "x".repeat(500)));
        assert_eq!(page.content.chars().count(), 503);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 600 multi-byte characters; a byte cut at 500 would split one.
        let content = "é".repeat(600);
        let page = TruncatedPage::from_record(record(&content));
        assert_eq!(page.content.chars().count(), 503);
        assert!(page.content.starts_with(&"é".repeat(500)));
        assert!(page.content.ends_with("..."));
    }

    #[test]
    fn empty_content_stays_empty() {
        let page = TruncatedPage::from_record(record(""));
        assert_eq!(page.content, "");
    }

    #[test]
    fn truncated_content_original_is_not_persisted() {
        let content = format!("{}TAIL", "x".repeat(500));
        let page = TruncatedPage::from_record(record(&content));
        assert!(!page.content.contains("TAIL"));
    }

    #[test]
    fn page_type_serializes_as_type() {
        let page = TruncatedPage::from_record(record("body"));
        let json = serde_json::to_string(&page).expect("serialize");
        assert!(json.contains(r#""type":"info""#));
        assert!(!json.contains("page_type"));
    }

    #[test]
    fn document_top_level_key_order() {
        let doc = KnowledgeBaseDocument {
            company_info: CompanyInfo {
                name: "Acme".into(),
                description: "desc".into(),
            },
            industries: BTreeMap::new(),
            modules: BTreeMap::new(),
            pages: vec![],
        };
        let json = serde_json::to_string(&doc).expect("serialize");
        let company = json.find("company_info").unwrap();
        let industries = json.find("industries").unwrap();
        let modules = json.find("modules").unwrap();
        let pages = json.find("pages").unwrap();
        assert!(company < industries && industries < modules && modules < pages);
    }

    #[test]
    fn document_roundtrip() {
        let mut industries = BTreeMap::new();
        industries.insert(
            "retail".to_string(),
            Industry {
                name: "Retail".into(),
                description: "Retail tools".into(),
                icon: "🛒".into(),
            },
        );
        let mut modules = BTreeMap::new();
        modules.insert(
            "retail".to_string(),
            vec![Module {
                id: 1,
                name: "Point of Sale (POS)".into(),
                description: "Checkout".into(),
                icon: "💳".into(),
            }],
        );
        let doc = KnowledgeBaseDocument {
            company_info: CompanyInfo {
                name: "Acme".into(),
                description: "desc".into(),
            },
            industries,
            modules,
            pages: vec![TruncatedPage::from_record(record("body"))],
        };

        let json = serde_json::to_string_pretty(&doc).expect("serialize");
        let parsed: KnowledgeBaseDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, doc);
    }
}
