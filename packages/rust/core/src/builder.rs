//! Knowledge base builder: merge the static taxonomy with the indexed
//! page snapshot into one bounded, serializable document.

use std::path::Path;

use tracing::{debug, info, instrument};

use industrykb_shared::{KnowledgeBaseDocument, PageRecord, Result, TruncatedPage};
use industrykb_storage::Storage;
use industrykb_taxonomy::Taxonomy;

/// Merge a taxonomy and a page snapshot into a document.
///
/// Pure: no I/O, no shared state. The taxonomy is deep-copied so the
/// document never aliases the static store, and `pages` are converted
/// one-to-one in the order given — no re-sorting, no de-duplication.
pub fn assemble_document(
    taxonomy: &Taxonomy,
    pages: Vec<PageRecord>,
) -> KnowledgeBaseDocument {
    let taxonomy = taxonomy.clone();

    KnowledgeBaseDocument {
        company_info: taxonomy.company,
        industries: taxonomy.industries,
        modules: taxonomy.modules,
        pages: pages.into_iter().map(TruncatedPage::from_record).collect(),
    }
}

/// Build a fresh document from the current taxonomy and the current
/// content-index snapshot at `db_path`.
///
/// The storage handle is held only for the duration of the read and
/// released before the merge, on every exit path. A failing open or
/// read surfaces as `SourceUnavailable` and produces no document.
#[instrument(skip_all, fields(db_path = %db_path.display()))]
pub async fn build(db_path: &Path) -> Result<KnowledgeBaseDocument> {
    let pages = {
        let storage = Storage::open(db_path).await?;
        storage.list_pages().await?
        // handle dropped here, before the merge
    };

    debug!(page_count = pages.len(), "page snapshot read");

    let doc = assemble_document(Taxonomy::get(), pages);
    info!(
        industries = doc.industries.len(),
        pages = doc.pages.len(),
        "document assembled"
    );
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url_path: &str, content: &str) -> PageRecord {
        PageRecord {
            url_path: url_path.into(),
            title: format!("Title of {url_path}"),
            content: content.into(),
            page_type: "landing".into(),
        }
    }

    #[test]
    fn one_document_page_per_record() {
        let records = vec![page("/", "a"), page("/about", "b"), page("/contact", "c")];
        let doc = assemble_document(Taxonomy::get(), records);
        assert_eq!(doc.pages.len(), 3);
    }

    #[test]
    fn page_order_matches_source_order() {
        let records = vec![page("/z", ""), page("/a", ""), page("/m", "")];
        let doc = assemble_document(Taxonomy::get(), records);
        let urls: Vec<&str> = doc.pages.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, ["/z", "/a", "/m"]);
    }

    #[test]
    fn duplicate_urls_are_kept() {
        let records = vec![page("/dup", "one"), page("/dup", "two")];
        let doc = assemble_document(Taxonomy::get(), records);
        assert_eq!(doc.pages.len(), 2);
    }

    #[test]
    fn industries_mirror_taxonomy_for_any_page_set() {
        let taxonomy = Taxonomy::get();

        for records in [vec![], vec![page("/unrelated", "aerospace pages")]] {
            let doc = assemble_document(taxonomy, records);
            let doc_keys: Vec<&String> = doc.industries.keys().collect();
            let tax_keys: Vec<&String> = taxonomy.industries.keys().collect();
            assert_eq!(doc_keys, tax_keys);
            assert_eq!(doc.modules, taxonomy.modules);
        }
    }

    #[test]
    fn company_info_is_the_fixed_pair() {
        let doc = assemble_document(Taxonomy::get(), vec![]);
        assert_eq!(doc.company_info.name, "IndustryHub");
        assert_eq!(
            doc.company_info.description,
            "ERP platform providing tailored solutions for various industries"
        );
    }

    #[test]
    fn long_content_is_bounded_in_document() {
        let doc = assemble_document(Taxonomy::get(), vec![page("/long", &"y".repeat(2000))]);
        assert_eq!(doc.pages[0].content.chars().count(), 503);
        assert!(doc.pages[0].content.ends_with("..."));
    }
}
