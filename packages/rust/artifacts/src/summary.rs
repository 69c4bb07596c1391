//! Flattened prose rendering of the knowledge base for prompt context.
//!
//! Restates company info, every industry, and every curated module list
//! as plain text lines. Intentionally omits per-page content: the
//! summary exists for compact prompt injection, not as a full dump.

use std::fmt::Write;

use industrykb_shared::KnowledgeBaseDocument;

/// Fixed trailer describing platform-level capabilities.
const PLATFORM_FEATURES: &str = "\
PLATFORM FEATURES:
- Industry-specific module selection
- Dashboard interfaces for each industry
- User authentication and management
- Modular architecture allowing custom configurations
- Professional ERP interface design
";

/// Render the summary artifact from a document.
///
/// Section order is fixed: company header, industries list, then one
/// module section per industry present in `modules` (document map
/// order), each module line numbered from 1 in sequence order.
pub fn render_summary(doc: &KnowledgeBaseDocument) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} PLATFORM INFORMATION",
        doc.company_info.name.to_uppercase()
    );
    out.push('\n');
    let _ = writeln!(
        out,
        "COMPANY: {} - {}",
        doc.company_info.name, doc.company_info.description
    );
    out.push('\n');

    out.push_str("AVAILABLE INDUSTRIES:\n");
    for industry in doc.industries.values() {
        let _ = writeln!(
            out,
            "• {} {} - {}",
            industry.name, industry.icon, industry.description
        );
    }

    for (key, modules) in &doc.modules {
        // Prefer the curated display name; fall back to the slug for a
        // module list whose industry is not in the taxonomy.
        let display_name = doc
            .industries
            .get(key)
            .map(|i| i.name.as_str())
            .unwrap_or(key.as_str());

        out.push('\n');
        let _ = writeln!(
            out,
            "{} MODULES ({} available):",
            display_name.to_uppercase(),
            modules.len()
        );
        for (i, module) in modules.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} {} - {}",
                i + 1,
                module.name,
                module.icon,
                module.description
            );
        }
    }

    out.push('\n');
    out.push_str(PLATFORM_FEATURES);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{document_with_pages, sample_page};

    #[test]
    fn lists_all_industries_and_modules_with_zero_pages() {
        let doc = document_with_pages(vec![]);
        let summary = render_summary(&doc);

        for industry in doc.industries.values() {
            assert!(summary.contains(&industry.name), "missing {}", industry.name);
            assert!(summary.contains(&industry.icon));
        }
        for modules in doc.modules.values() {
            for module in modules {
                assert!(summary.contains(&module.name), "missing {}", module.name);
            }
        }
    }

    #[test]
    fn section_order_is_company_industries_modules() {
        let doc = document_with_pages(vec![]);
        let summary = render_summary(&doc);

        let company = summary.find("COMPANY:").unwrap();
        let industries = summary.find("AVAILABLE INDUSTRIES:").unwrap();
        let first_modules = summary.find("MODULES (").unwrap();
        assert!(company < industries);
        assert!(industries < first_modules);
        assert!(summary.starts_with("INDUSTRYHUB PLATFORM INFORMATION"));
    }

    #[test]
    fn module_sections_numbered_from_one() {
        let doc = document_with_pages(vec![]);
        let summary = render_summary(&doc);

        assert!(summary.contains("HEALTHCARE MODULES (10 available):"));
        assert!(summary.contains("MANUFACTURING MODULES (10 available):"));
        assert!(summary.contains("RETAIL MODULES (10 available):"));
        assert!(summary.contains("1. Patient Records 📋 - Electronic health records"));
        assert!(summary.contains("10. Multi-Store Management 🏪 - Manage multiple retail locations"));
    }

    #[test]
    fn omits_page_content() {
        let mut page = sample_page("/secret");
        page.content = "UNIQUE-PAGE-BODY-MARKER".into();
        let doc = document_with_pages(vec![page]);

        let summary = render_summary(&doc);
        assert!(!summary.contains("UNIQUE-PAGE-BODY-MARKER"));
        assert!(!summary.contains("/secret"));
    }

    #[test]
    fn industries_without_module_lists_get_no_section() {
        let doc = document_with_pages(vec![]);
        let summary = render_summary(&doc);

        assert!(!summary.contains("EDUCATION MODULES"));
        assert!(!summary.contains("TEXTILE MODULES"));
    }
}
