//! SQL migration definitions for the content-index database.
//!
//! Migrations are applied in order on database open. Each migration has a
//! version number and a set of SQL statements executed within a transaction.

/// A database migration with a version and SQL statements.
pub(crate) struct Migration {
    pub version: u32,
    pub description: &'static str,
    pub sql: &'static str,
}

/// All migrations, in ascending version order.
pub(crate) fn all_migrations() -> Vec<Migration> {
    vec![Migration {
        version: 1,
        description: "Initial schema: pages",
        sql: r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_migrations (
    version   INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Indexed website pages, one row per crawled page.
-- Text columns are nullable: the indexer may fail to extract a title,
-- content, or type for a page, and readers absorb NULL as empty.
CREATE TABLE IF NOT EXISTS pages (
    url_path   TEXT PRIMARY KEY,
    title      TEXT,
    content    TEXT,
    page_type  TEXT,
    indexed_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_pages_page_type ON pages(page_type);

INSERT INTO schema_migrations (version) VALUES (1);
"#,
    }]
}
