//! libSQL storage layer for the content index.
//!
//! The [`Storage`] struct wraps the database the website indexer writes
//! page records into. The synthesis pipeline consumes a single read
//! contract against it — [`Storage::list_pages`] — and holds the handle
//! only for the duration of that read.
//!
//! Every storage failure surfaces as
//! [`IndustryKbError::SourceUnavailable`]: from the pipeline's point of
//! view a failing store is an unreachable page source.

mod migrations;

use std::path::Path;

use chrono::Utc;
use industrykb_shared::{IndustryKbError, PageRecord, Result};
use libsql::{Connection, Database, params};

/// Storage handle wrapping the content-index database.
#[derive(Debug)]
pub struct Storage {
    #[allow(dead_code)]
    db: Database,
    conn: Connection,
}

impl Storage {
    /// Open or create a database at `path` and apply pending migrations.
    pub async fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| IndustryKbError::source(format!("{}: {e}", parent.display())))?;
            }
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| IndustryKbError::source(e.to_string()))?;

        let conn = db
            .connect()
            .map_err(|e| IndustryKbError::source(e.to_string()))?;

        let storage = Self { db, conn };
        storage.run_migrations().await?;
        Ok(storage)
    }

    /// Run pending schema migrations.
    async fn run_migrations(&self) -> Result<()> {
        let current_version = self.get_schema_version().await;

        for migration in migrations::all_migrations() {
            if migration.version > current_version {
                tracing::info!(
                    version = migration.version,
                    description = migration.description,
                    "applying migration"
                );
                self.conn.execute_batch(migration.sql).await.map_err(|e| {
                    IndustryKbError::source(format!(
                        "migration v{} failed: {e}",
                        migration.version
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Get the current schema version, or 0 if no migrations have been applied.
    async fn get_schema_version(&self) -> u32 {
        let result = self
            .conn
            .query("SELECT MAX(version) FROM schema_migrations", params![])
            .await;

        match result {
            Ok(mut rows) => {
                if let Ok(Some(row)) = rows.next().await {
                    row.get::<u32>(0).unwrap_or(0)
                } else {
                    0
                }
            }
            Err(_) => 0, // Table doesn't exist yet
        }
    }

    // -----------------------------------------------------------------------
    // Page operations
    // -----------------------------------------------------------------------

    /// Upsert a page (insert or update on conflict by `url_path`).
    ///
    /// Used by the indexer while crawling and by tests to seed fixtures;
    /// the synthesis pipeline itself only reads.
    pub async fn upsert_page(&self, page: &PageRecord) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO pages (url_path, title, content, page_type, indexed_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(url_path) DO UPDATE SET
                   title = excluded.title,
                   content = excluded.content,
                   page_type = excluded.page_type,
                   indexed_at = excluded.indexed_at",
                params![
                    page.url_path.as_str(),
                    page.title.as_str(),
                    page.content.as_str(),
                    page.page_type.as_str(),
                    now.as_str(),
                ],
            )
            .await
            .map_err(|e| IndustryKbError::source(e.to_string()))?;
        Ok(())
    }

    /// Read all page records in insertion (rowid) order.
    ///
    /// No filtering, no pagination. NULL text columns are read back as
    /// empty strings rather than rejected.
    pub async fn list_pages(&self) -> Result<Vec<PageRecord>> {
        let mut rows = self
            .conn
            .query(
                "SELECT url_path, title, content, page_type FROM pages ORDER BY rowid",
                params![],
            )
            .await
            .map_err(|e| IndustryKbError::source(e.to_string()))?;

        let mut results = Vec::new();
        loop {
            match rows.next().await {
                Ok(Some(row)) => results.push(row_to_page_record(&row)?),
                Ok(None) => break,
                Err(e) => return Err(IndustryKbError::source(e.to_string())),
            }
        }
        Ok(results)
    }

    /// Count indexed pages.
    pub async fn count_pages(&self) -> Result<usize> {
        let mut rows = self
            .conn
            .query("SELECT COUNT(*) FROM pages", params![])
            .await
            .map_err(|e| IndustryKbError::source(e.to_string()))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let count: i64 = row
                    .get(0)
                    .map_err(|e| IndustryKbError::source(e.to_string()))?;
                Ok(count as usize)
            }
            Ok(None) => Ok(0),
            Err(e) => Err(IndustryKbError::source(e.to_string())),
        }
    }
}

/// Convert a database row to a [`PageRecord`], absorbing NULL text
/// columns as empty strings.
fn row_to_page_record(row: &libsql::Row) -> Result<PageRecord> {
    Ok(PageRecord {
        url_path: row
            .get::<String>(0)
            .map_err(|e| IndustryKbError::source(e.to_string()))?,
        title: row.get::<String>(1).unwrap_or_default(),
        content: row.get::<String>(2).unwrap_or_default(),
        page_type: row.get::<String>(3).unwrap_or_default(),
    })
}
