//! Shared types, error model, and configuration for IndustryKB.
//!
//! This crate is the foundation depended on by all other IndustryKB crates.
//! It provides:
//! - [`IndustryKbError`] — the unified error type
//! - Domain types ([`KnowledgeBaseDocument`], [`Industry`], [`Module`],
//!   [`PageRecord`], [`TruncatedPage`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{IndustryKbError, Result};
pub use types::{
    CompanyInfo, Industry, KnowledgeBaseDocument, Module, PageRecord, TruncatedPage,
};
