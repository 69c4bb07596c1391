//! Core synthesis orchestration for IndustryKB.
//!
//! This crate ties together the static taxonomy, the content-index
//! storage, and artifact serialization into the end-to-end
//! [`pipeline::synthesize`] workflow.

pub mod builder;
pub mod pipeline;
