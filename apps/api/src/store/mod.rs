//! Candidate store — pluggable, trait-based backends that execute a `FilterSpec`.
//!
//! `PgCandidateStore` runs parameterized SQL against PostgreSQL.
//! `MemoryCandidateStore` filters an in-process list (the demo dataset by default).
//!
//! `AppState` holds an `Arc<dyn CandidateStore>`, chosen at startup from config.

pub mod memory;
pub mod postgres;
pub mod seed;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::search::filter::FilterSpec;

pub use memory::MemoryCandidateStore;
pub use postgres::PgCandidateStore;

/// Implement this to add a backend without touching handlers or the translator.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Returns candidates matching every criterion, sorted and limited per `spec`.
    async fn search(&self, spec: &FilterSpec) -> Result<Vec<Candidate>, AppError>;

    /// Short backend label, reported by `/health`.
    fn backend(&self) -> &'static str;
}
