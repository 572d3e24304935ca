// Template generation engine: pools, substitution, composition, batches.
// Network access goes through `enrichment::Enricher` only.

pub mod batch;
pub mod composer;
pub mod handlers;
pub mod models;
pub mod pools;
pub mod random;
pub mod substitution;

use thiserror::Error;

pub use composer::TemplateEngine;
pub use models::{GeneratedSections, ResumeTemplate, TemplateContext};
pub use pools::StyleKey;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Unknown template style: {0}")]
    UnknownStyle(String),

    #[error("Batch count must be at least 1, got {0}")]
    InvalidCount(i64),

    #[error("Batch count {requested} exceeds the maximum of {max}")]
    BatchTooLarge { requested: i64, max: usize },

    #[error("Pool '{pool}' has no entry for '{key}' and no default")]
    MissingPoolEntry { pool: &'static str, key: String },

    #[error("Pool '{pool}' entry '{key}' is empty")]
    EmptyPool { pool: &'static str, key: String },
}

impl GenerationError {
    /// True for errors caused by caller input rather than pool configuration.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GenerationError::UnknownStyle(_)
                | GenerationError::InvalidCount(_)
                | GenerationError::BatchTooLarge { .. }
        )
    }
}
