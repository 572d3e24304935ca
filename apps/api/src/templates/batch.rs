//! Batch generation: N independent compositions with random styles, run
//! concurrently. All-or-nothing; a failed slot fails the batch.

use futures::future::try_join_all;
use tracing::info;

use crate::templates::composer::TemplateEngine;
use crate::templates::models::{ResumeTemplate, TemplateContext};
use crate::templates::GenerationError;

impl TemplateEngine {
    /// Rejects non-positive counts and counts above the configured maximum.
    pub fn validate_count(&self, count: i64) -> Result<usize, GenerationError> {
        if count < 1 {
            return Err(GenerationError::InvalidCount(count));
        }
        let requested = usize::try_from(count).unwrap_or(usize::MAX);
        if requested > self.max_batch_size {
            return Err(GenerationError::BatchTooLarge {
                requested: count,
                max: self.max_batch_size,
            });
        }
        Ok(requested)
    }

    /// Generates `count` templates, each with an independently chosen style.
    pub async fn generate_batch(
        &self,
        count: i64,
        context: &TemplateContext,
    ) -> Result<Vec<ResumeTemplate>, GenerationError> {
        let count = self.validate_count(count)?;
        let styles: Vec<_> = (0..count).map(|_| self.random_style()).collect();

        let templates = try_join_all(styles.into_iter().map(|style| self.generate(style, context))).await?;

        let mut distinct: Vec<_> = templates.iter().map(|t| t.style).collect();
        distinct.sort();
        distinct.dedup();
        info!(
            "Generated batch of {} templates ({} distinct styles)",
            templates.len(),
            distinct.len()
        );

        Ok(templates)
    }
}
