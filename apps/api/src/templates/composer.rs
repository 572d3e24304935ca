//! Template composition: assembles one `ResumeTemplate` for a style.
//!
//! Flow: resolve pools → pick summary/background/effect → apply context →
//!       look up words (only for texts that still need them) and a quote
//!       concurrently → fill leftovers → assemble.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use tracing::debug;
use uuid::Uuid;

use crate::enrichment::Enricher;
use crate::templates::models::{GeneratedSections, ResumeTemplate, TemplateContext};
use crate::templates::pools::{
    self, ColorScheme, FontPairing, LayoutDescriptor, StyleKey, VisualEffect, COLOR_SCHEMES,
    FONT_PAIRINGS, LAYOUTS, VISUAL_EFFECTS,
};
use crate::templates::random::{int_in_range, pick, RandomSource, ThreadRandom};
use crate::templates::substitution::{apply_context, fill_remaining, has_placeholders};
use crate::templates::GenerationError;

/// Topic used for word lookups when the context names no industry.
pub const DEFAULT_TOPIC: &str = "business";

pub const DEFAULT_MAX_BATCH_SIZE: usize = 24;

/// Range of the generated `{result}` figure when the caller supplies none.
const RESULT_RANGE: (u32, u32) = (10, 59);

/// The generation engine. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct TemplateEngine {
    pub(crate) enricher: Arc<dyn Enricher>,
    pub(crate) rng: Arc<dyn RandomSource>,
    pub(crate) max_batch_size: usize,
}

impl TemplateEngine {
    pub fn new(enricher: Arc<dyn Enricher>) -> Self {
        Self {
            enricher,
            rng: Arc::new(ThreadRandom),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }

    pub fn with_random(mut self, rng: Arc<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Composes one template for `style`.
    pub async fn generate(
        &self,
        style: StyleKey,
        context: &TemplateContext,
    ) -> Result<ResumeTemplate, GenerationError> {
        let resolved = pools::resolve(style)?;
        let rng = self.rng.as_ref();

        let summary_template = pick(rng, resolved.summaries).ok_or_else(|| GenerationError::EmptyPool {
            pool: "summaries",
            key: style.to_string(),
        })?;
        let background_image = pick(rng, resolved.backgrounds).map(|url| url.to_string());
        let visual_effect = pick(rng, VISUAL_EFFECTS).map(|(_, effect)| *effect);

        let summary_ctx = context.over_defaults(summary_defaults());
        let experience_ctx = context.over_defaults(experience_defaults(rng));

        let summary = apply_context(summary_template, &summary_ctx);
        let experiences: Vec<String> = resolved
            .experiences
            .iter()
            .map(|t| apply_context(t, &experience_ctx))
            .collect();

        let summary_topic = topic_for(&summary_ctx);
        let experience_topic = topic_for(&experience_ctx);

        let mut topics: Vec<&str> = Vec::new();
        if has_placeholders(&summary) {
            topics.push(summary_topic);
        }
        if experiences.iter().any(|e| has_placeholders(e)) && !topics.contains(&experience_topic) {
            topics.push(experience_topic);
        }

        let (word_lists, quote) = futures::join!(
            join_all(topics.iter().map(|topic| self.enricher.fetch_synonyms(topic))),
            self.enricher.fetch_quote()
        );

        let summary_words = words_for(&topics, &word_lists, summary_topic);
        let experience_words = words_for(&topics, &word_lists, experience_topic);

        let summary = fill_remaining(&summary, summary_words, rng);
        let experiences: Vec<String> = experiences
            .iter()
            .map(|e| fill_remaining(e, experience_words, rng))
            .collect();

        debug!(
            "Composed {} template: {} experiences, {} word lookups, quote={}",
            style,
            experiences.len(),
            topics.len(),
            quote.is_some()
        );

        let (quote, quote_author) = match quote {
            Some(q) => {
                let author = Some(q.author).filter(|a| !a.trim().is_empty());
                (Some(q.content), author)
            }
            None => (None, None),
        };

        Ok(ResumeTemplate {
            id: Uuid::new_v4(),
            style,
            layout: resolved.layout,
            colors: resolved.colors,
            fonts: resolved.fonts,
            background_image,
            visual_effect,
            sections: GeneratedSections {
                summary,
                experiences,
                skills: resolved.skills.iter().map(|s| s.to_string()).collect(),
                quote,
                quote_author,
            },
            generated_at: Utc::now(),
        })
    }

    /// Picks a style uniformly at random.
    pub fn random_style(&self) -> StyleKey {
        pick(self.rng.as_ref(), &StyleKey::ALL)
            .copied()
            .unwrap_or(StyleKey::Modern)
    }

    pub fn list_styles(&self) -> Vec<StyleKey> {
        StyleKey::ALL.to_vec()
    }

    pub fn list_color_schemes(&self) -> BTreeMap<&'static str, ColorScheme> {
        COLOR_SCHEMES.iter().copied().collect()
    }

    pub fn list_font_pairings(&self) -> BTreeMap<&'static str, FontPairing> {
        FONT_PAIRINGS.iter().copied().collect()
    }

    pub fn list_layouts(&self) -> BTreeMap<&'static str, LayoutDescriptor> {
        LAYOUTS.iter().copied().collect()
    }

    pub fn list_visual_effects(&self) -> BTreeMap<&'static str, VisualEffect> {
        VISUAL_EFFECTS.iter().copied().collect()
    }
}

fn summary_defaults() -> TemplateContext {
    TemplateContext::new()
        .with("role", "professional")
        .with("industry", "technology")
        .with("years", "5")
}

fn experience_defaults(rng: &dyn RandomSource) -> TemplateContext {
    let (low, high) = RESULT_RANGE;
    TemplateContext::new()
        .with("project", "key")
        .with("result", int_in_range(rng, low, high).to_string())
        .with("metric", "efficiency")
}

/// Word list fetched for `topic`, or empty when it was never looked up.
fn words_for<'a>(topics: &[&str], lists: &'a [Vec<String>], topic: &str) -> &'a [String] {
    topics
        .iter()
        .position(|t| *t == topic)
        .and_then(|i| lists.get(i))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn topic_for(context: &TemplateContext) -> &str {
    context
        .get("industry")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_TOPIC)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::enrichment::{HttpEnricher, NoopEnricher, Quote, StaticEnricher};
    use crate::templates::random::FixedRandom;

    /// Records every topic looked up.
    #[derive(Default)]
    struct RecordingEnricher {
        topics: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Enricher for RecordingEnricher {
        async fn fetch_synonyms(&self, topic: &str) -> Vec<String> {
            self.topics.lock().unwrap().push(topic.to_string());
            vec![format!("{topic}-word")]
        }

        async fn fetch_quote(&self) -> Option<Quote> {
            None
        }
    }

    fn engine(enricher: impl Enricher + 'static, rng: impl RandomSource + 'static) -> TemplateEngine {
        TemplateEngine::new(Arc::new(enricher)).with_random(Arc::new(rng))
    }

    fn full_context() -> TemplateContext {
        TemplateContext::new()
            .with("role", "engineer")
            .with("industry", "finance")
            .with("years", "8")
            .with("achievement", "cutting settlement time")
            .with("skill", "risk modelling")
            .with("expertise", "payments")
            .with("project", "ledger")
            .with("result", "30")
            .with("metric", "throughput")
            .with("timeframe", "two quarters")
            .with("size", "12")
            .with("budget", "$2M")
            .with("technologies", "Rust and Kafka")
    }

    #[tokio::test]
    async fn test_every_style_resolves_all_placeholders() {
        let engine = TemplateEngine::new(Arc::new(NoopEnricher));
        for style in StyleKey::ALL {
            let t = engine.generate(style, &TemplateContext::new()).await.unwrap();
            assert!(!t.sections.summary.contains('{'), "{style}: {}", t.sections.summary);
            for e in &t.sections.experiences {
                assert!(!e.contains('{') && !e.contains('}'), "{style}: {e}");
            }
        }
    }

    #[tokio::test]
    async fn test_every_style_draws_from_pools() {
        let engine = TemplateEngine::new(Arc::new(NoopEnricher));
        for style in StyleKey::ALL {
            let t = engine.generate(style, &TemplateContext::new()).await.unwrap();
            let resolved = pools::resolve(style).unwrap();

            assert!(COLOR_SCHEMES.iter().any(|(_, c)| *c == t.colors));
            assert!(FONT_PAIRINGS.iter().any(|(_, f)| *f == t.fonts));
            assert!(LAYOUTS.iter().any(|(_, l)| *l == t.layout));
            assert_eq!(t.sections.experiences.len(), resolved.experiences.len());
            assert_eq!(t.sections.skills.len(), resolved.skills.len());

            let bg = t.background_image.as_deref().unwrap();
            assert!(resolved.backgrounds.contains(&bg));
            assert!(t.visual_effect.is_some());
            assert_eq!(t.style, style);
        }
    }

    #[tokio::test]
    async fn test_executive_summary_uses_caller_context() {
        let ctx = TemplateContext::new()
            .with("role", "engineer")
            .with("industry", "finance")
            .with("years", "8");

        for v in [0.0, 0.4, 0.9] {
            let t = engine(NoopEnricher, FixedRandom(v))
                .generate(StyleKey::Executive, &ctx)
                .await
                .unwrap();
            let summary = t.sections.summary.to_lowercase();
            assert!(summary.contains("engineer"), "{summary}");
            assert!(summary.contains("finance"), "{summary}");
            assert!(!summary.contains('{'));
        }
    }

    #[tokio::test]
    async fn test_executive_without_dedicated_entries_uses_defaults() {
        let t = engine(NoopEnricher, FixedRandom(0.0))
            .generate(StyleKey::Executive, &TemplateContext::new())
            .await
            .unwrap();
        assert_eq!(t.colors.primary, "#6B46C1");
        assert_eq!(t.fonts.heading, "Inter");
        assert_eq!(t.layout.id, "single-column");
        assert!(t.sections.experiences[0].starts_with("Led key initiative"));
        assert_eq!(t.sections.skills[0], "Programming Languages");
    }

    #[tokio::test]
    async fn test_failed_enrichment_degrades_to_brace_stripping() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let dead = HttpEnricher::new(
            format!("http://{addr}/words"),
            format!("http://{addr}/quote"),
            Duration::from_millis(500),
        )
        .unwrap();

        let t = engine(dead, FixedRandom(0.0))
            .generate(StyleKey::Professional, &TemplateContext::new())
            .await
            .unwrap();

        assert!(t.sections.quote.is_none());
        assert!(t.sections.quote_author.is_none());
        assert_eq!(
            t.sections.summary,
            "Accomplished professional with 5+ years of experience in technology. \
             Proven track record of achievement and skill. Seeking to leverage expertise \
             in expertise to drive success in a challenging role."
        );
        assert_eq!(
            t.sections.experiences,
            vec![
                "Led key initiative resulting in 10% improvement in efficiency".to_string(),
                "Spearheaded key that generated 10 in efficiency within timeframe".to_string(),
                "Implemented key strategy leading to 10% increase in efficiency".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_enrichment_words_fill_leftovers_and_quote_is_attached() {
        let enricher = StaticEnricher::new(&["fintech"], Some(("Stay hungry.", "Stewart Brand")));
        let t = engine(enricher, FixedRandom(0.0))
            .generate(StyleKey::Professional, &TemplateContext::new())
            .await
            .unwrap();

        assert!(t.sections.summary.contains("track record of fintech and fintech"));
        assert_eq!(
            t.sections.experiences[1],
            "Spearheaded key that generated 10 in efficiency within fintech"
        );
        assert_eq!(t.sections.quote.as_deref(), Some("Stay hungry."));
        assert_eq!(t.sections.quote_author.as_deref(), Some("Stewart Brand"));
    }

    #[tokio::test]
    async fn test_lookup_topics_follow_industry() {
        let recorder = Arc::new(RecordingEnricher::default());
        let engine = TemplateEngine::new(recorder.clone()).with_random(Arc::new(FixedRandom(0.0)));

        engine
            .generate(StyleKey::Professional, &TemplateContext::new())
            .await
            .unwrap();
        let mut topics = recorder.topics.lock().unwrap().clone();
        topics.sort();
        // Summary defaults industry to "technology"; experiences have no industry.
        assert_eq!(topics, vec!["business".to_string(), "technology".to_string()]);
    }

    #[tokio::test]
    async fn test_shared_topic_is_looked_up_once() {
        let recorder = Arc::new(RecordingEnricher::default());
        let engine = TemplateEngine::new(recorder.clone()).with_random(Arc::new(FixedRandom(0.0)));

        let t = engine
            .generate(
                StyleKey::Professional,
                &TemplateContext::new().with("industry", "healthcare"),
            )
            .await
            .unwrap();
        assert_eq!(*recorder.topics.lock().unwrap(), vec!["healthcare".to_string()]);
        assert!(t.sections.summary.contains("healthcare-word"));
    }

    #[tokio::test]
    async fn test_complete_context_skips_word_lookup_and_is_deterministic() {
        let recorder = Arc::new(RecordingEnricher::default());
        let engine = TemplateEngine::new(recorder.clone()).with_random(Arc::new(FixedRandom(0.5)));

        let first = engine.generate(StyleKey::Professional, &full_context()).await.unwrap();
        let second = engine.generate(StyleKey::Professional, &full_context()).await.unwrap();

        assert!(recorder.topics.lock().unwrap().is_empty());
        assert_eq!(first.sections, second.sections);
        assert_ne!(first.id, second.id);
        assert!(first.sections.experiences[0].contains("30% improvement in throughput"));
    }

    #[tokio::test]
    async fn test_caller_result_overrides_random_figure() {
        let t = engine(NoopEnricher, FixedRandom(0.99))
            .generate(StyleKey::Technical, &TemplateContext::new().with("result", "42"))
            .await
            .unwrap();
        assert!(t.sections.experiences[1].contains("42% improvement"));
    }

    #[tokio::test]
    async fn test_skills_are_plain_labels() {
        let t = engine(NoopEnricher, FixedRandom(0.0))
            .generate(StyleKey::Creative, &TemplateContext::new())
            .await
            .unwrap();
        assert_eq!(t.sections.skills[0], "Design Tools");
        assert_eq!(t.fonts.heading, "Playfair Display");
    }

    #[tokio::test]
    async fn test_blank_quote_author_is_absent() {
        let enricher = StaticEnricher::new(&[], Some(("Just ship it.", " ")));
        let t = engine(enricher, FixedRandom(0.0))
            .generate(StyleKey::Bold, &TemplateContext::new())
            .await
            .unwrap();
        assert_eq!(t.sections.quote.as_deref(), Some("Just ship it."));
        assert!(t.sections.quote_author.is_none());
    }

    #[test]
    fn test_listings_cover_pools() {
        let engine = TemplateEngine::new(Arc::new(NoopEnricher));
        assert_eq!(engine.list_styles().len(), 15);
        assert_eq!(engine.list_color_schemes().len(), 10);
        assert_eq!(engine.list_font_pairings()["TECH"].body, "IBM Plex Sans");
        assert_eq!(engine.list_layouts().len(), 6);
        assert_eq!(engine.list_visual_effects().len(), 5);
    }

    #[test]
    fn test_random_style_follows_random_source() {
        assert_eq!(engine(NoopEnricher, FixedRandom(0.0)).random_style(), StyleKey::Modern);
        assert_eq!(engine(NoopEnricher, FixedRandom(0.99)).random_style(), StyleKey::Futuristic);
    }
}
