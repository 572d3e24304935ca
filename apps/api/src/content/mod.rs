//! Section content generation: asks a remote text generator for resume
//! section text and falls back to a fixed text per section type.
//!
//! `ContentGenerator` never errors. A failed or empty completion yields the
//! section's fallback text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod handlers;
pub mod http;

pub use http::HttpContentGenerator;

// ────────────────────────────────────────────────────────────────────────────
// Section types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Summary,
    Experience,
    Skills,
    Education,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Summary,
        ContentType::Experience,
        ContentType::Skills,
        ContentType::Education,
    ];

    /// Instruction sent to the generator, with the caller's context appended.
    pub fn prompt(&self, context: &str) -> String {
        let task = match self {
            ContentType::Summary => "Write a professional summary for a resume.",
            ContentType::Experience => {
                "Write a professional work experience description for a resume."
            }
            ContentType::Skills => "List relevant professional skills for a resume.",
            ContentType::Education => "Write an education entry for a resume.",
        };
        format!("{task} Context: {context}")
    }

    pub fn fallback(&self) -> &'static str {
        match self {
            ContentType::Summary => {
                "Experienced professional with a proven track record of success in delivering results. \
                 Strong analytical and problem-solving skills combined with excellent communication abilities."
            }
            ContentType::Experience => {
                "• Successfully managed and delivered key projects\n\
                 • Collaborated with cross-functional teams\n\
                 • Improved efficiency and productivity\n\
                 • Demonstrated leadership and initiative"
            }
            ContentType::Skills => {
                "• Project Management\n\
                 • Team Leadership\n\
                 • Problem Solving\n\
                 • Communication\n\
                 • Time Management\n\
                 • Analytical Skills"
            }
            ContentType::Education => {
                "Completed coursework with focus on practical applications and theoretical foundations. \
                 Participated in relevant projects and activities."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub content: String,
    pub source: ContentSource,
}

// ────────────────────────────────────────────────────────────────────────────
// Generator seam
// ────────────────────────────────────────────────────────────────────────────

/// Remote text completion. Carried as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Raw generated text for `prompt`. `None` on any failure.
    async fn complete(&self, prompt: &str) -> Option<String>;
}

/// Always answers with nothing. Used when remote generation is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopContentGenerator;

#[async_trait]
impl ContentGenerator for NoopContentGenerator {
    async fn complete(&self, _prompt: &str) -> Option<String> {
        None
    }
}

/// Generates text for one section. Text-generation models often echo the
/// prompt, so its first occurrence is removed before the result is used.
pub async fn generate_content(
    generator: &dyn ContentGenerator,
    content_type: ContentType,
    context: &str,
) -> GeneratedContent {
    let prompt = content_type.prompt(context);

    let generated = generator
        .complete(&prompt)
        .await
        .map(|text| text.replacen(&prompt, "", 1).trim().to_string())
        .filter(|text| !text.is_empty());

    match generated {
        Some(content) => GeneratedContent {
            content_type,
            content,
            source: ContentSource::Generated,
        },
        None => {
            debug!("No generated {:?} content, using fallback", content_type);
            GeneratedContent {
                content_type,
                content: content_type.fallback().to_string(),
                source: ContentSource::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Replies with a fixed answer and records the prompts it saw.
    struct ScriptedGenerator {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(reply: Option<&str>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ContentGenerator for ScriptedGenerator {
        async fn complete(&self, prompt: &str) -> Option<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .as_ref()
                .map(|r| r.replace("{prompt}", prompt))
        }
    }

    #[tokio::test]
    async fn test_generated_text_strips_echoed_prompt() {
        let generator = ScriptedGenerator::new(Some("{prompt}  Seasoned data engineer.  "));
        let out = generate_content(&generator, ContentType::Summary, "data engineer").await;

        assert_eq!(out.source, ContentSource::Generated);
        assert_eq!(out.content, "Seasoned data engineer.");
        assert_eq!(
            *generator.prompts.lock().unwrap(),
            vec!["Write a professional summary for a resume. Context: data engineer".to_string()]
        );
    }

    #[tokio::test]
    async fn test_prompt_only_reply_uses_fallback() {
        let generator = ScriptedGenerator::new(Some("{prompt}   "));
        let out = generate_content(&generator, ContentType::Education, "BSc").await;
        assert_eq!(out.source, ContentSource::Fallback);
        assert_eq!(out.content, ContentType::Education.fallback());
    }

    #[tokio::test]
    async fn test_failed_generation_uses_fallback_for_every_type() {
        for content_type in ContentType::ALL {
            let out = generate_content(&NoopContentGenerator, content_type, "").await;
            assert_eq!(out.content_type, content_type);
            assert_eq!(out.source, ContentSource::Fallback);
            assert!(!out.content.is_empty());
        }
        assert!(ContentType::Skills.fallback().starts_with("• Project Management\n"));
    }

    #[test]
    fn test_content_type_wire_names() {
        let parsed: ContentType = serde_json::from_value(serde_json::json!("experience")).unwrap();
        assert_eq!(parsed, ContentType::Experience);
        assert!(serde_json::from_value::<ContentType>(serde_json::json!("hobbies")).is_err());

        let out = GeneratedContent {
            content_type: ContentType::Skills,
            content: "x".to_string(),
            source: ContentSource::Generated,
        };
        let json = serde_json::to_value(out).unwrap();
        assert_eq!(json["type"], "skills");
        assert_eq!(json["source"], "generated");
    }
}
