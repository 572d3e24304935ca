use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::content::{generate_content, ContentType, GeneratedContent};
use crate::errors::ApiJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Free text describing the candidate, appended to the prompt.
    #[serde(default)]
    pub context: String,
}

/// POST /api/v1/content/generate
///
/// Always answers 200 for a valid body; generation failures fall back to
/// the section's static text.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateContentRequest>,
) -> Json<GeneratedContent> {
    let content = generate_content(
        state.content.as_ref(),
        request.content_type,
        &request.context,
    )
    .await;
    info!(
        "Generated {:?} content ({:?})",
        content.content_type, content.source
    );
    Json(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_is_optional() {
        let request: GenerateContentRequest =
            serde_json::from_value(serde_json::json!({"type": "skills"})).unwrap();
        assert_eq!(request.content_type, ContentType::Skills);
        assert!(request.context.is_empty());
    }
}
