//! Axum route handlers for the Templates API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ApiJson, AppError};
use crate::state::AppState;
use crate::templates::models::{ResumeTemplate, TemplateContext};
use crate::templates::pools::{ColorScheme, FontPairing, LayoutDescriptor, StyleKey, VisualEffect};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateTemplateRequest {
    /// Case-insensitive style name. Omitted means a random style.
    pub style: Option<String>,
    #[serde(default)]
    pub context: TemplateContext,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub count: i64,
    #[serde(default)]
    pub context: TemplateContext,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    pub generated_at: DateTime<Utc>,
    pub templates: Vec<ResumeTemplate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/templates/generate
///
/// Composes one template for the requested style, or a random one.
pub async fn handle_generate(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateTemplateRequest>,
) -> Result<Json<ResumeTemplate>, AppError> {
    let style = match request.style.as_deref() {
        Some(name) => name.parse::<StyleKey>()?,
        None => state.engine.random_style(),
    };

    let template = state.engine.generate(style, &request.context).await?;
    info!("Generated {} template {}", style, template.id);

    Ok(Json(template))
}

/// POST /api/v1/templates/batch
///
/// Composes `count` templates with independently random styles.
/// Rejects counts below 1 or above the configured maximum.
pub async fn handle_generate_batch(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let templates = state
        .engine
        .generate_batch(request.count, &request.context)
        .await?;

    Ok(Json(BatchResponse {
        generated_at: Utc::now(),
        templates,
    }))
}

/// GET /api/v1/templates/styles
pub async fn handle_list_styles(State(state): State<AppState>) -> Json<Vec<StyleKey>> {
    Json(state.engine.list_styles())
}

/// GET /api/v1/templates/colors
pub async fn handle_list_colors(
    State(state): State<AppState>,
) -> Json<BTreeMap<&'static str, ColorScheme>> {
    Json(state.engine.list_color_schemes())
}

/// GET /api/v1/templates/fonts
pub async fn handle_list_fonts(
    State(state): State<AppState>,
) -> Json<BTreeMap<&'static str, FontPairing>> {
    Json(state.engine.list_font_pairings())
}

/// GET /api/v1/templates/layouts
pub async fn handle_list_layouts(
    State(state): State<AppState>,
) -> Json<BTreeMap<&'static str, LayoutDescriptor>> {
    Json(state.engine.list_layouts())
}

/// GET /api/v1/templates/effects
pub async fn handle_list_effects(
    State(state): State<AppState>,
) -> Json<BTreeMap<&'static str, VisualEffect>> {
    Json(state.engine.list_visual_effects())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_defaults_context() {
        let request: GenerateTemplateRequest =
            serde_json::from_value(serde_json::json!({"style": "executive"})).unwrap();
        assert_eq!(request.style.as_deref(), Some("executive"));
        assert!(request.context.is_empty());
    }

    #[test]
    fn test_batch_request_accepts_negative_count() {
        // Validation happens in the engine, not during deserialization.
        let request: BatchRequest =
            serde_json::from_value(serde_json::json!({"count": -1, "context": {"role": "chef"}})).unwrap();
        assert_eq!(request.count, -1);
        assert_eq!(request.context.get("role"), Some("chef"));
    }
}
