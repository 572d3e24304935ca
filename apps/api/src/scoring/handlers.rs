use axum::Json;

use crate::errors::ApiJson;
use crate::scoring::{score_resume, ResumeOutline, ResumeScore};

/// POST /api/v1/resume/score
pub async fn handle_score_resume(ApiJson(resume): ApiJson<ResumeOutline>) -> Json<ResumeScore> {
    Json(score_resume(&resume))
}
