pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::content::handlers::handle_generate_content;
use crate::errors::AppError;
use crate::scoring::handlers::handle_score_resume;
use crate::state::AppState;
use crate::templates::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates/styles", get(handlers::handle_list_styles))
        .route("/api/v1/templates/colors", get(handlers::handle_list_colors))
        .route("/api/v1/templates/fonts", get(handlers::handle_list_fonts))
        .route("/api/v1/templates/layouts", get(handlers::handle_list_layouts))
        .route("/api/v1/templates/effects", get(handlers::handle_list_effects))
        .route("/api/v1/templates/generate", post(handlers::handle_generate))
        .route("/api/v1/templates/batch", post(handlers::handle_generate_batch))
        .route("/api/v1/content/generate", post(handle_generate_content))
        .route("/api/v1/resume/score", post(handle_score_resume))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}
