//! Text generation over a hosted inference endpoint (Hugging Face style:
//! `POST {inputs, parameters}` answered by `[{generated_text}]`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::ContentGenerator;

pub const DEFAULT_CONTENT_URL: &str =
    "https://api-inference.huggingface.co/models/bigscience/bloom";

const MAX_LENGTH: u32 = 200;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generator returned no text")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: u32,
    temperature: f32,
    top_p: f32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    #[serde(default)]
    generated_text: String,
}

#[derive(Clone)]
pub struct HttpContentGenerator {
    client: Client,
    url: String,
    api_token: Option<String>,
}

impl HttpContentGenerator {
    pub fn new(
        url: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ContentError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
            api_token,
        })
    }

    async fn try_complete(&self, prompt: &str) -> Result<String, ContentError> {
        let body = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_length: MAX_LENGTH,
                temperature: TEMPERATURE,
                top_p: TOP_P,
                do_sample: true,
            },
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Api {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let outputs: Vec<InferenceOutput> = serde_json::from_str(&text)?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ContentError::EmptyContent)
    }
}

#[async_trait]
impl ContentGenerator for HttpContentGenerator {
    async fn complete(&self, prompt: &str) -> Option<String> {
        match self.try_complete(prompt).await {
            Ok(text) => {
                debug!("Generated {} chars of content", text.len());
                Some(text)
            }
            Err(e) => {
                warn!("Content generation failed, using fallback: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn stub_router() -> Router {
        Router::new()
            .route(
                "/echo",
                post(|Json(body): Json<Value>| async move {
                    let inputs = body["inputs"].as_str().unwrap_or_default().to_string();
                    let max_length = body["parameters"]["max_length"].clone();
                    Json(json!([{ "generated_text": format!("{inputs} [max {max_length}]") }]))
                }),
            )
            .route(
                "/private",
                post(|headers: HeaderMap| async move {
                    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
                        Some("Bearer s3cret") => {
                            (StatusCode::OK, Json(json!([{ "generated_text": "ok" }])))
                        }
                        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "error": "unauthorized" }))),
                    }
                }),
            )
            .route("/empty", post(|| async { Json(json!([])) }))
            .route("/blank", post(|| async { Json(json!([{ "generated_text": "  " }])) }))
            .route(
                "/loading",
                post(|| async {
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        Json(json!({ "error": "Model is currently loading" })),
                    )
                }),
            )
            .route("/malformed", post(|| async { "<html>nope</html>" }))
    }

    fn generator(base: &str, path: &str, token: Option<&str>) -> HttpContentGenerator {
        HttpContentGenerator::new(
            format!("{base}{path}"),
            token.map(str::to_string),
            Duration::from_millis(500),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_sends_prompt_and_parameters() {
        let base = serve(stub_router()).await;
        let text = generator(&base, "/echo", None).complete("Write it.").await.unwrap();
        assert_eq!(text, "Write it. [max 200]");
    }

    #[tokio::test]
    async fn test_bearer_token_is_sent_when_configured() {
        let base = serve(stub_router()).await;
        assert_eq!(
            generator(&base, "/private", Some("s3cret")).complete("x").await.as_deref(),
            Some("ok")
        );
        assert!(generator(&base, "/private", None).complete("x").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_or_blank_output_is_none() {
        let base = serve(stub_router()).await;
        assert!(generator(&base, "/empty", None).complete("x").await.is_none());
        assert!(generator(&base, "/blank", None).complete("x").await.is_none());
    }

    #[tokio::test]
    async fn test_upstream_failures_are_none() {
        let base = serve(stub_router()).await;
        assert!(generator(&base, "/loading", None).complete("x").await.is_none());
        assert!(generator(&base, "/malformed", None).complete("x").await.is_none());
    }

    #[test]
    fn test_empty_content_display() {
        assert_eq!(ContentError::EmptyContent.to_string(), "Generator returned no text");
    }
}
