pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/skills", get(handlers::handle_list_skills))
        .route("/api/v1/match", post(handlers::handle_match))
        .route(
            "/api/v1/match/upload",
            post(handlers::handle_match_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use bytes::Bytes;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::extraction::{ExtractionError, PdfTextExtractor, TextExtractor};
    use crate::matching::handlers::{MatchResponse, MISSING_INPUT_MESSAGE};
    use crate::matching::matcher::ScoreBasis;
    use crate::matching::suggestions::SuggestionEngine;
    use crate::matching::taxonomy::Vocabulary;

    const BOUNDARY: &str = "skillmatch-test-boundary";

    /// Returns fixed text for any upload.
    struct FixedExtractor(&'static str);

    #[async_trait]
    impl TextExtractor for FixedExtractor {
        async fn extract_text(&self, _bytes: Bytes) -> Result<String, ExtractionError> {
            Ok(self.0.to_string())
        }
    }

    fn state_with(extractor: Arc<dyn TextExtractor>) -> AppState {
        state_with_config(Config::default(), extractor)
    }

    fn state_with_config(config: Config, extractor: Arc<dyn TextExtractor>) -> AppState {
        AppState {
            config,
            vocabulary: Arc::new(Vocabulary::default()),
            suggestions: Arc::new(SuggestionEngine::default()),
            extractor,
        }
    }

    fn app() -> Router {
        build_router(state_with(Arc::new(PdfTextExtractor)))
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// (name, file_name, content_type, value)
    fn multipart_request(parts: &[(&str, Option<&str>, Option<&str>, &str)]) -> Request<Body> {
        let mut body = String::new();
        for (name, file_name, content_type, value) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match file_name {
                Some(f) => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\n"
                )),
                None => body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"\r\n"
                )),
            }
            if let Some(ct) = content_type {
                body.push_str(&format!("Content-Type: {ct}\r\n"));
            }
            body.push_str(&format!("\r\n{value}\r\n"));
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));

        Request::post("/api/v1/match/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_skills_in_taxonomy_order() {
        let resp = app()
            .oneshot(Request::get("/api/v1/skills").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let skills = body_json(resp).await;
        assert_eq!(skills[0], "python");
        assert_eq!(skills.as_array().unwrap().len(), 31);
    }

    #[tokio::test]
    async fn test_match_json() {
        let resp = app()
            .oneshot(json_request(
                "/api/v1/match",
                json!({
                    "resume_text": "I know Python and SQL",
                    "job_text": "Looking for Python and Java developer"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: MatchResponse = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(body.result.matched_skills, vec!["python"]);
        assert_eq!(body.result.missing_skills, vec!["java"]);
        assert_eq!(body.result.match_percent, 25.0);
        assert_eq!(
            body.suggestions,
            vec!["Add a project description highlighting java applications."]
        );
        assert_eq!(body.report.match_percent_label, "25%");
    }

    #[tokio::test]
    async fn test_match_rejects_blank_inputs() {
        let resp = app()
            .oneshot(json_request(
                "/api/v1/match",
                json!({ "resume_text": "   ", "job_text": "AWS Docker" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], MISSING_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_upload_with_text_only() {
        let resp = app()
            .oneshot(multipart_request(&[
                ("resume_text", None, None, "SQL SQL SQL"),
                ("job_text", None, None, "sql sql"),
            ]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: MatchResponse = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(body.result.matched_skills, vec!["sql"]);
        assert_eq!(body.result.match_percent, 100.0);
        assert!(body.report.info.is_some());
    }

    #[tokio::test]
    async fn test_upload_combines_extracted_and_typed_text() {
        let app = build_router(state_with(Arc::new(FixedExtractor("Docker Kubernetes"))));
        let resp = app
            .oneshot(multipart_request(&[
                ("resume_file", Some("cv.pdf"), Some("application/pdf"), "%PDF-stub"),
                ("resume_text", None, None, "AWS"),
                ("job_text", None, None, "AWS Docker Kubernetes GCP"),
            ]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: MatchResponse = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(body.result.matched_skills, vec!["aws", "docker", "kubernetes"]);
        assert_eq!(body.result.missing_skills, vec!["gcp"]);
        assert_eq!(
            body.suggestions,
            vec!["Add cloud deployment/experience with gcp."]
        );
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let resp = app()
            .oneshot(multipart_request(&[
                ("resume_file", Some("cv.txt"), Some("text/plain"), "Python"),
                ("job_text", None, None, "Python"),
            ]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["error"]["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_upload_unreadable_pdf_is_422() {
        let resp = app()
            .oneshot(multipart_request(&[
                ("resume_file", Some("cv.pdf"), Some("application/pdf"), "garbage"),
                ("job_text", None, None, "Python"),
            ]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upload_without_job_text_is_400() {
        let resp = app()
            .oneshot(multipart_request(&[("resume_text", None, None, "Python")]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_over_size_limit_is_413() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::default()
        };
        let app = build_router(state_with_config(config, Arc::new(PdfTextExtractor)));
        let big_resume = "python ".repeat(72);
        let resp = app
            .oneshot(multipart_request(&[
                ("resume_text", None, None, big_resume.as_str()),
                ("job_text", None, None, "Python"),
            ]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_upload_unknown_field_is_400() {
        let resp = app()
            .oneshot(multipart_request(&[
                ("resume_text", None, None, "Python"),
                ("cover_letter", None, None, "Hello"),
                ("job_text", None, None, "Python"),
            ]))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("cover_letter"));
    }

    #[tokio::test]
    async fn test_match_uses_configured_score_basis() {
        let config = Config {
            score_basis: ScoreBasis::TaxonomyOnly,
            ..Config::default()
        };
        let app = build_router(state_with_config(config, Arc::new(PdfTextExtractor)));
        let resp = app
            .oneshot(json_request(
                "/api/v1/match",
                json!({
                    "resume_text": "I know Python and SQL",
                    "job_text": "Looking for Python and Java developer"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body: MatchResponse = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(body.result.score_basis, ScoreBasis::TaxonomyOnly);
        assert_eq!(body.result.match_percent, 50.0);
        assert_eq!(body.result.job_token_count, 4);
        assert_eq!(body.report.match_percent_label, "50%");
    }
}
