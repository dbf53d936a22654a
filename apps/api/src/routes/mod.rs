pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route(
            "/api/v1/resume/analyze",
            post(handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/resume/upload",
            post(handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/interview/analyze",
            post(handlers::handle_analyze_interview),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    const BOUNDARY: &str = "coach-test-boundary";

    fn test_router() -> Router {
        build_router(AppState::new(Config {
            port: 0,
            rust_log: "debug".to_string(),
            resume_score_ceiling: 100,
            resume_strict_format: false,
            max_upload_bytes: 1024 * 1024,
        }))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Builds a multipart body from (field name, optional file name, content) parts.
    fn multipart(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for (name, file_name, content) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            let disposition = match file_name {
                Some(f) => format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                ),
                None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"),
            };
            body.extend_from_slice(disposition.as_bytes());
            body.extend_from_slice(content);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_roles_lists_every_profile() {
        let request = Request::get("/api/v1/roles").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        let roles = body.as_array().unwrap();
        assert_eq!(roles.len(), 6);
        assert_eq!(roles[0]["role"], "Software Engineer");
        assert!(!roles[0]["required_keywords"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_resume_null_is_canonical_zero() {
        let (status, body) = send(post_json("/api/v1/resume/analyze", json!({ "resume": null }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ats_score"], 0);
        assert!(body["improvements"][0]
            .as_str()
            .unwrap()
            .contains("upload a resume in an accepted format"));
    }

    #[tokio::test]
    async fn test_analyze_resume_scores_input() {
        let payload = json!({
            "resume": {
                "file_name": "resume_2024.pdf",
                "file_size_bytes": 200000,
                "file_extension": ".pdf",
                "extracted_text": "Experience with JavaScript and React. Education: BSc. Skills: JavaScript. Contact: jo@example.com 555-123-4567",
                "selected_role": "Software Engineer"
            }
        });
        let (status, body) = send(post_json("/api/v1/resume/analyze", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["ats_score"].as_u64().unwrap() >= 70, "{body}");
    }

    #[tokio::test]
    async fn test_upload_derives_metadata_from_file_part() {
        let file = vec![b'x'; 150_000];
        let request = multipart(&[
            ("file", Some("resume.pdf"), file.as_slice()),
            ("role", None, b"Software Engineer".as_slice()),
        ]);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        let strengths: Vec<&str> = body["strengths"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(strengths.iter().any(|s| s.starts_with("PDF format")));
        assert!(strengths.iter().any(|s| s.contains("150 KB")));
    }

    #[tokio::test]
    async fn test_upload_without_file_scores_as_missing() {
        let request = multipart(&[("role", None, b"Data Scientist".as_slice())]);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ats_score"], 0);
    }

    #[tokio::test]
    async fn test_upload_ignores_invalid_utf8_text() {
        let request = multipart(&[
            ("file", Some("resume.pdf"), b"%PDF-1.4".as_slice()),
            ("role", None, b"Software Engineer".as_slice()),
            ("extracted_text", None, [0xffu8, 0xfe, 0xfd].as_slice()),
        ]);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["improvements"]
            .as_array()
            .unwrap()
            .iter()
            .any(|i| i.as_str().unwrap().starts_with("Resume content could not be assessed")));
    }

    #[tokio::test]
    async fn test_upload_file_part_needs_a_name() {
        let request = multipart(&[("file", Some(""), b"%PDF-1.4".as_slice())]);
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_multipart_is_rejected() {
        let request = Request::post("/api/v1/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            // Truncated: the file part never reaches a closing boundary.
            .body(Body::from(format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"a.pdf\"\r\n\r\nabc"
            )))
            .unwrap();
        let (status, body) = send(request).await;
        assert!(status.is_client_error());
        assert_eq!(body["error"]["code"], "INVALID_UPLOAD");
    }

    #[tokio::test]
    async fn test_analyze_interview() {
        let payload = json!({
            "questions_answered": 7,
            "total_questions": 7,
            "time_spent_per_question_seconds": [35, 35, 35, 35, 35, 35, 35],
            "camera_used": true,
            "microphone_used": true,
            "interview_completed": true,
            "selected_role": "Software Engineer"
        });
        let (status, body) = send(post_json("/api/v1/interview/analyze", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_score"], 96);
        assert!(body["feedback"].as_str().unwrap().contains("35.0s"));
    }

    #[tokio::test]
    async fn test_analyze_interview_huge_answered_count() {
        let payload = json!({
            "questions_answered": u32::MAX,
            "total_questions": u32::MAX,
            "time_spent_per_question_seconds": [35, 35, 35, 35, 35, 35, 35],
            "camera_used": true,
            "microphone_used": true,
            "interview_completed": true,
            "selected_role": "Software Engineer"
        });
        let (status, body) = send(post_json("/api/v1/interview/analyze", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_score"], 61);
    }

    #[tokio::test]
    async fn test_analyze_interview_zero_participation() {
        let payload = json!({
            "questions_answered": 0,
            "total_questions": 7,
            "camera_used": true,
            "microphone_used": true,
            "interview_completed": false,
            "selected_role": "Software Engineer"
        });
        let (status, body) = send(post_json("/api/v1/interview/analyze", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall_score"], 0);
        assert_eq!(body["grammar_score"], 0);
    }
}
