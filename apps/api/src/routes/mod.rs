pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::career::handlers as career;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/test", get(health::api_test_handler))
        .route("/api/upload-resume", post(skills::handle_upload_resume))
        .route(
            "/api/quiz-recommendation",
            post(career::handle_quiz_recommendation),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::career::catalog::CareerCatalog;
    use crate::config::Config;
    use crate::extraction::tests::PlainTextExtractor;

    const BOUNDARY: &str = "careerpath-test-boundary";

    fn app() -> Router {
        app_with_config(Config::default())
    }

    fn app_with_config(config: Config) -> Router {
        build_router(AppState::new(
            config,
            CareerCatalog::builtin(),
            Arc::new(PlainTextExtractor),
        ))
    }

    fn multipart_body(field: &str, file_name: Option<&str>, content: &str) -> String {
        let disposition = match file_name {
            Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
            None => format!("form-data; name=\"{field}\""),
        };
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: application/pdf\r\n\r\n{content}\r\n--{BOUNDARY}--\r\n"
        )
    }

    fn upload(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/upload-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn quiz(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/quiz-recommendation")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn strings(value: &Value) -> Vec<String> {
        let mut items: Vec<String> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        items.sort();
        items
    }

    #[tokio::test]
    async fn test_upload_extracts_skills() {
        let response = app()
            .oneshot(upload(multipart_body(
                "resumeFile",
                Some("resume.pdf"),
                "Experienced with Python, Git and React for building web apps.",
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Skills extracted successfully!");
        assert_eq!(strings(&body["skills"]), vec!["git", "python", "react"]);
    }

    #[tokio::test]
    async fn test_upload_with_no_matches_is_success() {
        let response = app()
            .oneshot(upload(multipart_body(
                "resumeFile",
                Some("resume.pdf"),
                "Baking bread and gardening.",
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_upload_without_resume_field_is_400() {
        let response = app()
            .oneshot(upload(multipart_body("otherFile", Some("a.pdf"), "python")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "No file part in the request" })
        );
    }

    #[tokio::test]
    async fn test_upload_with_empty_filename_is_400() {
        let response = app()
            .oneshot(upload(multipart_body("resumeFile", Some(""), "python")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "error": "No file selected" }));
    }

    #[tokio::test]
    async fn test_upload_part_without_filename_is_missing_file() {
        let response = app()
            .oneshot(upload(multipart_body("resumeFile", None, "python")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "No file part in the request" })
        );
    }

    #[tokio::test]
    async fn test_upload_over_body_limit_is_413() {
        let config = Config {
            max_upload_bytes: 256,
            ..Config::default()
        };
        let response = app_with_config(config)
            .oneshot(upload(multipart_body(
                "resumeFile",
                Some("huge.pdf"),
                &"python ".repeat(200),
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_upload_extraction_failure_is_500() {
        let response = app()
            .oneshot(upload(multipart_body("resumeFile", Some("empty.pdf"), "")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Error processing PDF:"));
    }

    #[tokio::test]
    async fn test_quiz_software_engineer_gap() {
        let response = app()
            .oneshot(quiz(json!({
                "answers": { "q1": "logic", "q2": "builder" },
                "current_skills": ["python", "git"]
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["recommendation"]["career"], "Software Engineer");
        assert_eq!(
            strings(&body["gap_analysis"]["known_skills"]),
            vec!["git", "python"]
        );
        assert_eq!(
            strings(&body["gap_analysis"]["skills_to_learn"]),
            vec!["aws", "mysql", "react"]
        );

        let roadmap = body["roadmap"].as_array().unwrap();
        assert_eq!(roadmap.len(), 3);
        let catalog = CareerCatalog::builtin();
        for entry in roadmap {
            let skill = entry["skill"].as_str().unwrap();
            assert_eq!(
                entry["resource"].as_str(),
                catalog.resource_for(skill),
                "resource for {skill}"
            );
        }
    }

    #[tokio::test]
    async fn test_quiz_unknown_answer_falls_back() {
        let response = app()
            .oneshot(quiz(json!({
                "answers": { "q1": "unknown_value", "q2": "builder", "q4": "user_facing" }
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["recommendation"]["career"], "General IT Consultant");
        assert_eq!(body["gap_analysis"]["known_skills"], json!([]));
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_quiz_ignores_non_string_current_skills() {
        let response = app()
            .oneshot(quiz(json!({
                "answers": { "q1": "logic", "q2": "builder" },
                "current_skills": ["python", 3]
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["recommendation"]["career"], "Software Engineer");
        assert_eq!(body["gap_analysis"]["known_skills"], json!(["python"]));
        assert_eq!(body["roadmap"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_quiz_empty_body_falls_back() {
        let response = app().oneshot(quiz(json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["recommendation"]["career"], "General IT Consultant");
    }

    #[tokio::test]
    async fn test_health_probes() {
        let response = app()
            .oneshot(Request::get("/api/test").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "success");

        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
