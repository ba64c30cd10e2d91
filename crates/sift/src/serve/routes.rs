use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use sift_core::classify::{classify_tokens, Classification};
use sift_core::validate::extract_tokens;

use super::Identity;

/// Successful classification envelope.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub is_success: bool,
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Error envelope shared by 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub is_success: bool,
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { is_success: false, error })).into_response()
}

/// `POST /bfhl`: validate the body, classify, and wrap the result.
pub async fn classify(
    State(identity): State<Arc<Identity>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let tokens = match extract_tokens(&body) {
        Ok(tokens) => tokens,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, err.to_string()),
    };

    // The classifier is total over validated input; this catch is the 500
    // path for anything unexpected. Requests stay isolated either way.
    let classification =
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| classify_tokens(&tokens))) {
            Ok(classification) => classification,
            Err(_) => {
                log::error!("classifier panicked on a validated request");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error during classification".to_string(),
                );
            }
        };

    Json(ClassifyResponse {
        is_success: true,
        user_id: identity.user_id.clone(),
        email: identity.email.clone(),
        roll_number: identity.roll_number.clone(),
        classification,
    })
    .into_response()
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `GET /`: service identification.
pub async fn root() -> Json<Value> {
    Json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    fn test_identity() -> Arc<Identity> {
        Arc::new(Identity {
            user_id: "john_doe_17091999".to_string(),
            email: "john@xyz.com".to_string(),
            roll_number: "ABCD123".to_string(),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_classify_success_envelope() {
        let payload = Ok(Json(json!({ "data": ["a", "1", "334", "4", "R", "$"] })));
        let response = classify(State(test_identity()), payload).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["is_success"], json!(true));
        assert_eq!(body["user_id"], json!("john_doe_17091999"));
        assert_eq!(body["email"], json!("john@xyz.com"));
        assert_eq!(body["roll_number"], json!("ABCD123"));
        assert_eq!(body["odd_numbers"], json!(["1"]));
        assert_eq!(body["even_numbers"], json!(["334", "4"]));
        assert_eq!(body["alphabets"], json!(["A", "R"]));
        assert_eq!(body["special_characters"], json!(["$"]));
        assert_eq!(body["sum"], json!("339"));
        assert_eq!(body["concat_string"], json!("Ra"));
    }

    #[tokio::test]
    async fn test_classify_empty_data() {
        let payload = Ok(Json(json!({ "data": [] })));
        let response = classify(State(test_identity()), payload).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["odd_numbers"], json!([]));
        assert_eq!(body["even_numbers"], json!([]));
        assert_eq!(body["alphabets"], json!([]));
        assert_eq!(body["special_characters"], json!([]));
        assert_eq!(body["sum"], json!("0"));
        assert_eq!(body["concat_string"], json!(""));
    }

    #[tokio::test]
    async fn test_classify_rejects_non_string_element() {
        let payload = Ok(Json(json!({ "data": ["a", 1, "b"] })));
        let response = classify(State(test_identity()), payload).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["is_success"], json!(false));
        assert!(body["error"].as_str().unwrap().contains("must be a string"));
    }

    #[tokio::test]
    async fn test_classify_rejects_missing_data() {
        let payload = Ok(Json(json!({ "items": [] })));
        let response = classify(State(test_identity()), payload).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["is_success"], json!(false));
        assert_eq!(body["error"], json!("missing required field: data"));
    }

    #[tokio::test]
    async fn test_classify_rejects_non_array_data() {
        let payload = Ok(Json(json!({ "data": "abc" })));
        let response = classify(State(test_identity()), payload).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], json!("ok"));
    }

    #[tokio::test]
    async fn test_root_reports_service() {
        let Json(body) = root().await;
        assert_eq!(body["service"], json!("sift"));
        assert!(body["version"].is_string());
    }
}
