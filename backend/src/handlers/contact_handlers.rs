use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use fortisecure_shared::{ContactInput, ValidationFailure};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    // Same rules as the browser form; never trust the client copy.
    let submission = input.validate().map_err(|errors| {
        tracing::info!(fields = %errors, "Rejected contact submission");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!(ValidationFailure::new(errors))),
        )
    })?;

    if let Err(e) = state.relay.deliver(&submission).await {
        tracing::error!(relay = state.relay.name(), "Failed to relay contact inquiry: {}", e);
        return Err((
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "Could not deliver message"})),
        ));
    }

    tracing::info!(relay = state.relay.name(), "Contact inquiry relayed");
    Ok(Json(json!({"status": "received"})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{MockContactRelay, RelayError};
    use axum::{body::Body, http::Request, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app_with(relay: MockContactRelay) -> Router {
        crate::app(
            Arc::new(AppState {
                relay: Arc::new(relay),
            }),
            None,
        )
    }

    fn post_contact(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "name": "  John Doe ",
            "email": "john@example.com",
            "phone": "+91 8745060006",
            "message": "Hello"
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app_with(MockContactRelay::new());

        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn valid_submission_is_relayed_trimmed() {
        let mut relay = MockContactRelay::new();
        relay.expect_name().return_const("mock");
        relay
            .expect_deliver()
            .withf(|submission| submission.name() == "John Doe")
            .times(1)
            .returning(|_| Ok(()));

        let response = app_with(relay).oneshot(post_contact(valid_body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({"status": "received"}));
    }

    #[tokio::test]
    async fn invalid_fields_are_reported_without_relaying() {
        let mut relay = MockContactRelay::new();
        relay.expect_deliver().never();

        let body = json!({
            "name": "",
            "email": "not-an-email",
            "phone": "123",
            "message": "Hello"
        });
        let response = app_with(relay).oneshot(post_contact(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["fields"]["name"]["kind"], "required_field_missing");
        assert_eq!(body["fields"]["email"]["message"], "Please enter a valid email address");
        assert_eq!(body["fields"]["phone"]["kind"], "invalid_format");
        assert!(body["fields"].get("message").is_none());

        let parsed: ValidationFailure = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.fields.len(), 3);
    }

    #[tokio::test]
    async fn missing_keys_count_as_empty_fields() {
        let mut relay = MockContactRelay::new();
        relay.expect_deliver().never();

        let response = app_with(relay)
            .oneshot(post_contact(json!({"name": "John Doe"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert_eq!(body["fields"].as_object().map(|f| f.len()), Some(3));
    }

    #[tokio::test]
    async fn relay_failure_maps_to_bad_gateway() {
        let mut relay = MockContactRelay::new();
        relay.expect_name().return_const("mock");
        relay
            .expect_deliver()
            .times(1)
            .returning(|_| Err(RelayError::Status(503)));

        let response = app_with(relay).oneshot(post_contact(valid_body())).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            read_json(response).await,
            json!({"error": "Could not deliver message"})
        );
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let response = app_with(MockContactRelay::new())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
