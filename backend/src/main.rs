use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod config;
mod relay;
mod handlers {
    pub mod contact_handlers;
}
mod api {
    pub mod webhook_relay;
}

use api::webhook_relay::WebhookRelay;
use config::Config;
use handlers::contact_handlers;
use relay::{ContactRelay, LogRelay};

pub struct AppState {
    relay: Arc<dyn ContactRelay>,
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origin = match frontend_url.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(_)) => {
            tracing::warn!("FRONTEND_URL is not a valid header value, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE])
}

pub fn app(state: Arc<AppState>, frontend_url: Option<&str>) -> Router {
    Router::new()
        .route("/api/health", get(contact_handlers::health))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(frontend_url))
        .with_state(state)
}

fn relay_from(config: &Config) -> anyhow::Result<Arc<dyn ContactRelay>> {
    match &config.contact_webhook_url {
        Some(url) => {
            let relay = WebhookRelay::new(url.clone(), config.relay_timeout)
                .context("building webhook relay")?;
            Ok(Arc::new(relay))
        }
        None => {
            tracing::warn!("CONTACT_WEBHOOK_URL not set, contact inquiries will only be logged");
            Ok(Arc::new(LogRelay))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let relay = relay_from(&config)?;
    tracing::info!(relay = relay.name(), "Contact relay ready");

    let state = Arc::new(AppState { relay });
    let app = app(state, config.frontend_url.as_deref());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use crate::relay::MockContactRelay;
    use tower::ServiceExt;

    fn test_app(frontend_url: Option<&str>) -> Router {
        app(
            Arc::new(AppState {
                relay: Arc::new(MockContactRelay::new()),
            }),
            frontend_url,
        )
    }

    #[tokio::test]
    async fn cors_echoes_configured_origin() {
        let response = test_app(Some("https://fortisecure.in"))
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "https://fortisecure.in")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("https://fortisecure.in"))
        );
    }

    #[tokio::test]
    async fn cors_allows_any_origin_by_default() {
        let response = test_app(None)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[test]
    fn relay_follows_webhook_setting() {
        let mut config = Config {
            bind_addr: crate::config::DEFAULT_BIND_ADDR.parse().unwrap(),
            contact_webhook_url: None,
            frontend_url: None,
            relay_timeout: std::time::Duration::from_secs(1),
        };
        assert_eq!(relay_from(&config).unwrap().name(), "log");

        config.contact_webhook_url = Some("https://hooks.example.com/contact".into());
        assert_eq!(relay_from(&config).unwrap().name(), "webhook");
    }
}
