mod completion;
mod config;
mod error;
mod logging;
mod models;
mod prompts;
mod service;

use crate::completion::OpenAiCompatClient;
use crate::config::Config;
use crate::models::{GenerateRequest, GenerateResponse};
use crate::service::GenerationService;
use anyhow::Context;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};
use axum::{routing::get, routing::post, Json, Router};
use axum_macros::debug_handler;
use dotenv::dotenv;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

const INDEX_HTML: &str = include_str!("../static/index.html");
const SCRIPT_JS: &str = include_str!("../static/script.js");
const STYLE_CSS: &str = include_str!("../static/style.css");

#[derive(Clone)]
struct AppState {
    service: Arc<GenerationService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_tracing();

    let config = Config::from_env().context("refusing to start")?;

    let client = Arc::new(OpenAiCompatClient::from_config(&config));
    let state = AppState {
        service: Arc::new(GenerationService::new(client, config.mode, &config.model)),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!(
        "Topic tutor listening on {} (mode={:?}, model={})",
        config.bind_addr,
        state.service.mode(),
        config.model
    );

    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/generate", post(handle_generate))
        .route("/static/script.js", get(handle_script))
        .route("/static/style.css", get(handle_style))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn handle_script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT_JS)
}

async fn handle_style() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

#[debug_handler]
async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> error::Result<Json<GenerateResponse>> {
    // Unreadable bodies are treated like a missing topic.
    let request = payload.ok().map(|Json(body)| body);
    let result = state.service.generate(request).await?;
    Ok(Json(GenerateResponse { result }))
}
