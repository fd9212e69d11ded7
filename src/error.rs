use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use thiserror::Error;
use tracing::error;

use crate::completion::ProviderError;
use crate::models::ErrorResponse;

pub const MISSING_TOPIC: &str = "请输入要学习的领域";
pub const EMPTY_TOPIC: &str = "主题不能为空";
pub const GENERATION_FAILED: &str = "AI 生成失败，请稍后再试";
pub const INTERNAL_FAILURE: &str = "服务器异常";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DASHSCOPE_API_KEY must be set")]
    MissingApiKey,
    #[error("GENERATION_MODE must be `single` or `dual`, got `{0}`")]
    InvalidMode(String),
    #[error("BIND_ADDR is not a socket address: {0}")]
    InvalidBindAddr(String),
    #[error("DASHSCOPE_BASE_URL must be an http(s) URL, got `{0}`")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(msg) => msg,
            AppError::Provider(e) => {
                // Provider detail stays in the log.
                error!("Completion provider failed: {}", e);
                GENERATION_FAILED.to_string()
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Turns a handler panic into the generic 500 body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_FAILURE.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation(EMPTY_TOPIC.into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Provider(ProviderError::Unauthorized).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_provider_response_hides_detail() {
        let err = AppError::Provider(ProviderError::Status {
            status: 500,
            body: "upstream stack trace sk-secret".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], GENERATION_FAILED);
        assert!(!bytes.windows(6).any(|w| w == b"secret"));
    }
}
