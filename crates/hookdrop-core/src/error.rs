//! 错误类型
//!
//! 每个错误都对应一个固定的 HTTP 状态码，响应体为 `{"error": "..."}`。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebhookError>;

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("no file part in request")]
    MissingFile,

    #[error("empty file name")]
    EmptyFileName,

    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("file type not allowed: {0}")]
    DisallowedType(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("malformed multipart body: {0}")]
    Multipart(String),

    #[error("upload exceeds the size limit")]
    PayloadTooLarge,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl WebhookError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::Unauthorized => StatusCode::FORBIDDEN,
            WebhookError::MissingFile
            | WebhookError::EmptyFileName
            | WebhookError::InvalidFileName(_)
            | WebhookError::DisallowedType(_)
            | WebhookError::Multipart(_) => StatusCode::BAD_REQUEST,
            WebhookError::NotFound(_) => StatusCode::NOT_FOUND,
            WebhookError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            WebhookError::Io(_) | WebhookError::Archive(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {}", self);
            "internal error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
