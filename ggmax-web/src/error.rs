use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::pages;

/// Errors surfaced to the browser.
#[derive(Debug, Error)]
pub enum WebError {
    /// The multipart body could not be read
    #[error("Invalid form submission: {0}")]
    Multipart(MultipartError),

    /// The submission is larger than the configured upload limit
    #[error("Upload exceeds the limit of {limit} bytes")]
    UploadTooLarge { limit: usize },

    /// A submitted field or uploaded file is not valid UTF-8
    #[error("Field '{0}' is not valid UTF-8 text")]
    NotUtf8(String),

    /// The selected game is not configured
    #[error("Game '{0}' not found in the format registry")]
    UnknownGame(String),

    /// Anything else that went wrong while converting
    #[error("{0}")]
    Internal(String),
}

impl WebError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classify a multipart read failure; hitting the body limit is a 413.
    pub fn multipart(e: MultipartError, limit: usize) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::UploadTooLarge { limit }
        } else {
            Self::Multipart(e)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Multipart(_) | Self::NotUtf8(_) | Self::UnknownGame(_) => StatusCode::BAD_REQUEST,
            Self::UploadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }
        (status, Html(pages::error_page(&self.to_string()))).into_response()
    }
}
