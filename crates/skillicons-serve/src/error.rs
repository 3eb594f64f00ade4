//! Error types for the icon service.
//!
//! Errors are rendered as short plain-text bodies, since the normal
//! response is an image and callers are usually `<img>` tags or humans
//! pasting a URL into a browser.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

/// Icon service error type.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The `i` query parameter was missing or empty.
    #[error("no icons specified")]
    MissingIcons,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingIcons => (
                StatusCode::BAD_REQUEST,
                "You didn't specify any icons!".to_string(),
            ),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let headers = [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        )];

        (status, headers, message).into_response()
    }
}
