use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::error::OrderError;

impl OrderError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::MalformedPayloadError { .. } | OrderError::MissingFieldError { .. } => {
                StatusCode::BAD_REQUEST
            }
            OrderError::StoreUnavailableError { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                self,
                self.category(),
                self.severity()
            );
        } else {
            tracing::warn!("Rejected request: {}", self);
        }

        (status, self.user_friendly_message()).into_response()
    }
}
