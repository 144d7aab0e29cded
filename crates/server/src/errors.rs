use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    /// Absent rows become 404; anything else is a 500 carrying `title`.
    pub fn from_service(e: ServiceError, title: &'static str) -> Self {
        match e {
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            _ => {
                error!(err = %e, title, "request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, title, Some(e.to_string()))
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.detail {
            Some(detail) => serde_json::json!({"error": self.title, "detail": detail}),
            None => serde_json::json!({"error": self.title}),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let e = JsonApiError::from_service(ServiceError::not_found("wolf"), "Read Failed");
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.title, "Not Found");
    }

    #[test]
    fn db_error_maps_to_500_with_message() {
        let e = JsonApiError::from_service(ServiceError::Db("disk full".into()), "Create Failed");
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.title, "Create Failed");
        assert_eq!(e.detail.as_deref(), Some("database error: disk full"));
        assert_eq!(e.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
