use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const NOT_CONFIGURED: &str =
    "Email service not configured. Please contact the administrator.";

/// Errors returned to HTTP clients. Every variant renders the
/// `{ "success": false, "message": ... }` envelope the front-end expects.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields(Vec<&'static str>),
    #[error("{0}")]
    BadRequest(String),
    #[error("Not found")]
    NotFound,
    #[error("Email service not configured. Please contact the administrator.")]
    NotifierUnavailable,
    #[error("{0}")]
    SendFailed(&'static str),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "<[&str]>::is_empty")]
    missing: &'a [&'static str],
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::NotifierUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::SendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let missing = match self {
            ApiError::MissingFields(fields) => fields.as_slice(),
            _ => &[],
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            message: self.to_string(),
            missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn test_missing_fields_envelope() {
        let response = ApiError::MissingFields(vec!["email"]).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], MISSING_FIELDS);
        assert_eq!(json["missing"], serde_json::json!(["email"]));
    }

    #[actix_rt::test]
    async fn test_status_mapping() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::NotifierUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(ApiError::NotifierUnavailable.to_string(), NOT_CONFIGURED);
        assert_eq!(
            ApiError::SendFailed("Failed to send application").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_rt::test]
    async fn test_other_errors_omit_missing_list() {
        let response = ApiError::NotFound.error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "message": "Not found"}));
    }
}
