//! HTTP response handling for errors

use super::types::HealthcheckError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for HealthcheckError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            HealthcheckError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            HealthcheckError::Io(_) => ("IO_ERROR", "I/O operation failed".to_string()),
            HealthcheckError::Yaml(_) => ("CONFIG_ERROR", self.to_string()),
            HealthcheckError::Serialization(_) => {
                ("SERIALIZATION_ERROR", "Failed to encode probe payload".to_string())
            }
            HealthcheckError::InvalidStatus(_) => ("INVALID_STATUS", self.to_string()),
            HealthcheckError::Handler(_) => ("HANDLER_ERROR", self.to_string()),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }))
    }
}
