use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse};

pub fn json_error(status: StatusCode, error: &str, details: &str) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({
        "error": error,
        "details": details
    }))
}

/// Body deserialization failures (missing required field, malformed
/// JSON) come back as the same JSON error shape as validation failures
/// instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let details = err.to_string();
        let response = json_error(StatusCode::BAD_REQUEST, "Validation failed", &details);
        InternalError::from_response(err, response).into()
    })
}
