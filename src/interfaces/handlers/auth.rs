use actix_web::{error::ResponseError, web, HttpResponse, Responder};

use crate::entities::admin::{ChangePasswordRequest, LoginRequest};
use crate::use_cases::extractors::AdminClaims;
use crate::AppState;

pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> impl Responder {
    match state.auth_handler.login(request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::warn!("Login rejected: {}", e);
            e.error_response()
        }
    }
}

pub async fn change_password(
    admin: AdminClaims,
    state: web::Data<AppState>,
    request: web::Json<ChangePasswordRequest>,
) -> impl Responder {
    match state.auth_handler.change_password(&admin.0, request.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Password updated successfully"
        })),
        Err(e) => e.to_http_response(),
    }
}
