use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::{verify_admin_credentials, Role},
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::LoginRequest, response::LoginResponse},
};

/// Exchanges the configured admin credentials for a bearer token.
#[post("/api/auth/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let request_id = get_request_id(&req).unwrap_or_default();

    if !verify_admin_credentials(&state.config, &request.username, &request.password) {
        log::warn!(
            "[{}] Failed admin login attempt for '{}'",
            request_id,
            request.username
        );
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = state.jwt_service.create_token(&request.username, Role::Admin)?;
    log::info!("[{}] Admin '{}' logged in", request_id, request.username);

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt_service.expires_in(),
    }))
}
