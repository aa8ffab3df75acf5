use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Bearer-token middleware for protected routes. Inserts the authenticated
/// caller into request extensions on success.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("No token provided".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("No token provided".to_string()))?;

    if !auth_value.starts_with("Bearer ") {
        return Err(AppError::Auth("No token provided".to_string()));
    }

    let token = &auth_value[7..];

    // Any validation failure (bad signature, expired, malformed claims)
    // surfaces as the same client-visible message.
    let user = validate_token(token, &config.jwt_secret)
        .map_err(|_| AppError::Auth("Invalid token".to_string()))?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
