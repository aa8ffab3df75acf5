use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use shared_utils::extractor::auth_middleware;

use crate::{handlers, AuthCellState};

pub fn auth_routes(state: Arc<AuthCellState>) -> Router {
    let public_routes = Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login));

    let protected_routes = Router::new()
        .route("/profile", get(handlers::get_profile))
        .route("/admin/users", get(handlers::get_all_users))
        .route("/admin/appointments", get(handlers::get_all_appointments))
        .route("/admin/doctors", post(handlers::add_doctor))
        .route("/admin/doctors/{doctor_id}", delete(handlers::remove_doctor))
        .route("/admin/analytics", get(handlers::get_analytics))
        .layer(middleware::from_fn_with_state(
            state.config.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
