use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{
    auth_middleware, error, handlers, request_logger::request_logger, state::AppState,
    user_handlers,
};

pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/panic", get(handlers::trigger_failure))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(user_handlers::list_users))
        .route("/users", post(user_handlers::create_user))
        .route("/users/:id", get(user_handlers::get_user))
        .route("/users/:id/profile", get(user_handlers::get_user_profile))
}

/// Creation route behind the access gate. `route_layer` keeps the gate off
/// the fallback and the public routes.
pub fn protected_user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/users", post(user_handlers::create_user))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth_middleware::require_api_key,
        ))
}

/// Assembles the application: public routes, gated routes, the 404
/// fallback, the fault boundary, and the request logger outermost so its
/// timing covers everything below it.
pub fn build(state: AppState) -> Router {
    Router::new()
        .merge(demo_routes())
        .merge(user_routes())
        .merge(protected_user_routes(state.clone()))
        .fallback(handlers::route_not_found)
        .layer(CatchPanicLayer::custom(error::recover_panic))
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}
