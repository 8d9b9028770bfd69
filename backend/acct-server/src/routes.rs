use crate::{
    AppState, authenticate, create_user, delete_user, get_user, health, list_users, me, register,
    replace_user, require_authenticated, update_user,
};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Outermost first: resolve the caller, then insist on one
    let protected: Router<AppState> = Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users/me/", get(me))
        .route(
            "/users/{id}/",
            get(get_user)
                .put(replace_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route_layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(state.clone(), authenticate))
                .layer(middleware::from_fn(require_authenticated)),
        );

    Router::new()
        .route("/register/", post(register))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .merge(protected)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
