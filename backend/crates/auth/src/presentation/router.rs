//! Auth Routers

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_access_token;

/// `POST /login`, meant to be nested under `/api/authentication`
pub fn authentication_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}

/// User management, meant to be nested under `/api/users`. Every route
/// requires an access token.
pub fn users_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route(
            "/{id}/change-password",
            patch(handlers::change_password::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_access_token::<R>,
        ))
        .with_state(state)
}
