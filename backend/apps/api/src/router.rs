//! Application Router
//!
//! Composes the auth and billing routers under `/api`.

use auth::{
    AuthAppState, authentication_router, domain::repository::UserRepository,
    require_access_token, users_router,
};
use axum::{Router, middleware};
use billing::{BillingAppState, bills_router, domain::repository::BillRepository};
use kernel::error::app_error::AppError;

/// Every route except login requires an access token.
pub fn app<R, B>(auth_state: AuthAppState<R>, billing_state: BillingAppState<B>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    B: BillRepository + Clone + Send + Sync + 'static,
{
    let bills = bills_router(billing_state).route_layer(middleware::from_fn_with_state(
        auth_state.clone(),
        require_access_token::<R>,
    ));

    Router::new()
        .nest("/api/authentication", authentication_router(auth_state.clone()))
        .nest("/api/users", users_router(auth_state))
        .nest("/api/bills", bills)
        .fallback(|| async { AppError::not_found("Route not found").with_code("ROUTE_NOT_FOUND") })
}
