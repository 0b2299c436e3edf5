//! Billing Router

use axum::{Router, routing::get};

use crate::domain::repository::BillRepository;
use crate::presentation::handlers::{self, BillingAppState};

/// Bill CRUD, meant to be nested under `/api/bills`.
///
/// Routes are unauthenticated here. The caller adds the access token check:
///
/// ```ignore
/// bills_router(billing_state).route_layer(axum::middleware::from_fn_with_state(
///     auth_state,
///     auth::require_access_token::<PgUserRepository>,
/// ))
/// ```
pub fn bills_router<B>(state: BillingAppState<B>) -> Router
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(handlers::list_bills::<B>).post(handlers::create_bill::<B>),
        )
        .route(
            "/{id}",
            get(handlers::get_bill::<B>)
                .put(handlers::update_bill::<B>)
                .delete(handlers::delete_bill::<B>),
        )
        .with_state(state)
}
