//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use kernel::id::BillId;
use platform::list_query::{ListQuery, ListQueryParams, Page};

use crate::application::config::BillingConfig;
use crate::application::{
    BillInput, CreateBillUseCase, DeleteBillUseCase, GetBillUseCase, ListBillsUseCase,
    UpdateBillUseCase,
};
use crate::domain::repository::BillRepository;
use crate::error::{BillingError, BillingResult};
use crate::presentation::dto::{BillDetail, BillRequest, BillSummary, IdResponse};

/// Shared state for bill handlers
#[derive(Clone)]
pub struct BillingAppState<B>
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<B>,
    pub config: Arc<BillingConfig>,
}

impl<B> BillingAppState<B>
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: B, config: BillingConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// GET /api/bills
pub async fn list_bills<B>(
    State(state): State<BillingAppState<B>>,
    Query(params): Query<ListQueryParams>,
) -> BillingResult<Json<Page<BillSummary>>>
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    let query = ListQuery::from_params(&params, state.config.default_page_size);

    let page = ListBillsUseCase::new(state.repo.clone())
        .execute(&query, |bill| BillSummary::from(bill))
        .await?;

    Ok(Json(page))
}

/// GET /api/bills/{id}
pub async fn get_bill<B>(
    State(state): State<BillingAppState<B>>,
    Path(id): Path<String>,
) -> BillingResult<Json<BillDetail>>
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    let bill_id = parse_bill_id(&id)?;
    let bill = GetBillUseCase::new(state.repo.clone())
        .execute(&bill_id)
        .await?;

    Ok(Json(BillDetail::from(&bill)))
}

/// POST /api/bills
pub async fn create_bill<B>(
    State(state): State<BillingAppState<B>>,
    Json(req): Json<BillRequest>,
) -> BillingResult<Json<BillDetail>>
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    let bill = CreateBillUseCase::new(state.repo.clone())
        .execute(bill_input(req))
        .await?;

    Ok(Json(BillDetail::from(&bill)))
}

/// PUT /api/bills/{id}
pub async fn update_bill<B>(
    State(state): State<BillingAppState<B>>,
    Path(id): Path<String>,
    Json(req): Json<BillRequest>,
) -> BillingResult<Json<IdResponse>>
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    let bill_id = parse_bill_id(&id)?;
    UpdateBillUseCase::new(state.repo.clone())
        .execute(&bill_id, bill_input(req))
        .await?;

    Ok(Json(IdResponse {
        id: bill_id.to_string(),
    }))
}

/// DELETE /api/bills/{id}
pub async fn delete_bill<B>(
    State(state): State<BillingAppState<B>>,
    Path(id): Path<String>,
) -> BillingResult<Json<IdResponse>>
where
    B: BillRepository + Clone + Send + Sync + 'static,
{
    let bill_id = parse_bill_id(&id)?;
    DeleteBillUseCase::new(state.repo.clone())
        .execute(&bill_id)
        .await?;

    Ok(Json(IdResponse {
        id: bill_id.to_string(),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_bill_id(raw: &str) -> BillingResult<BillId> {
    raw.parse().map_err(|_| BillingError::BillNotFound)
}

fn bill_input(req: BillRequest) -> BillInput {
    BillInput {
        name: req.name,
        total: req.total,
        paid: req.paid,
    }
}
