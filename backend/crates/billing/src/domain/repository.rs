//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::id::BillId;

use crate::domain::entity::bill::Bill;
use crate::error::BillingResult;

/// Bill repository trait
#[trait_variant::make(BillRepository: Send)]
pub trait LocalBillRepository {
    async fn create(&self, bill: &Bill) -> BillingResult<()>;

    async fn find_by_id(&self, bill_id: &BillId) -> BillingResult<Option<Bill>>;

    /// Every bill, oldest first
    async fn list_all(&self) -> BillingResult<Vec<Bill>>;

    /// Returns `false` if the bill no longer exists.
    async fn update(&self, bill: &Bill) -> BillingResult<bool>;

    /// Returns `false` if there was nothing to delete.
    async fn delete(&self, bill_id: &BillId) -> BillingResult<bool>;
}
