//! Get Bill Use Case

use std::sync::Arc;

use kernel::id::BillId;

use crate::domain::entity::bill::Bill;
use crate::domain::repository::BillRepository;
use crate::error::{BillingError, BillingResult};

pub struct GetBillUseCase<B>
where
    B: BillRepository,
{
    bill_repo: Arc<B>,
}

impl<B> GetBillUseCase<B>
where
    B: BillRepository,
{
    pub fn new(bill_repo: Arc<B>) -> Self {
        Self { bill_repo }
    }

    pub async fn execute(&self, bill_id: &BillId) -> BillingResult<Bill> {
        self.bill_repo
            .find_by_id(bill_id)
            .await?
            .ok_or(BillingError::BillNotFound)
    }
}
