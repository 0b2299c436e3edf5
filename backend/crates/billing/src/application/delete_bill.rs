//! Delete Bill Use Case

use std::sync::Arc;

use kernel::id::BillId;

use crate::domain::repository::BillRepository;
use crate::error::{BillingError, BillingResult};

pub struct DeleteBillUseCase<B>
where
    B: BillRepository,
{
    bill_repo: Arc<B>,
}

impl<B> DeleteBillUseCase<B>
where
    B: BillRepository,
{
    pub fn new(bill_repo: Arc<B>) -> Self {
        Self { bill_repo }
    }

    pub async fn execute(&self, bill_id: &BillId) -> BillingResult<()> {
        if !self.bill_repo.delete(bill_id).await? {
            return Err(BillingError::BillNotFound);
        }

        tracing::info!(bill_id = %bill_id, "Bill deleted");

        Ok(())
    }
}
