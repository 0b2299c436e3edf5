//! Update Bill Use Case
//!
//! Replaces name, total and paid status of an existing bill.

use std::sync::Arc;

use kernel::id::BillId;

use crate::application::create_bill::BillInput;
use crate::domain::repository::BillRepository;
use crate::error::{BillingError, BillingResult};

pub struct UpdateBillUseCase<B>
where
    B: BillRepository,
{
    bill_repo: Arc<B>,
}

impl<B> UpdateBillUseCase<B>
where
    B: BillRepository,
{
    pub fn new(bill_repo: Arc<B>) -> Self {
        Self { bill_repo }
    }

    pub async fn execute(&self, bill_id: &BillId, input: BillInput) -> BillingResult<()> {
        let (name, total, paid) = input.validate()?;

        let mut bill = self
            .bill_repo
            .find_by_id(bill_id)
            .await?
            .ok_or(BillingError::BillNotFound)?;

        bill.update(name, total, paid);

        if !self.bill_repo.update(&bill).await? {
            return Err(BillingError::BillNotFound);
        }

        tracing::info!(bill_id = %bill_id, "Bill updated");

        Ok(())
    }
}
