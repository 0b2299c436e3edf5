//! Create Bill Use Case

use std::sync::Arc;

use crate::domain::entity::bill::Bill;
use crate::domain::repository::BillRepository;
use crate::domain::value_object::{
    bill_name::BillName, bill_total::BillTotal, paid_status::PaidStatus,
};
use crate::error::BillingResult;

/// Unvalidated bill fields, shared by create and update
pub struct BillInput {
    pub name: String,
    pub total: f64,
    pub paid: String,
}

impl BillInput {
    pub(crate) fn validate(&self) -> BillingResult<(BillName, BillTotal, PaidStatus)> {
        Ok((
            BillName::new(&self.name)?,
            BillTotal::new(self.total)?,
            PaidStatus::new(&self.paid)?,
        ))
    }
}

pub struct CreateBillUseCase<B>
where
    B: BillRepository,
{
    bill_repo: Arc<B>,
}

impl<B> CreateBillUseCase<B>
where
    B: BillRepository,
{
    pub fn new(bill_repo: Arc<B>) -> Self {
        Self { bill_repo }
    }

    pub async fn execute(&self, input: BillInput) -> BillingResult<Bill> {
        let (name, total, paid) = input.validate()?;
        let bill = Bill::new(name, total, paid);

        self.bill_repo.create(&bill).await?;

        tracing::info!(bill_id = %bill.bill_id, "Bill created");

        Ok(bill)
    }
}
