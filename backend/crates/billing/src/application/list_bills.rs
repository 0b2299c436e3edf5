//! List Bills Use Case

use std::sync::Arc;

use platform::list_query::{self, ListQuery, Page};

use crate::domain::entity::bill::Bill;
use crate::domain::repository::BillRepository;
use crate::error::BillingResult;

pub struct ListBillsUseCase<B>
where
    B: BillRepository,
{
    bill_repo: Arc<B>,
}

impl<B> ListBillsUseCase<B>
where
    B: BillRepository,
{
    pub fn new(bill_repo: Arc<B>) -> Self {
        Self { bill_repo }
    }

    pub async fn execute<V, F>(&self, query: &ListQuery, project: F) -> BillingResult<Page<V>>
    where
        F: FnMut(&Bill) -> V,
    {
        let bills = self.bill_repo.list_all().await?;
        Ok(list_query::query(&bills, query, project))
    }
}
