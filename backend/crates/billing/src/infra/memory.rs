//! In-Memory Repository Implementation

use std::sync::Arc;

use kernel::id::BillId;
use tokio::sync::RwLock;

use crate::domain::entity::bill::Bill;
use crate::domain::repository::BillRepository;
use crate::error::BillingResult;

/// Bills in insertion order
#[derive(Clone, Default)]
pub struct InMemoryBillRepository {
    bills: Arc<RwLock<Vec<Bill>>>,
}

impl InMemoryBillRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.bills.read().await.len()
    }
}

impl BillRepository for InMemoryBillRepository {
    async fn create(&self, bill: &Bill) -> BillingResult<()> {
        self.bills.write().await.push(bill.clone());
        Ok(())
    }

    async fn find_by_id(&self, bill_id: &BillId) -> BillingResult<Option<Bill>> {
        let bills = self.bills.read().await;
        Ok(bills.iter().find(|b| &b.bill_id == bill_id).cloned())
    }

    async fn list_all(&self) -> BillingResult<Vec<Bill>> {
        Ok(self.bills.read().await.clone())
    }

    async fn update(&self, bill: &Bill) -> BillingResult<bool> {
        let mut bills = self.bills.write().await;
        match bills.iter_mut().find(|b| b.bill_id == bill.bill_id) {
            Some(stored) => {
                *stored = bill.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, bill_id: &BillId) -> BillingResult<bool> {
        let mut bills = self.bills.write().await;
        let before = bills.len();
        bills.retain(|b| &b.bill_id != bill_id);
        Ok(bills.len() != before)
    }
}
