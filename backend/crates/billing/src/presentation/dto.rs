//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::bill::Bill;
use crate::domain::value_object::{bill_total::BillTotal, paid_status::PaidStatus};

/// Body of `POST /bills` and `PUT /bills/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct BillRequest {
    pub name: String,
    pub total: f64,
    pub paid: String,
}

/// Listing row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillSummary {
    pub id: String,
    pub name: String,
    pub total: BillTotal,
    pub paid: PaidStatus,
}

impl From<&Bill> for BillSummary {
    fn from(bill: &Bill) -> Self {
        Self {
            id: bill.bill_id.to_string(),
            name: bill.name.to_string(),
            total: bill.total,
            paid: bill.paid,
        }
    }
}

/// Detail and create responses carry no id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillDetail {
    pub name: String,
    pub total: BillTotal,
    pub paid: PaidStatus,
}

impl From<&Bill> for BillDetail {
    fn from(bill: &Bill) -> Self {
        Self {
            name: bill.name.to_string(),
            total: bill.total,
            paid: bill.paid,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IdResponse {
    pub id: String,
}
