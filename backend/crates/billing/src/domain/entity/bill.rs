//! Bill Entity

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use kernel::id::BillId;
use platform::list_query::FieldAccess;

use crate::domain::value_object::{
    bill_name::BillName, bill_total::BillTotal, paid_status::PaidStatus,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub bill_id: BillId,
    pub name: BillName,
    pub total: BillTotal,
    pub paid: PaidStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    pub fn new(name: BillName, total: BillTotal, paid: PaidStatus) -> Self {
        let now = Utc::now();

        Self {
            bill_id: BillId::new(),
            name,
            total,
            paid,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, name: BillName, total: BillTotal, paid: PaidStatus) {
        self.name = name;
        self.total = total;
        self.paid = paid;
        self.updated_at = Utc::now();
    }
}

/// `total` is searched and sorted by its text form, so `"100"` sorts before
/// `"25"`.
impl FieldAccess for Bill {
    const FIELDS: &'static [&'static str] = &["name", "total", "paid"];

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "total" => Some(Cow::Owned(self.total.to_string())),
            "paid" => Some(Cow::Borrowed(self.paid.as_str())),
            _ => None,
        }
    }
}
