//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::BillId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::bill::Bill;
use crate::domain::repository::BillRepository;
use crate::domain::value_object::{
    bill_name::BillName, bill_total::BillTotal, paid_status::PaidStatus,
};
use crate::error::{BillingError, BillingResult};

const BILL_COLUMNS: &str = "bill_id, name, total, paid, created_at, updated_at";

/// PostgreSQL-backed bill repository
#[derive(Clone)]
pub struct PgBillRepository {
    pool: PgPool,
}

impl PgBillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BillRepository for PgBillRepository {
    async fn create(&self, bill: &Bill) -> BillingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bills (
                bill_id,
                name,
                total,
                paid,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(bill.bill_id.as_uuid())
        .bind(bill.name.as_str())
        .bind(bill.total.value())
        .bind(bill.paid.as_str())
        .bind(bill.created_at)
        .bind(bill.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, bill_id: &BillId) -> BillingResult<Option<Bill>> {
        let row = sqlx::query_as::<_, BillRow>(&format!(
            "SELECT {BILL_COLUMNS} FROM bills WHERE bill_id = $1"
        ))
        .bind(bill_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(BillRow::into_bill).transpose()
    }

    async fn list_all(&self) -> BillingResult<Vec<Bill>> {
        let rows = sqlx::query_as::<_, BillRow>(&format!(
            "SELECT {BILL_COLUMNS} FROM bills ORDER BY created_at, bill_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BillRow::into_bill).collect()
    }

    async fn update(&self, bill: &Bill) -> BillingResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE bills
            SET name = $2,
                total = $3,
                paid = $4,
                updated_at = $5
            WHERE bill_id = $1
            "#,
        )
        .bind(bill.bill_id.as_uuid())
        .bind(bill.name.as_str())
        .bind(bill.total.value())
        .bind(bill.paid.as_str())
        .bind(bill.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, bill_id: &BillId) -> BillingResult<bool> {
        let result = sqlx::query("DELETE FROM bills WHERE bill_id = $1")
            .bind(bill_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BillRow {
    bill_id: Uuid,
    name: String,
    total: f64,
    paid: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BillRow {
    fn into_bill(self) -> BillingResult<Bill> {
        // CHECK constraint keeps `paid` to yes/no; anything else is corruption
        let paid = PaidStatus::new(&self.paid).map_err(|_| {
            BillingError::Internal(format!("invalid paid status in database: {}", self.paid))
        })?;

        Ok(Bill {
            bill_id: BillId::from_uuid(self.bill_id),
            name: BillName::from_db(self.name),
            total: BillTotal::from_db(self.total),
            paid,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
