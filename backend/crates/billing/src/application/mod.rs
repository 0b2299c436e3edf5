//! Application Layer
//!
//! Bill use cases.

pub mod config;
pub mod create_bill;
pub mod delete_bill;
pub mod get_bill;
pub mod list_bills;
pub mod update_bill;

pub use config::BillingConfig;
pub use create_bill::{BillInput, CreateBillUseCase};
pub use delete_bill::DeleteBillUseCase;
pub use get_bill::GetBillUseCase;
pub use list_bills::ListBillsUseCase;
pub use update_bill::UpdateBillUseCase;
