//! Application Configuration

/// Billing application configuration
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Page size for `GET /bills` when the request has none
    pub default_page_size: Option<usize>,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            default_page_size: Some(10),
        }
    }
}
