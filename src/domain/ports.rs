use crate::domain::model::{CapturedOrder, CreatedOrder, OrderDraft};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Seam between the gateway and the payment vendor. The gateway only ever
/// needs these two calls.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_order(&self, draft: &OrderDraft) -> Result<CreatedOrder>;

    async fn capture_order(&self, order_id: &str) -> Result<CapturedOrder>;
}
