use async_trait::async_trait;
use ordo_core::{LotSize, OrderRequest, OrderResult};
use rust_decimal::Decimal;

use crate::error::ApiResult;

/// Port for the futures account-and-order API
///
/// Implementations own the connection, authentication and request
/// signing. Every call may fail with a structured [`crate::ApiError`].
#[async_trait]
pub trait FuturesApi: Send + Sync {
    /// Check that the credentials are accepted by the exchange
    async fn verify_connection(&self) -> ApiResult<()>;

    /// Available balance of `asset`; zero when the account does not hold it
    async fn balance(&self, asset: &str) -> ApiResult<Decimal>;

    /// LOT_SIZE rules for `symbol`, or `None` when the exchange lists none
    async fn lot_size(&self, symbol: &str) -> ApiResult<Option<LotSize>>;

    /// Submit a validated order
    async fn submit_order(&self, order: &OrderRequest) -> ApiResult<OrderResult>;
}
