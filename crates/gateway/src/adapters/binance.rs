//! Binance USD-M futures adapter

use async_trait::async_trait;
use log::info;
use ordo_core::{LotSize, OrderRequest, OrderResult};
use ordo_ports::{ApiResult, FuturesApi};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{Credentials, GatewayConfig};
use crate::messages::account::{AssetBalance, ExchangeInfo, available_balance};
use crate::messages::order::{FuturesOrderResponse, order_params};
use crate::rest_client::RestClient;

/// REST paths used by the adapter
pub mod endpoints {
    pub const ACCOUNT: &str = "/fapi/v2/account";
    pub const BALANCE: &str = "/fapi/v2/balance";
    pub const EXCHANGE_INFO: &str = "/fapi/v1/exchangeInfo";
    pub const ORDER: &str = "/fapi/v1/order";
}

/// Futures account-and-order API backed by the exchange's REST endpoints
#[derive(Clone)]
pub struct BinanceFutures {
    rest: RestClient,
}

impl BinanceFutures {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    /// Build a signed client and check the exchange accepts the credentials
    pub async fn authenticate(
        config: &GatewayConfig,
        credentials: &Credentials,
    ) -> ApiResult<Self> {
        let api = Self::new(RestClient::new(config, credentials)?);
        api.verify_connection().await?;
        info!("Successfully connected to {}", api.rest.base_url());
        Ok(api)
    }
}

/// `k=v` pairs in wire order, for the audit log
fn format_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl FuturesApi for BinanceFutures {
    async fn verify_connection(&self) -> ApiResult<()> {
        let _: serde_json::Value = self.rest.get_signed(endpoints::ACCOUNT, &[]).await?;
        Ok(())
    }

    async fn balance(&self, asset: &str) -> ApiResult<Decimal> {
        let balances: Vec<AssetBalance> = self.rest.get_signed(endpoints::BALANCE, &[]).await?;
        Ok(available_balance(&balances, asset))
    }

    async fn lot_size(&self, symbol: &str) -> ApiResult<Option<LotSize>> {
        let info: ExchangeInfo = self.rest.get_public(endpoints::EXCHANGE_INFO, &[]).await?;
        Ok(info.lot_size(symbol))
    }

    async fn submit_order(&self, order: &OrderRequest) -> ApiResult<OrderResult> {
        let client_order_id = Uuid::new_v4().simple().to_string();
        let params = order_params(order, &client_order_id);
        info!("Placing order with params: {}", format_params(&params));

        let resp: FuturesOrderResponse = self.rest.post_signed(endpoints::ORDER, &params).await?;
        Ok(resp.into())
    }
}
