//! Account and exchange metadata wire types

use ordo_core::{LotSize, Quantity};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of the futures balance list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub asset: String,
    pub balance: Decimal,
    pub available_balance: Decimal,
}

/// Available balance of `asset`, zero when it is not listed
pub fn available_balance(balances: &[AssetBalance], asset: &str) -> Decimal {
    balances
        .iter()
        .find(|b| b.asset == asset)
        .map(|b| b.available_balance)
        .unwrap_or(Decimal::ZERO)
}

/// Trading rules for every listed symbol
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub filters: Vec<SymbolFilter>,
}

/// A symbol filter; only LOT_SIZE fields are decoded
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolFilter {
    pub filter_type: String,
    pub min_qty: Option<Quantity>,
    pub max_qty: Option<Quantity>,
    pub step_size: Option<Quantity>,
}

impl ExchangeInfo {
    /// LOT_SIZE rules for `symbol`
    pub fn lot_size(&self, symbol: &str) -> Option<LotSize> {
        self.symbols
            .iter()
            .find(|s| s.symbol == symbol)?
            .filters
            .iter()
            .filter(|f| f.filter_type == "LOT_SIZE")
            .find_map(|f| Some(LotSize::new(f.min_qty?, f.max_qty?, f.step_size?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const EXCHANGE_INFO: &str = r#"{
        "timezone": "UTC",
        "serverTime": 1700000000000,
        "symbols": [
            {
                "symbol": "BTCUSDT",
                "status": "TRADING",
                "filters": [
                    {"filterType": "PRICE_FILTER", "minPrice": "556.80", "maxPrice": "4529764", "tickSize": "0.10"},
                    {"filterType": "LOT_SIZE", "minQty": "0.001", "maxQty": "1000", "stepSize": "0.001"},
                    {"filterType": "MARKET_LOT_SIZE", "minQty": "0.001", "maxQty": "120", "stepSize": "0.001"}
                ]
            },
            {
                "symbol": "ETHUSDT",
                "status": "TRADING",
                "filters": [
                    {"filterType": "PRICE_FILTER", "tickSize": "0.01"}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_lot_size_from_exchange_info() {
        let info: ExchangeInfo = serde_json::from_str(EXCHANGE_INFO).unwrap();

        assert_eq!(
            info.lot_size("BTCUSDT"),
            Some(LotSize::new(dec!(0.001), dec!(1000), dec!(0.001)))
        );
    }

    #[test]
    fn test_missing_filter_or_symbol() {
        let info: ExchangeInfo = serde_json::from_str(EXCHANGE_INFO).unwrap();

        assert_eq!(info.lot_size("ETHUSDT"), None);
        assert_eq!(info.lot_size("DOGEUSDT"), None);
    }

    #[test]
    fn test_available_balance() {
        let json = r#"[
            {"accountAlias": "SgsR", "asset": "BNB", "balance": "0.5", "availableBalance": "0.5"},
            {"accountAlias": "SgsR", "asset": "USDT", "balance": "15000.00", "availableBalance": "14250.75"}
        ]"#;
        let balances: Vec<AssetBalance> = serde_json::from_str(json).unwrap();

        assert_eq!(available_balance(&balances, "USDT"), dec!(14250.75));
        assert_eq!(available_balance(&balances, "BTC"), Decimal::ZERO);
    }
}
