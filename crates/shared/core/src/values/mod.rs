use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Quantity value - uses Decimal so step-size arithmetic is exact
pub type Quantity = Decimal;

/// Exchange ticker, e.g. `BTCUSDT`
pub type Symbol = String;
