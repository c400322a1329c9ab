//! Ordo Core Domain
//!
//! Pure domain types for placing a single futures order: the validated
//! request, the exchange's answer, and the lot-size rules used to
//! quantise quantities. No async, no I/O, 100% unit testable.

pub mod entities;
pub mod error;
pub mod instruments;
pub mod validation;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    OrderKind, OrderRequest, OrderResult, OrderStatus, OrderType, Side, TimeInForce, WorkingType,
};
pub use error::{ParseEnumError, ValidationError, ValidationResult};
pub use instruments::LotSize;
pub use validation::{MAX_TRAILING_DELTA, OrderParams, OrderRequestBuilder, check_symbol};
pub use values::{Price, Quantity, Symbol};
