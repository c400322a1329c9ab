use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::values::Quantity;

/// Quantity rules from the exchange's LOT_SIZE filter for one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotSize {
    pub min_qty: Quantity,
    pub max_qty: Quantity,
    /// Quantity increment; zero disables quantisation
    pub step_size: Quantity,
}

impl LotSize {
    pub fn new(min_qty: Quantity, max_qty: Quantity, step_size: Quantity) -> Self {
        Self {
            min_qty,
            max_qty,
            step_size,
        }
    }

    /// Check the quantity lies within `[min_qty, max_qty]`
    pub fn check_range(&self, quantity: Quantity) -> ValidationResult<()> {
        if quantity < self.min_qty || quantity > self.max_qty {
            return Err(ValidationError::QuantityOutOfRange {
                quantity,
                min: self.min_qty,
                max: self.max_qty,
            });
        }
        Ok(())
    }

    /// Validate that a quantity conforms to the step size
    pub fn is_on_step(&self, quantity: Quantity) -> bool {
        if self.step_size == Decimal::ZERO {
            return true;
        }
        (quantity % self.step_size) == Decimal::ZERO
    }

    /// Round a quantity to the nearest multiple of the step size
    ///
    /// Rejects quantities outside `[min_qty, max_qty]`. Ties round away
    /// from zero. The result is kept inside the range by whole steps, so it
    /// stays legal even when the bounds are not themselves multiples of the
    /// step.
    pub fn round_quantity(&self, quantity: Quantity) -> ValidationResult<Quantity> {
        self.check_range(quantity)?;
        if self.is_on_step(quantity) {
            return Ok(quantity);
        }

        let step = self.step_size;

        let lowest = (self.min_qty / step).ceil() * step;
        let highest = (self.max_qty / step).floor() * step;
        if lowest > highest {
            return Err(ValidationError::QuantityOutOfRange {
                quantity,
                min: self.min_qty,
                max: self.max_qty,
            });
        }

        let steps =
            (quantity / step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let rounded = (steps * step).clamp(lowest, highest).normalize();

        if rounded <= Decimal::ZERO {
            return Err(ValidationError::InvalidQuantity(rounded));
        }
        Ok(rounded)
    }
}
