//! Core arithmetic over two floating-point operands.

use tracing::debug;

use crate::domain::error::CalculatorError;

/// Stateless domain service for the four arithmetic operations.
///
/// Beyond the division-by-zero check there is no special handling; results
/// follow native floating-point semantics.
#[derive(Clone, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    pub fn add(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        a + b
    }

    /// Subtract `b` from `a` and return the difference.
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        a - b
    }

    /// Multiply two numbers and return the product.
    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        a * b
    }

    /// Divide `a` by `b`, failing when the divisor is exactly zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(a / b)
    }
}
