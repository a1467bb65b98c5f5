use thiserror::Error;

/// Errors produced by calculator operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Division by zero")]
    DivisionByZero,
}
