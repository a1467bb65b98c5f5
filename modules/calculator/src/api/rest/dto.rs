use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters carrying the two operands of an operation.
///
/// Both are required; a missing or unparsable operand rejects the request
/// before it reaches the domain service.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct OperandsQuery {
    /// First operand
    pub a: f64,
    /// Second operand
    pub b: f64,
}

/// REST DTO for a calculation result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CalculationResult {
    pub result: f64,
}
