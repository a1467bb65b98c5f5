use axum::{
    extract::rejection::QueryRejection, extract::Query, response::Json, Extension,
};
use std::sync::Arc;

use crate::api::rest::dto::{CalculationResult, OperandsQuery};
use crate::api::rest::error::RestError;
use crate::domain::Service;

fn operands(query: Result<Query<OperandsQuery>, QueryRejection>) -> Result<OperandsQuery, RestError> {
    let Query(operands) =
        query.map_err(|_| RestError::bad_request("Missing or invalid operands"))?;
    Ok(operands)
}

/// Add two numbers
#[utoipa::path(
    get,
    path = "/calculator/add",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Sum of the operands", body = CalculationResult),
        (status = 400, description = "Missing or invalid operand", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn add(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<Json<CalculationResult>, RestError> {
    let OperandsQuery { a, b } = operands(query)?;
    Ok(Json(CalculationResult {
        result: svc.add(a, b),
    }))
}

/// Subtract the second number from the first
#[utoipa::path(
    get,
    path = "/calculator/subtract",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Difference of the operands", body = CalculationResult),
        (status = 400, description = "Missing or invalid operand", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn subtract(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<Json<CalculationResult>, RestError> {
    let OperandsQuery { a, b } = operands(query)?;
    Ok(Json(CalculationResult {
        result: svc.subtract(a, b),
    }))
}

/// Multiply two numbers
#[utoipa::path(
    get,
    path = "/calculator/multiply",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Product of the operands", body = CalculationResult),
        (status = 400, description = "Missing or invalid operand", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn multiply(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<Json<CalculationResult>, RestError> {
    let OperandsQuery { a, b } = operands(query)?;
    Ok(Json(CalculationResult {
        result: svc.multiply(a, b),
    }))
}

/// Divide the first number by the second
#[utoipa::path(
    get,
    path = "/calculator/divide",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Quotient of the operands", body = CalculationResult),
        (status = 400, description = "Missing operand, invalid operand, or zero divisor", body = crate::api::rest::error::ErrorResponse)
    )
)]
pub async fn divide(
    Extension(svc): Extension<Arc<Service>>,
    query: Result<Query<OperandsQuery>, QueryRejection>,
) -> Result<Json<CalculationResult>, RestError> {
    let OperandsQuery { a, b } = operands(query)?;
    let result = svc.divide(a, b)?;
    Ok(Json(CalculationResult { result }))
}
