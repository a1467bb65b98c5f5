use axum::response::Json;
use utoipa::OpenApi;

/// Aggregated OpenAPI document for every REST operation the gateway exposes.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Testbed API",
        version = "0.1.0",
        description = "Demonstration HTTP API exposing a user directory and a calculator"
    ),
    paths(
        users_directory::api::rest::handlers::list_users,
        users_directory::api::rest::handlers::get_user,
        users_directory::api::rest::handlers::create_user,
        users_directory::api::rest::handlers::update_user,
        users_directory::api::rest::handlers::delete_user,
        calculator::api::rest::handlers::add,
        calculator::api::rest::handlers::subtract,
        calculator::api::rest::handlers::multiply,
        calculator::api::rest::handlers::divide,
    ),
    components(schemas(
        users_directory::api::rest::dto::UserDto,
        users_directory::api::rest::dto::CreateUserReq,
        users_directory::api::rest::dto::UpdateUserReq,
        users_directory::api::rest::error::ErrorResponse,
        calculator::api::rest::dto::CalculationResult,
    )),
    tags(
        (name = "users", description = "User directory operations"),
        (name = "calculator", description = "Arithmetic over two operands")
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
