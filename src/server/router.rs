//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its OpenAPI specification, and Swagger UI
//! is served at `/api/docs` for interactive exploration of the API.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Routes are grouped by resource under `/user`, `/product`, `/order`, `/expense`,
/// `/notification` and `/payment`. The OpenAPI specification is available at
/// `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, session and CORS layers are added
/// by the caller.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, paystack };
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Luxe", description = "Luxe marketplace and expense tracker API"), tags(
        (name = controller::user::USER_TAG, description = "Account, profile and cart API routes"),
        (name = controller::product::PRODUCT_TAG, description = "Product listing API routes"),
        (name = controller::order::ORDER_TAG, description = "Order API routes"),
        (name = controller::expense::EXPENSE_TAG, description = "Expense tracking API routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Notification API routes"),
        (name = controller::payment::PAYMENT_TAG, description = "Payment gateway API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::register))
        .routes(routes!(controller::user::login))
        .routes(routes!(controller::user::logout))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::update_user))
        .routes(routes!(controller::user::delete_user))
        .routes(routes!(controller::user::upload_profile_image))
        .routes(routes!(controller::user::delete_profile_image))
        .routes(routes!(controller::user::toggle_cart))
        .routes(routes!(controller::user::get_cart))
        .routes(routes!(controller::product::create_product))
        .routes(routes!(controller::product::get_all_products))
        .routes(routes!(controller::product::get_product))
        .routes(routes!(controller::product::get_seller_products))
        .routes(routes!(controller::product::update_product))
        .routes(routes!(controller::product::delete_product))
        .routes(routes!(controller::order::create_order))
        .routes(routes!(controller::order::my_orders))
        .routes(routes!(controller::order::cancel_order))
        .routes(routes!(controller::order::seller_orders))
        .routes(routes!(controller::order::get_all_orders))
        .routes(routes!(controller::order::update_order_status))
        .routes(routes!(controller::expense::create_expense))
        .routes(routes!(controller::expense::get_all_expenses))
        .routes(routes!(controller::expense::get_expense))
        .routes(routes!(controller::expense::update_expense))
        .routes(routes!(controller::expense::delete_expense))
        .routes(routes!(controller::expense::get_summary))
        .routes(routes!(controller::notification::get_all_notifications))
        .routes(routes!(controller::notification::delete_notification))
        .routes(routes!(controller::notification::delete_all_notifications))
        .routes(routes!(controller::payment::initiate_payment))
        .routes(routes!(controller::payment::verify_payment))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
