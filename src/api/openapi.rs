//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, comments, foods, health, user_foods, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodHub API",
        version = "1.0.0",
        description = "Food Booking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::liveness,
        health::health_check,
        // Auth
        auth::issue_token,
        // Users
        users::upsert_user,
        users::admin_status,
        users::list_users,
        users::grant_admin,
        users::delete_user,
        // Foods
        foods::create_food,
        foods::list_foods,
        foods::get_food,
        foods::upsert_food,
        foods::delete_food,
        // Bookings
        bookings::create_booking,
        bookings::my_bookings,
        bookings::list_all_bookings,
        bookings::confirm_booking,
        // User foods
        user_foods::create_user_food,
        user_foods::my_user_foods,
        user_foods::delete_user_food,
        // Comments
        comments::create_comment,
        comments::list_comments,
    ),
    components(
        schemas(
            // Auth
            auth::TokenRequest,
            auth::TokenResponse,
            // Users
            crate::models::user::User,
            crate::models::user::UpsertUser,
            crate::models::user::AdminStatus,
            // Foods
            crate::models::food::Food,
            crate::models::user_food::UserFood,
            // Bookings
            crate::models::booking::Booking,
            // Comments
            crate::models::comment::Comment,
            // Write acknowledgements
            crate::models::ack::InsertAck,
            crate::models::ack::UpdateAck,
            crate::models::ack::DeleteAck,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness endpoints"),
        (name = "auth", description = "Token issuance"),
        (name = "users", description = "User account management"),
        (name = "foods", description = "Food catalog management"),
        (name = "bookings", description = "Booking management"),
        (name = "userFoods", description = "User-submitted foods"),
        (name = "comments", description = "Comments"),
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
