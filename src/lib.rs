//! FoodHub Food Booking Server
//!
//! A Rust implementation of the FoodHub food-booking backend, providing a
//! REST JSON API over a MongoDB document store for users, foods,
//! user-submitted foods, bookings, and comments, with JWT bearer
//! authentication and admin-role authorization.

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration: the frontend is served from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Liveness
        .route("/", get(api::health::liveness))
        .route("/health", get(api::health::health_check))
        // Token issuance
        .route("/jwt", post(api::auth::issue_token))
        // Users
        .route("/users/:email", put(api::users::upsert_user))
        .route("/users/admin", get(api::users::list_users))
        .route(
            "/users/admin/:id",
            get(api::users::admin_status)
                .patch(api::users::grant_admin)
                .delete(api::users::delete_user),
        )
        // Foods
        .route(
            "/foods/admin",
            post(api::foods::create_food).get(api::foods::list_foods),
        )
        .route(
            "/foods/admin/:id",
            get(api::foods::get_food)
                .put(api::foods::upsert_food)
                .delete(api::foods::delete_food),
        )
        // Bookings
        .route(
            "/bookings",
            post(api::bookings::create_booking).get(api::bookings::my_bookings),
        )
        .route("/admin/bookings", get(api::bookings::list_all_bookings))
        .route("/admin/bookings/:id", patch(api::bookings::confirm_booking))
        // User foods
        .route(
            "/userFoods",
            post(api::user_foods::create_user_food).get(api::user_foods::my_user_foods),
        )
        .route("/userFoods/:id", delete(api::user_foods::delete_user_food))
        // Comments
        .route(
            "/comments",
            post(api::comments::create_comment).get(api::comments::list_comments),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    routes
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
