//! API route configuration.

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::{delete, get, post, put};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, CreateGroupRequest, ErrorResponse, GroupResponse, HealthResponse, UpdateGroupRequest,
    UserRequest, UserResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// Applies the turbofish to handlers that are generic over `Database`.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "Users, groups and their memberships",
        license(name = "MIT")
    ),
    paths(
        handlers::health,
        handlers::create_user,
        handlers::get_user,
        handlers::update_user,
        handlers::delete_user,
        handlers::create_group,
        handlers::get_group,
        handlers::update_group,
        handlers::delete_group,
    ),
    components(
        schemas(
            HealthResponse,
            UserResponse,
            UserRequest,
            GroupResponse,
            CreateGroupRequest,
            UpdateGroupRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "groups", description = "Group management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(handlers::health));

    // User routes (generic over Database)
    let user_routes = routes!(D => {
        post "/users" => handlers::create_user,
        get "/users/{userid}" => handlers::get_user,
        put "/users/{userid}" => handlers::update_user,
        delete "/users/{userid}" => handlers::delete_user,
    });

    // Group routes (generic over Database)
    let group_routes = routes!(D => {
        post "/groups" => handlers::create_group,
        get "/groups/{name}" => handlers::get_group,
        put "/groups/{name}" => handlers::update_group,
        delete "/groups/{name}" => handlers::delete_group,
    });

    system_routes
        .merge(user_routes)
        .merge(group_routes)
        .merge(Scalar::with_url("/docs", api))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        // Bodiless responses such as 204 still advertise JSON
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}
