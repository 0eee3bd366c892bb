use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppDBState;


pub mod conf;
pub mod controllers;
pub mod errors;
pub mod logging_tracing;
pub mod routes;
pub mod state;
pub mod store;

pub fn app(state: AppDBState) -> Router {
    Router::new()
        .merge(routes::friends_routes::create_friends_routes())
        .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()))
        .with_state(state)
}
