use axum::{routing::{get, post}, Router};

use crate::{controllers, state::AppDBState};


pub fn create_friends_routes() -> Router<AppDBState> {
    Router::new()
        .route("/friends/:user_id", get(controllers::friends_controller::get_friends))
        .route("/add_friends/", post(controllers::friends_controller::add_friends))
        .route("/remove_friends/", post(controllers::friends_controller::remove_friends))
        .route("/health", get(controllers::health_controller::health))
}
