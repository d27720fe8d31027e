use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::cart::controller::{add_to_cart, get_cart, update_cart};
use crate::catalog::controller::{index, list_books};
use crate::checkout::controller::checkout_cart;
use crate::core::controller::{AppState, method_not_allowed};

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.config.static_dir.as_str());
    Router::new()
        .route("/", get(index))
        .route("/books", get(list_books))
        .route("/cart", get(get_cart))
        .route("/add-to-cart", post(add_to_cart).fallback(method_not_allowed))
        .route("/update-cart", post(update_cart).fallback(method_not_allowed))
        .route("/checkout", post(checkout_cart).fallback(method_not_allowed))
        .nest_service("/static", static_files)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
