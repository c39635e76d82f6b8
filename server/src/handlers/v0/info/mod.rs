use axum::{routing::get, Router};

mod get;

pub fn get_routes() -> Router {
	Router::new().route("/", get(get::handler))
}
