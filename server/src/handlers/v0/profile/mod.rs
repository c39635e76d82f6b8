use axum::{routing::get, Router};

mod get;

pub fn get_routes() -> Router {
	// same handler on both verbs; the result itself refuses GET
	Router::new().route("/", get(get::handler).post(get::handler))
}
