use axum::{routing::get, Router};

mod create;
mod get;

pub fn get_routes() -> Router {
	Router::new().route("/", get(get::handler).post(create::handler))
}
