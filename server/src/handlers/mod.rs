use axum::Router;

mod v0;

pub fn get_routes() -> Router {
	Router::new().nest("/v0", v0::get_routes())
}
