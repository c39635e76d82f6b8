use axum::Router;

mod echo;
mod heartbeat;
mod info;
mod profile;

pub fn get_routes() -> Router {
	Router::new()
		.nest("/heartbeat", heartbeat::get_routes())
		.nest("/info", info::get_routes())
		.nest("/echo", echo::get_routes())
		.nest("/profile", profile::get_routes())
}
