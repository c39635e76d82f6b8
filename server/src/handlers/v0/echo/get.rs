use axum::response::Response;
use serde_json::json;

use crate::{Controller, ServerResult};

// denied by default, so GET callers get the blocked-request error
pub async fn handler(controller: Controller) -> ServerResult<Response> {
	let sample = json!({ "UserId": 5, "UserName": "ann", "Home_Town": null });

	controller.render(controller.json_net(sample))
}
