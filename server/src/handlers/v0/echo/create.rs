use axum::{response::Response, Json};
use serde_json::Value;

use crate::{Controller, ServerResult};

pub async fn handler(controller: Controller, Json(payload): Json<Value>) -> ServerResult<Response> {
	controller.render(controller.json_net(payload))
}
