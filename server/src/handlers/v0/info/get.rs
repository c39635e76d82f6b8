use axum::response::Response;
use serde::Serialize;

use crate::{result::JsonRequestBehavior, Controller, ServerResult};

#[derive(Serialize)]
pub struct Info {
	version: &'static str,
	deny_get_by_default: bool,
}

pub async fn handler(controller: Controller) -> ServerResult<Response> {
	let info = Info {
		version: env!("CARGO_PKG_VERSION"),
		deny_get_by_default: JsonRequestBehavior::default() == JsonRequestBehavior::DenyGet,
	};

	controller.render(controller.json_net_with(info, JsonRequestBehavior::AllowGet))
}
