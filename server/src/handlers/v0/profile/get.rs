use axum::response::Response;
use serde::Serialize;

use crate::{Controller, ServerResult};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
	user_id: u64,
	user_name: &'static str,
	home_town: Option<&'static str>,
}

pub async fn handler(controller: Controller) -> ServerResult<Response> {
	let profile = Profile { user_id: 5, user_name: "ann", home_town: None };

	controller.render(controller.json_net(profile))
}
