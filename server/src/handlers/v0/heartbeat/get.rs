use axum::response::Response;

use crate::{result::JsonRequestBehavior, Controller, ServerResult};

pub async fn handler(controller: Controller) -> ServerResult<Response> {
	controller.render(controller.json_net_with((), JsonRequestBehavior::AllowGet))
}
