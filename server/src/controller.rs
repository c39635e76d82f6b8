use axum::{
	async_trait,
	extract::FromRequestParts,
	http::{request::Parts, Method},
	response::{IntoResponse, Response},
};
use serde::Serialize;
use std::convert::Infallible;

use crate::{
	context::ControllerContext,
	result::{ActionResult, JsonNetResult, JsonRequestBehavior},
	ServerResult,
};

/// Base for handlers that answer with action results.
///
/// Extracted from the request, it keeps the request method so `render` can
/// run a result against a fresh [`ControllerContext`].
#[derive(Debug, Clone)]
pub struct Controller {
	method: Method,
}

#[async_trait]
impl<S> FromRequestParts<S> for Controller
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		Ok(Controller::new(parts.method.clone()))
	}
}

impl Controller {
	pub fn new(method: Method) -> Self {
		Self { method }
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn json_net<T: Serialize>(&self, payload: T) -> JsonNetResult<T> {
		JsonNetResult::new(payload)
	}

	pub fn json_net_with<T: Serialize>(
		&self,
		payload: T,
		behavior: impl Into<JsonRequestBehavior>,
	) -> JsonNetResult<T> {
		JsonNetResult::with_behavior(payload, behavior)
	}

	pub fn render<R: ActionResult>(&self, result: R) -> ServerResult<Response> {
		let mut context = ControllerContext::new(self.method.clone());
		result.execute(Some(&mut context))?;

		Ok(context.into_response().into_response())
	}
}
