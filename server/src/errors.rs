use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use derive_more::{Display, Error};
use eyre::Report;
use log::error;
use serde_json::json;

use crate::result::ResultError;

#[derive(Debug, Display, Error)]
pub enum ServerError {
	#[display(fmt = "{reason}")]
	MethodNotAllowed { reason: String },

	#[display(fmt = "not found")]
	NotFound,

	#[display(fmt = "internal server error")]
	Internal { error: Report },
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let http_code = match self {
			ServerError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
			ServerError::NotFound => StatusCode::NOT_FOUND,
			ServerError::Internal { ref error } => {
				error!("{error:?}");
				StatusCode::INTERNAL_SERVER_ERROR
			}
		};

		let body = Json(json!({
			"error": self.to_string(),
		}));

		(http_code, body).into_response()
	}
}

impl From<ResultError> for ServerError {
	fn from(e: ResultError) -> ServerError {
		match e {
			ResultError::RequestBlocked => ServerError::MethodNotAllowed { reason: e.to_string() },
			_ => ServerError::Internal { error: Report::new(e) },
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_codes() {
		let codes = [
			(ServerError::from(ResultError::RequestBlocked), StatusCode::METHOD_NOT_ALLOWED),
			(
				ServerError::from(ResultError::InvalidArgument { name: "controller_context" }),
				StatusCode::INTERNAL_SERVER_ERROR,
			),
			(ServerError::NotFound, StatusCode::NOT_FOUND),
		];

		for (server_error, status) in codes.into_iter() {
			assert_eq!(server_error.into_response().status(), status);
		}
	}
}
