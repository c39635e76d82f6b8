use axum::{
	http::{header, HeaderValue, Method, StatusCode},
	response::{IntoResponse, Response},
};
use log::warn;

/// A response buffered in memory until the action result has run.
///
/// Content type and charset are kept apart and only joined into a single
/// `Content-Type` header when the response is handed back to axum.
#[derive(Debug, Default)]
pub struct HttpResponse {
	content_type: Option<String>,
	charset: Option<String>,
	body: Vec<u8>,
}

impl HttpResponse {
	pub fn content_type(&self) -> Option<&str> {
		self.content_type.as_deref()
	}

	pub fn set_content_type(&mut self, content_type: &str) {
		self.content_type = Some(content_type.to_string());
	}

	pub fn charset(&self) -> Option<&str> {
		self.charset.as_deref()
	}

	pub fn set_charset(&mut self, charset: &str) {
		self.charset = Some(charset.to_string());
	}

	pub fn body(&self) -> &[u8] {
		&self.body
	}

	pub fn write(&mut self, bytes: &[u8]) {
		self.body.extend_from_slice(bytes);
	}

	pub fn is_untouched(&self) -> bool {
		self.content_type.is_none() && self.charset.is_none() && self.body.is_empty()
	}

	fn content_type_header(&self) -> Option<String> {
		self.content_type.as_ref().map(|content_type| match &self.charset {
			Some(charset) => format!("{content_type}; charset={charset}"),
			None => content_type.clone(),
		})
	}
}

impl IntoResponse for HttpResponse {
	fn into_response(self) -> Response {
		let content_type = self.content_type_header();

		let mut response = (StatusCode::OK, self.body).into_response();
		if let Some(content_type) = content_type {
			match HeaderValue::from_str(&content_type) {
				Ok(value) => {
					response.headers_mut().insert(header::CONTENT_TYPE, value);
				}
				Err(_) => warn!("dropping invalid content type `{content_type}`"),
			}
		}

		response
	}
}

/// Request and response pair handed to an action result.
#[derive(Debug)]
pub struct ControllerContext {
	method: Method,
	response: HttpResponse,
}

impl ControllerContext {
	pub fn new(method: Method) -> Self {
		Self { method, response: HttpResponse::default() }
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	pub fn response(&self) -> &HttpResponse {
		&self.response
	}

	pub fn response_mut(&mut self) -> &mut HttpResponse {
		&mut self.response
	}

	pub fn into_response(self) -> HttpResponse {
		self.response
	}
}
