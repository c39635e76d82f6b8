use derive_more::{Display, Error};
use log::{debug, warn};
use serde::Serialize;

use crate::context::ControllerContext;
use camelback_common::{
	casing::{self, CasingError},
	nullness,
};

pub static APPLICATION_JSON: &str = "application/json";
pub static UTF_8: &str = "utf-8";

/// Whether a JSON result may answer `GET` requests.
///
/// Denied by default: a JSON body served to `GET` can be loaded cross-site by
/// a `<script>` tag and leak whatever the action returned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum JsonRequestBehavior {
	AllowGet,
	#[default]
	DenyGet,
}

impl From<bool> for JsonRequestBehavior {
	fn from(allow_get: bool) -> Self {
		if allow_get {
			JsonRequestBehavior::AllowGet
		} else {
			JsonRequestBehavior::DenyGet
		}
	}
}

#[derive(Debug, Display, Error)]
pub enum ResultError {
	#[display(fmt = "missing argument `{name}`")]
	InvalidArgument { name: &'static str },

	#[display(
		fmt = "This request has been blocked because sensitive information could be disclosed \
		       to third party web sites when this is used in a GET request. To allow GET \
		       requests, set JsonRequestBehavior to AllowGet."
	)]
	RequestBlocked,

	#[display(fmt = "could not serialize payload: {error}")]
	Serialization { error: serde_json::Error },

	#[display(fmt = "duplicate property `{key}` after camel-casing")]
	DuplicateKey { key: String },
}

impl From<CasingError> for ResultError {
	fn from(e: CasingError) -> ResultError {
		match e {
			CasingError::Serialize { error } => ResultError::Serialization { error },
			CasingError::DuplicateKey { key } => ResultError::DuplicateKey { key },
		}
	}
}

impl From<serde_json::Error> for ResultError {
	fn from(e: serde_json::Error) -> ResultError {
		ResultError::Serialization { error: e }
	}
}

/// The execution hook run once a controller action has produced its result.
pub trait ActionResult {
	fn execute(self, context: Option<&mut ControllerContext>) -> Result<(), ResultError>;
}

/// Writes `payload` as compact JSON with camel-cased property names.
///
/// A null payload (`None`, `()`, `Value::Null`) leaves the body empty; the
/// content type is still set.
#[derive(Debug)]
pub struct JsonNetResult<T> {
	payload: T,
	behavior: JsonRequestBehavior,
}

impl<T: Serialize> JsonNetResult<T> {
	pub fn new(payload: T) -> Self {
		Self::with_behavior(payload, JsonRequestBehavior::default())
	}

	pub fn with_behavior(payload: T, behavior: impl Into<JsonRequestBehavior>) -> Self {
		Self { payload, behavior: behavior.into() }
	}

	pub fn payload(&self) -> &T {
		&self.payload
	}

	pub fn behavior(&self) -> JsonRequestBehavior {
		self.behavior
	}

	pub fn allow_get(&self) -> bool {
		self.behavior == JsonRequestBehavior::AllowGet
	}
}

impl<T: Serialize> ActionResult for JsonNetResult<T> {
	fn execute(self, context: Option<&mut ControllerContext>) -> Result<(), ResultError> {
		let context = context.ok_or(ResultError::InvalidArgument { name: "controller_context" })?;

		if !self.allow_get() && context.method().as_str().eq_ignore_ascii_case("GET") {
			warn!("blocked json result for `{}` request", context.method());
			return Err(ResultError::RequestBlocked);
		}

		// serialize before touching the response so a failure leaves it untouched
		let body = if nullness::is_null(&self.payload) {
			None
		} else {
			Some(serde_json::to_vec(&casing::to_camel_value(&self.payload)?)?)
		};

		let response = context.response_mut();
		response.set_charset(UTF_8);
		response.set_content_type(APPLICATION_JSON);

		if let Some(body) = body {
			debug!("writing {} byte json result", body.len());
			response.write(&body);
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::Method;
	use serde_json::{json, Value};
	use std::collections::BTreeMap;

	#[derive(Serialize)]
	#[allow(non_snake_case)]
	struct Account {
		UserId: u32,
		UserName: &'static str,
	}

	fn run<T: Serialize>(
		method: Method,
		result: JsonNetResult<T>,
	) -> (Result<(), ResultError>, ControllerContext) {
		let mut context = ControllerContext::new(method);
		let ret = result.execute(Some(&mut context));
		(ret, context)
	}

	#[test]
	fn test_default_behavior() {
		let result = JsonNetResult::new(1);
		assert_eq!(result.behavior(), JsonRequestBehavior::DenyGet);
		assert!(!result.allow_get());

		assert!(JsonNetResult::with_behavior(1, true).allow_get());
		assert!(!JsonNetResult::with_behavior(1, false).allow_get());
		assert!(JsonNetResult::with_behavior(1, JsonRequestBehavior::AllowGet).allow_get());
	}

	#[test]
	fn test_missing_context() {
		let ret = JsonNetResult::new(json!({})).execute(None);
		assert!(matches!(ret, Err(ResultError::InvalidArgument { name: "controller_context" })));
	}

	#[test]
	fn test_exact_body() {
		let (ret, context) =
			run(Method::POST, JsonNetResult::new(Account { UserId: 5, UserName: "ann" }));

		assert!(ret.is_ok());
		assert_eq!(context.response().body(), br#"{"userId":5,"userName":"ann"}"#);
		assert_eq!(context.response().content_type(), Some("application/json"));
		assert_eq!(context.response().charset(), Some("utf-8"));
	}

	#[test]
	fn test_get_blocked() {
		let (ret, context) = run(Method::GET, JsonNetResult::new(json!({ "Secret": 1 })));

		assert!(matches!(ret, Err(ResultError::RequestBlocked)));
		assert!(context.response().is_untouched());
	}

	#[test]
	fn test_get_blocked_any_case() {
		let method = Method::from_bytes(b"get").unwrap();
		let (ret, context) = run(method, JsonNetResult::new(json!({ "Secret": 1 })));

		assert!(matches!(ret, Err(ResultError::RequestBlocked)));
		assert!(context.response().is_untouched());
	}

	#[test]
	fn test_get_allowed() {
		let (ret, context) = run(
			Method::GET,
			JsonNetResult::with_behavior(json!({ "Items": [{ "ItemId": 1 }] }), true),
		);

		assert!(ret.is_ok());
		assert_eq!(context.response().body(), br#"{"items":[{"itemId":1}]}"#);
	}

	#[test]
	fn test_other_methods_pass() {
		for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH, Method::HEAD] {
			let (ret, context) = run(method, JsonNetResult::new(json!({ "Ok": true })));

			assert!(ret.is_ok());
			assert_eq!(context.response().body(), br#"{"ok":true}"#);
		}
	}

	#[test]
	fn test_null_payload() {
		for payload in [None, Some(Value::Null)] {
			let (ret, context) = run(Method::POST, JsonNetResult::new(payload));

			assert!(ret.is_ok());
			assert!(context.response().body().is_empty());
			assert_eq!(context.response().content_type(), Some("application/json"));
			assert_eq!(context.response().charset(), Some("utf-8"));
		}

		let (ret, context) = run(Method::POST, JsonNetResult::new(()));
		assert!(ret.is_ok());
		assert!(context.response().body().is_empty());
	}

	#[test]
	fn test_non_finite_float_is_written() {
		let (ret, context) = run(Method::POST, JsonNetResult::new(f64::NAN));

		assert!(ret.is_ok());
		assert_eq!(context.response().body(), b"null");
	}

	#[test]
	fn test_wide_integers() {
		let (ret, context) = run(Method::POST, JsonNetResult::new(u128::MAX));
		assert!(ret.is_ok());
		assert_eq!(context.response().body(), u128::MAX.to_string().as_bytes());

		let payload = BTreeMap::from([("Min_Value", i128::MIN)]);
		let (ret, context) = run(Method::POST, JsonNetResult::new(payload));
		assert!(ret.is_ok());
		assert_eq!(
			context.response().body(),
			format!(r#"{{"minValue":{}}}"#, i128::MIN).as_bytes()
		);
	}

	#[test]
	fn test_snake_case_payload() {
		let payload = BTreeMap::from([("created_at", json!({ "time_zone": "UTC" }))]);
		let (ret, context) = run(Method::POST, JsonNetResult::new(payload));

		assert!(ret.is_ok());
		assert_eq!(context.response().body(), br#"{"createdAt":{"timeZone":"UTC"}}"#);
	}

	#[test]
	fn test_duplicate_key() {
		let (ret, context) =
			run(Method::POST, JsonNetResult::new(json!({ "UserId": 1, "user_id": 2 })));

		assert!(matches!(ret, Err(ResultError::DuplicateKey { .. })));
		assert!(context.response().is_untouched());
	}

	#[test]
	fn test_unserializable_payload() {
		let payload = BTreeMap::from([(vec![1u8], 1)]);
		let (ret, context) = run(Method::POST, JsonNetResult::new(payload));

		assert!(matches!(ret, Err(ResultError::Serialization { .. })));
		assert!(context.response().is_untouched());
	}

	#[test]
	fn test_blocked_message() {
		assert!(ResultError::RequestBlocked
			.to_string()
			.ends_with("To allow GET requests, set JsonRequestBehavior to AllowGet."));
	}
}
