//! Camel-casing of JSON property names.
//!
//! Keys written without separators follow the Json.NET convention: the leading
//! run of upper-case letters is lowered, except for the letter that starts the
//! next word (`URLValue` becomes `urlValue`). Keys with `_`, `-` or spaces are
//! split into words and joined back in camelCase (`user_name` becomes
//! `userName`). Leading and trailing separators are kept, so `_links` is left
//! alone.

use derive_more::{Display, Error};
use serde::Serialize;
use serde_json::{Map, Value};

const SEPARATORS: [char; 3] = ['_', '-', ' '];

#[derive(Debug, Display, Error)]
pub enum CasingError {
	#[display(fmt = "could not serialize payload: {error}")]
	Serialize { error: serde_json::Error },

	#[display(fmt = "duplicate property `{key}` after camel-casing")]
	DuplicateKey { key: String },
}

impl From<serde_json::Error> for CasingError {
	fn from(e: serde_json::Error) -> CasingError {
		CasingError::Serialize { error: e }
	}
}

fn is_separator(c: char) -> bool {
	SEPARATORS.contains(&c)
}

pub fn to_camel_case(key: &str) -> String {
	let body = key.trim_matches(is_separator);
	if body.is_empty() {
		return key.to_string();
	}

	let start = key.len() - key.trim_start_matches(is_separator).len();
	let (prefix, suffix) = (&key[..start], &key[start + body.len()..]);

	let mut ret = String::with_capacity(key.len());
	ret.push_str(prefix);

	if body.contains(is_separator) {
		for (i, word) in body.split(is_separator).filter(|w| !w.is_empty()).enumerate() {
			let word = if is_shouting(word) { word.to_lowercase() } else { word.to_string() };
			if i == 0 {
				ret.push_str(&lower_leading(&word));
			} else {
				ret.push_str(&upper_first(&word));
			}
		}
	} else {
		ret.push_str(&lower_leading(body));
	}

	ret.push_str(suffix);
	ret
}

/// Recursively renames every object key in `value`, keeping key order.
pub fn camelize_keys(value: Value) -> Result<Value, CasingError> {
	Ok(match value {
		Value::Object(map) => {
			let mut ret = Map::with_capacity(map.len());
			for (key, value) in map.into_iter() {
				let key = to_camel_case(&key);
				if ret.contains_key(&key) {
					return Err(CasingError::DuplicateKey { key });
				}

				ret.insert(key, camelize_keys(value)?);
			}

			Value::Object(ret)
		}
		Value::Array(values) => {
			Value::Array(values.into_iter().map(camelize_keys).collect::<Result<_, _>>()?)
		}
		value => value,
	})
}

/// Converts `payload` into a JSON value with camel-cased property names.
pub fn to_camel_value<T>(payload: &T) -> Result<Value, CasingError>
where
	T: Serialize + ?Sized,
{
	camelize_keys(serde_json::to_value(payload)?)
}

fn is_shouting(word: &str) -> bool {
	word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

fn lower_leading(word: &str) -> String {
	let chars = word.chars().collect::<Vec<char>>();
	if !chars.first().map_or(false, |c| c.is_uppercase()) {
		return word.to_string();
	}

	let mut ret = String::with_capacity(word.len());
	let mut is_lowering = true;
	for (i, c) in chars.iter().enumerate() {
		if is_lowering {
			if i == 1 && !c.is_uppercase() {
				is_lowering = false;
			} else if i > 0 && chars.get(i + 1).map_or(false, |next| !next.is_uppercase()) {
				// last capital of the run starts the next word
				is_lowering = false;
			}
		}

		if is_lowering {
			ret.extend(c.to_lowercase());
		} else {
			ret.push(*c);
		}
	}

	ret
}

fn upper_first(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
