//! Tells whether a payload is null without turning it into JSON first.
//!
//! Going through `serde_json::Value` is not enough: non-finite floats also end
//! up as `Value::Null` even though the payload itself holds a value.

use derive_more::{Display, Error};
use serde::{
	ser::{self, Impossible},
	Serialize, Serializer,
};
use std::fmt;

/// Returns `true` for payloads that serialize as `None`, `()` or a unit struct,
/// looking through `Some` and newtype wrappers.
pub fn is_null<T>(payload: &T) -> bool
where
	T: Serialize + ?Sized,
{
	payload.serialize(NullCheck).unwrap_or(false)
}

// compound values bail out early through this error; they are never null
#[derive(Debug, Display, Error)]
#[display(fmt = "not null")]
struct NotNull;

impl ser::Error for NotNull {
	fn custom<T: fmt::Display>(_msg: T) -> Self {
		NotNull
	}
}

struct NullCheck;

macro_rules! not_null {
	($($method:ident: $ty:ty),* $(,)?) => {
		$(
			fn $method(self, _v: $ty) -> Result<bool, NotNull> {
				Ok(false)
			}
		)*
	};
}

impl Serializer for NullCheck {
	type Ok = bool;
	type Error = NotNull;
	type SerializeSeq = Impossible<bool, NotNull>;
	type SerializeTuple = Impossible<bool, NotNull>;
	type SerializeTupleStruct = Impossible<bool, NotNull>;
	type SerializeTupleVariant = Impossible<bool, NotNull>;
	type SerializeMap = Impossible<bool, NotNull>;
	type SerializeStruct = Impossible<bool, NotNull>;
	type SerializeStructVariant = Impossible<bool, NotNull>;

	not_null!(
		serialize_bool: bool,
		serialize_i8: i8,
		serialize_i16: i16,
		serialize_i32: i32,
		serialize_i64: i64,
		serialize_i128: i128,
		serialize_u8: u8,
		serialize_u16: u16,
		serialize_u32: u32,
		serialize_u64: u64,
		serialize_u128: u128,
		serialize_f32: f32,
		serialize_f64: f64,
		serialize_char: char,
		serialize_str: &str,
		serialize_bytes: &[u8],
	);

	fn serialize_none(self) -> Result<bool, NotNull> {
		Ok(true)
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<bool, NotNull> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<bool, NotNull> {
		Ok(true)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<bool, NotNull> {
		Ok(true)
	}

	fn serialize_unit_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
	) -> Result<bool, NotNull> {
		Ok(false)
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		value: &T,
	) -> Result<bool, NotNull> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_value: &T,
	) -> Result<bool, NotNull> {
		Ok(false)
	}

	fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, NotNull> {
		Err(NotNull)
	}

	fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, NotNull> {
		Err(NotNull)
	}

	fn serialize_tuple_struct(
		self,
		_name: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleStruct, NotNull> {
		Err(NotNull)
	}

	fn serialize_tuple_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleVariant, NotNull> {
		Err(NotNull)
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, NotNull> {
		Err(NotNull)
	}

	fn serialize_struct(
		self,
		_name: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStruct, NotNull> {
		Err(NotNull)
	}

	fn serialize_struct_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStructVariant, NotNull> {
		Err(NotNull)
	}
}
