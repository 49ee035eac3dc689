//! Rejection of non-finite floats in handler payloads
//!
//! `serde_json` encodes `NaN` and the infinities as `null`. Payloads are walked
//! with `FloatGuard` before conversion so such values fail loudly instead.

use serde::Serialize;
use serde::ser;
use std::fmt;
use thiserror::Error;

/// A payload contained a float JSON cannot represent
#[derive(Debug, Error)]
#[error("{0}")]
pub struct NonFiniteError(String);

impl ser::Error for NonFiniteError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self(msg.to_string())
    }
}

/// Fail if `value` serializes any `NaN` or infinite float
pub fn ensure_finite<T: Serialize + ?Sized>(value: &T) -> Result<(), NonFiniteError> {
    value.serialize(FloatGuard)
}

#[derive(Clone, Copy)]
struct FloatGuard;

type Walk = Result<(), NonFiniteError>;

fn check_float(v: f64) -> Walk {
    if v.is_finite() {
        Ok(())
    } else {
        Err(NonFiniteError(format!("float value {} is not valid JSON", v)))
    }
}

impl ser::Serializer for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> Walk {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Walk {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Walk {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Walk {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Walk {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Walk {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Walk {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Walk {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Walk {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Walk {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Walk {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Walk {
        check_float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Walk {
        check_float(v)
    }

    fn serialize_char(self, _v: char) -> Walk {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Walk {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Walk {
        Ok(())
    }

    fn serialize_none(self) -> Walk {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Walk {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Walk {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Walk {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> Walk {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Walk {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Walk {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, NonFiniteError> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, NonFiniteError> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self, NonFiniteError> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, NonFiniteError> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, NonFiniteError> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self, NonFiniteError> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, NonFiniteError> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(*self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeTuple for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(*self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(*self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(*self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeMap for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Walk {
        key.serialize(*self)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Walk {
        value.serialize(*self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeStruct for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Walk {
        value.serialize(*self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FloatGuard {
    type Ok = ();
    type Error = NonFiniteError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Walk {
        value.serialize(*self)
    }

    fn end(self) -> Walk {
        Ok(())
    }
}
