//! Serde bridge into [`PlistValue`].
//!
//! Project files have no numeric or boolean types, so the conversion is lossy
//! in one direction only: everything becomes strings, arrays and dictionaries.
//!
//! | Rust | Plist |
//! |------|-------|
//! | struct, map | dictionary |
//! | `Vec`, tuple, slice | array |
//! | `bool` | `YES` / `NO` |
//! | integers, floats | decimal string |
//! | `String`, `&str`, `char` | string |
//! | unit enum variant | variant name |
//! | `None`, `()` | omitted from dictionaries |
//!
//! ```rust
//! use serde::Serialize;
//! use serde_pbxproj::to_value;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct FileReference {
//!     isa: &'static str,
//!     last_known_file_type: &'static str,
//!     path: &'static str,
//!     include_in_index: Option<bool>,
//! }
//!
//! let value = to_value(&FileReference {
//!     isa: "PBXFileReference",
//!     last_known_file_type: "sourcecode.swift",
//!     path: "main.swift",
//!     include_in_index: None,
//! })
//! .unwrap();
//!
//! let dict = value.as_dictionary().unwrap();
//! assert_eq!(dict.len(), 3);
//! assert!(!dict.contains_key("includeInIndex"));
//! ```

use crate::{Error, PlistMap, PlistValue, Result};
use serde::{ser, Serialize};

/// Serializer producing a [`PlistValue`].
///
/// The output type is `Option<PlistValue>`: values with no representation
/// (`None`, `()`) serialize to `Ok(None)`, and dictionaries drop those entries.
/// Arrays and the top level reject them. Most callers want
/// [`to_value`](crate::to_value), which unwraps the option and reports the
/// unrepresentable case as [`Error::UnsupportedType`].
pub struct PlistValueSerializer;

impl PlistValueSerializer {
    fn scalar(s: impl Into<String>) -> Result<Option<PlistValue>> {
        Ok(Some(PlistValue::from(s.into())))
    }
}

pub(crate) fn to_plist_value<T>(value: &T) -> Result<PlistValue>
where
    T: ?Sized + Serialize,
{
    value
        .serialize(PlistValueSerializer)?
        .ok_or_else(|| Error::unsupported_type("a missing value cannot stand on its own"))
}

impl ser::Serializer for PlistValueSerializer {
    type Ok = Option<PlistValue>;
    type Error = Error;

    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = SerializeArray;
    type SerializeTupleVariant = SerializeVariant<SerializeArray>;
    type SerializeMap = SerializeDictionary;
    type SerializeStruct = SerializeDictionary;
    type SerializeStructVariant = SerializeVariant<SerializeDictionary>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Some(PlistValue::from(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Self::scalar(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(v as u64)
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Self::scalar(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        if !v.is_finite() {
            return Err(Error::unsupported_type("non-finite float"));
        }
        Self::scalar(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        if !v.is_finite() {
            return Err(Error::unsupported_type("non-finite float"));
        }
        Self::scalar(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Self::scalar(v)
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Self::scalar(v)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(Error::unsupported_type("byte arrays"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Self::scalar(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        let mut dict = PlistMap::new();
        if let Some(inner) = value.serialize(PlistValueSerializer)? {
            dict.insert(variant, inner);
        }
        Ok(Some(PlistValue::Dictionary(dict)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeArray {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeArray {
                items: Vec::with_capacity(len),
            },
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeDictionary {
            dict: PlistMap::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeVariant {
            variant,
            inner: SerializeDictionary {
                dict: PlistMap::with_capacity(len),
                current_key: None,
            },
        })
    }
}

pub struct SerializeArray {
    items: Vec<PlistValue>,
}

impl SerializeArray {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        // Arrays have no way to express a hole
        self.items.push(to_plist_value(value)?);
        Ok(())
    }

    fn finish(self) -> PlistValue {
        PlistValue::Array(self.items)
    }
}

impl ser::SerializeSeq for SerializeArray {
    type Ok = Option<PlistValue>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(self.finish()))
    }
}

impl ser::SerializeTuple for SerializeArray {
    type Ok = Option<PlistValue>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(self.finish()))
    }
}

impl ser::SerializeTupleStruct for SerializeArray {
    type Ok = Option<PlistValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(self.finish()))
    }
}

pub struct SerializeDictionary {
    dict: PlistMap,
    current_key: Option<String>,
}

impl SerializeDictionary {
    fn entry<T>(&mut self, key: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if let Some(value) = value.serialize(PlistValueSerializer)? {
            self.dict.insert(key, value);
        }
        Ok(())
    }

    fn finish(self) -> PlistValue {
        PlistValue::Dictionary(self.dict)
    }
}

impl ser::SerializeMap for SerializeDictionary {
    type Ok = Option<PlistValue>;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_plist_value(key)? {
            PlistValue::String(s) => {
                self.current_key = Some(s.string);
                Ok(())
            }
            _ => Err(Error::custom("Map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.entry(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(self.finish()))
    }
}

impl ser::SerializeStruct for SerializeDictionary {
    type Ok = Option<PlistValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entry(key.to_string(), value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(self.finish()))
    }
}

/// Wraps a tuple or struct variant as `{ Variant = ...; }`.
pub struct SerializeVariant<S> {
    variant: &'static str,
    inner: S,
}

impl<S> SerializeVariant<S> {
    fn wrap(variant: &'static str, value: PlistValue) -> Option<PlistValue> {
        let mut dict = PlistMap::new();
        dict.insert(variant, value);
        Some(PlistValue::Dictionary(dict))
    }
}

impl ser::SerializeTupleVariant for SerializeVariant<SerializeArray> {
    type Ok = Option<PlistValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Self::wrap(self.variant, self.inner.finish()))
    }
}

impl ser::SerializeStructVariant for SerializeVariant<SerializeDictionary> {
    type Ok = Option<PlistValue>;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.entry(key.to_string(), value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Self::wrap(self.variant, self.inner.finish()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_value;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Settings {
        #[serde(rename = "SWIFT_VERSION")]
        swift_version: f32,
        #[serde(rename = "ENABLE_TESTABILITY")]
        enable_testability: bool,
        #[serde(rename = "OTHER_LDFLAGS")]
        other_ldflags: Vec<&'static str>,
        #[serde(rename = "CODE_SIGN_IDENTITY")]
        code_sign_identity: Option<String>,
    }

    #[derive(Serialize)]
    enum Kind {
        Plain,
        Tagged(u32),
        Pair(u8, u8),
        Named { a: u8 },
    }

    #[test]
    fn test_struct_to_dictionary() {
        let value = to_value(&Settings {
            swift_version: 5.0,
            enable_testability: true,
            other_ldflags: vec!["-ObjC"],
            code_sign_identity: None,
        })
        .unwrap();

        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("SWIFT_VERSION").and_then(|v| v.as_str()), Some("5"));
        assert_eq!(dict.get("ENABLE_TESTABILITY").and_then(|v| v.as_str()), Some("YES"));
        assert_eq!(
            dict.get("OTHER_LDFLAGS").and_then(|v| v.as_array()).map(Vec::len),
            Some(1)
        );
        assert!(!dict.contains_key("CODE_SIGN_IDENTITY"));
    }

    #[test]
    fn test_map_keys_and_numbers() {
        let mut map = BTreeMap::new();
        map.insert("count", 3u64);
        let value = to_value(&map).unwrap();
        assert_eq!(
            value.as_dictionary().and_then(|d| d.get("count")).and_then(|v| v.as_str()),
            Some("3")
        );

        let mut bad = BTreeMap::new();
        bad.insert(vec![1u8], 1u8);
        assert!(to_value(&bad).is_err());
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(to_value(&Kind::Plain).unwrap().as_str(), Some("Plain"));

        let tagged = to_value(&Kind::Tagged(7)).unwrap();
        assert_eq!(
            tagged.as_dictionary().and_then(|d| d.get("Tagged")).and_then(|v| v.as_str()),
            Some("7")
        );

        let pair = to_value(&Kind::Pair(1, 2)).unwrap();
        assert!(pair
            .as_dictionary()
            .and_then(|d| d.get("Pair"))
            .map_or(false, |v| v.is_array()));

        let named = to_value(&Kind::Named { a: 1 }).unwrap();
        assert!(named
            .as_dictionary()
            .and_then(|d| d.get("Named"))
            .map_or(false, |v| v.is_dictionary()));
    }

    #[test]
    fn test_unrepresentable_values() {
        assert!(matches!(to_value(&None::<u8>), Err(Error::UnsupportedType(_))));
        assert!(to_value(&vec![Some(1u8), None]).is_err());
        assert!(to_value(&f64::NAN).is_err());
        assert!(matches!(to_value(&f32::NAN), Err(Error::UnsupportedType(_))));
        assert!(to_value(&f32::INFINITY).is_err());
        assert!(to_value(&f64::NEG_INFINITY).is_err());
        assert!(to_value(&Bytes).is_err());
    }

    struct Bytes;

    impl Serialize for Bytes {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.serialize_bytes(b"raw")
        }
    }
}
