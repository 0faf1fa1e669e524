//! YAML 1.1 scalar resolution on top of serde_yaml.
//!
//! serde_yaml resolves plain scalars with YAML 1.2 core schema rules, so
//! `0644` stays a string and `yes`/`no`/`on`/`off` are not booleans. Ignition
//! configs are conventionally written against YAML 1.1, where `mode: 0644` is
//! the octal integer 420. [`DocumentSeed`] builds a [`Value`] tree and applies
//! the 1.1 octal and boolean rules to plain scalars only; quoted scalars keep
//! their string value.

use serde::de::{
    DeserializeSeed, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor,
};
use serde_yaml::value::{Tag, TaggedValue};
use serde_yaml::{Mapping, Number, Value};
use std::fmt;

/// Parse `input` with YAML 1.1 scalar resolution.
pub fn from_str(input: &str) -> Result<Value, serde_yaml::Error> {
    DocumentSeed::new(input).deserialize(serde_yaml::Deserializer::from_str(input))
}

/// Deserializes a document from `input` into a [`Value`] with YAML 1.1
/// scalar resolution.
///
/// Must be fed a deserializer reading from the same `input`: plain scalars are
/// told apart from quoted ones by where their borrowed text sits in it.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSeed<'de> {
    input: &'de str,
}

impl<'de> DocumentSeed<'de> {
    pub fn new(input: &'de str) -> Self {
        Self { input }
    }

    /// A borrowed scalar whose text is not directly preceded by a quote.
    fn is_plain(&self, scalar: &str) -> bool {
        let start = self.input.as_ptr() as usize;
        let Some(offset) = (scalar.as_ptr() as usize).checked_sub(start) else {
            return false;
        };
        if offset + scalar.len() > self.input.len() {
            return false;
        }
        !matches!(
            self.input.as_bytes()[..offset].last(),
            Some(b'"') | Some(b'\'')
        )
    }
}

impl<'de> DeserializeSeed<'de> for DocumentSeed<'de> {
    type Value = Value;

    fn deserialize<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for DocumentSeed<'de> {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    // Out of range for Number's integer forms.
    fn visit_i128<E>(self, v: i128) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v as f64)))
    }

    fn visit_u128<E>(self, v: u128) -> Result<Value, E> {
        Ok(Value::Number(Number::from(v as f64)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Value, E> {
        if self.is_plain(v) {
            Ok(resolve_plain(v))
        } else {
            Ok(Value::String(v.to_owned()))
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        self.deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut sequence = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element_seed(self)? {
            sequence.push(element);
        }
        Ok(Value::Sequence(sequence))
    }

    // Duplicate keys: the last one wins.
    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some(key) = map.next_key_seed(self)? {
            let value = map.next_value_seed(self)?;
            mapping.insert(key, value);
        }
        Ok(Value::Mapping(mapping))
    }

    fn visit_enum<A>(self, data: A) -> Result<Value, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, variant): (String, _) = data.variant()?;
        let value = variant.newtype_variant_seed(self)?;
        Ok(Value::Tagged(Box::new(TaggedValue {
            tag: Tag::new(tag),
            value,
        })))
    }
}

/// Resolve a plain scalar that YAML 1.2 left as a string.
fn resolve_plain(scalar: &str) -> Value {
    if let Some(boolean) = parse_bool(scalar) {
        return Value::Bool(boolean);
    }
    if let Some(int) = parse_octal(scalar) {
        return Value::Number(int.into());
    }
    Value::String(scalar.to_owned())
}

/// The YAML 1.1 boolean words that YAML 1.2 dropped.
fn parse_bool(scalar: &str) -> Option<bool> {
    match scalar {
        "yes" | "Yes" | "YES" | "on" | "On" | "ON" => Some(true),
        "no" | "No" | "NO" | "off" | "Off" | "OFF" => Some(false),
        _ => None,
    }
}

/// `[-+]?0[0-7_]+`, read in base 8 with underscores dropped.
fn parse_octal(scalar: &str) -> Option<i64> {
    let (negative, unsigned) = match scalar.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, scalar.strip_prefix('+').unwrap_or(scalar)),
    };
    let digits = unsigned.strip_prefix('0')?;
    if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'7' | b'_')) {
        return None;
    }

    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Some(0);
    }
    let value = i64::from_str_radix(&digits, 8).ok()?;
    Some(if negative { -value } else { value })
}
