// SPDX-License-Identifier: MIT OR Apache-2.0

//! A small, explicit JSON value type.
//!
//! The toolkit works with resource and registry data that started life as
//! JSON but needs to flow through content-addressed collectors, merges,
//! and comparisons that `serde_json::Value` makes awkward to reason
//! about precisely (its `Object` is a `Map` whose ordering is a build
//! flag away from changing under us). [`JsonValue`] pins that decision:
//! object fields preserve insertion order via `indexmap`, which matters
//! for round-tripping normalized registry records but nothing else in
//! the core depends on key order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A JSON value with an order-preserving object representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(IndexMap<String, JsonValue>),
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, JsonValue>> {
        match self {
            JsonValue::Object(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Deep-merge `other` into `self` per the `augment` merge method
    /// (§4.J): objects merge key by key (recursing on shared keys),
    /// arrays concatenate, and anything else (including a type
    /// mismatch) is a scalar short-circuit that replaces `self`.
    pub fn augment(&mut self, other: &JsonValue) {
        match (self, other) {
            (JsonValue::Object(a), JsonValue::Object(b)) => {
                for (k, v) in b {
                    match a.get_mut(k) {
                        Some(existing) => existing.augment(v),
                        None => {
                            a.insert(k.clone(), v.clone());
                        }
                    }
                }
            }
            (JsonValue::Array(a), JsonValue::Array(b)) => {
                a.extend(b.iter().cloned());
            }
            (slot, other) => {
                *slot = other.clone();
            }
        }
    }

    /// `replace` merge method (§4.J): the candidate's value entirely
    /// overwrites the accumulator.
    pub fn replace(&mut self, other: &JsonValue) {
        *self = other.clone();
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(a) => JsonValue::Array(a.into_iter().map(Into::into).collect()),
            serde_json::Value::Object(o) => {
                JsonValue::Object(o.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&JsonValue> for serde_json::Value {
    fn from(v: &JsonValue) -> Self {
        match v {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(*b),
            JsonValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            JsonValue::String(s) => serde_json::Value::String(s.clone()),
            JsonValue::Array(a) => serde_json::Value::Array(a.iter().map(Into::into).collect()),
            JsonValue::Object(o) => {
                serde_json::Value::Object(o.iter().map(|(k, v)| (k.clone(), v.into())).collect())
            }
        }
    }
}

/// Deterministic ordering used when a stable key must be derived from a
/// value (e.g. hashing a concrete decision's candidate values, §4.I).
/// Defined so `crc32(json(v1), json(v2), ...)` is reproducible independent
/// of in-memory representation.
impl JsonValue {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let v: serde_json::Value = self.into();
        // `preserve_order` keeps object keys stable relative to insertion,
        // which is what callers of canonical_bytes rely on: objects built
        // deterministically (e.g. from a sorted candidate list) render
        // deterministically.
        serde_json::to_vec(&v).unwrap_or_default()
    }
}

impl PartialOrd for JsonValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.canonical_bytes().cmp(&other.canonical_bytes()))
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn leaf() -> impl Strategy<Value = JsonValue> {
        prop_oneof![
            Just(JsonValue::Null),
            any::<bool>().prop_map(JsonValue::Bool),
            any::<i16>().prop_map(|n| JsonValue::Number(f64::from(n))),
            "[a-z]{0,8}".prop_map(JsonValue::String),
        ]
    }

    fn json_value() -> impl Strategy<Value = JsonValue> {
        leaf().prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(JsonValue::Array),
                prop::collection::vec(("[a-z]{1,5}", inner), 0..4).prop_map(|pairs| {
                    JsonValue::Object(pairs.into_iter().collect())
                }),
            ]
        })
    }

    fn json_object() -> impl Strategy<Value = IndexMap<String, JsonValue>> {
        prop::collection::vec(("[b-z]{1,5}", leaf()), 0..4).prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        /// Converting to `serde_json::Value` and back is a fixed point
        /// (§8 round-trip law), independent of in-memory representation.
        #[test]
        fn round_trips_through_serde_json_value(value in json_value()) {
            let as_serde: serde_json::Value = (&value).into();
            let back: JsonValue = as_serde.into();
            prop_assert_eq!(back, value);
        }

        /// `augment` with a scalar always replaces, regardless of what
        /// `self` was (§4.J's "type mismatch is a scalar short-circuit").
        #[test]
        fn augment_with_a_scalar_always_replaces(mut base in json_value(), scalar in leaf()) {
            if matches!(scalar, JsonValue::Array(_) | JsonValue::Object(_)) {
                return Ok(());
            }
            base.augment(&scalar);
            prop_assert_eq!(base, scalar);
        }

        /// `augment`-ing an object into an object never drops a key the
        /// incoming side didn't mention. `extra_key` is pinned to the `a`
        /// prefix and `incoming`'s keys to `b..z` so they never collide.
        #[test]
        fn augment_object_preserves_untouched_keys(
            extra_key in "a[a-z]{0,4}", extra_value in leaf(), incoming in json_object()
        ) {
            let mut base = IndexMap::new();
            base.insert(extra_key.clone(), extra_value.clone());
            let mut base = JsonValue::Object(base);
            base.augment(&JsonValue::Object(incoming));
            prop_assert_eq!(base.as_object().unwrap().get(&extra_key), Some(&extra_value));
        }
    }
}
