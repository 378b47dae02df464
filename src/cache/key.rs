//! Cache Key Module
//!
//! Deterministic key derivation from a call's identity and arguments.
//!
//! Keys have the layout `"prefix":"operation":[p1,p2]:{k1=v1,k2=v2}`, with
//! prefix and operation quoted like any other string so a `:` inside them
//! cannot shift the field boundaries. Positional arguments keep call order;
//! keyword arguments are sorted by name. Values are written in a canonical
//! compact JSON form with object keys sorted, so two calls with the same
//! inputs always produce the same key.

use std::any::type_name;
use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;
use serde_json::Value;

// == Argument Value ==
/// A single call argument as it participates in the key.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Argument with a stable JSON form
    Json(Value),
    /// Argument that could not be serialized, tagged with its type name
    Opaque(&'static str),
}

impl ArgValue {
    /// Converts any serializable value, falling back to [`ArgValue::Opaque`].
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => ArgValue::Json(json),
            Err(_) => ArgValue::Opaque(type_name::<T>()),
        }
    }

    /// The JSON form, if the argument had one.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ArgValue::Json(value) => Some(value),
            ArgValue::Opaque(_) => None,
        }
    }

    fn encode_into(&self, out: &mut String) {
        match self {
            ArgValue::Json(value) => encode_into(value, out),
            ArgValue::Opaque(type_tag) => {
                let _ = write!(out, "<opaque:{}>", type_tag);
            }
        }
    }
}

// == Call Arguments ==
/// Positional and keyword arguments of one producer call.
///
/// ```
/// use resource_cache::CallArgs;
///
/// let args = CallArgs::new().arg("us-east-1").kwarg("max_results", &50);
/// assert_eq!(args.positional(0).and_then(|v| v.as_str()), Some("us-east-1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<ArgValue>,
    keyword: BTreeMap<String, ArgValue>,
}

impl CallArgs {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.positional.push(ArgValue::from_serialize(value));
        self
    }

    /// Sets a keyword argument, replacing any earlier value for `name`.
    pub fn kwarg<T: Serialize + ?Sized>(mut self, name: impl Into<String>, value: &T) -> Self {
        self.keyword
            .insert(name.into(), ArgValue::from_serialize(value));
        self
    }

    /// JSON form of the positional argument at `index`.
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index).and_then(ArgValue::as_json)
    }

    /// JSON form of the keyword argument `name`.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name).and_then(ArgValue::as_json)
    }

    /// All positional arguments in call order.
    pub fn positional_args(&self) -> &[ArgValue] {
        &self.positional
    }

    /// All keyword arguments sorted by name.
    pub fn keyword_args(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.keyword.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns true if there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

// == Build Key ==
/// Derives the cache key for a call. Pure; never fails.
pub fn build_key(prefix: &str, operation: &str, args: &CallArgs) -> String {
    let mut key = String::with_capacity(prefix.len() + operation.len() + 16);
    encode_string(prefix, &mut key);
    key.push(':');
    encode_string(operation, &mut key);

    key.push_str(":[");
    for (i, arg) in args.positional.iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        arg.encode_into(&mut key);
    }

    key.push_str("]:{");
    for (i, (name, arg)) in args.keyword.iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        encode_string(name, &mut key);
        key.push('=');
        arg.encode_into(&mut key);
    }
    key.push('}');

    key
}

// == Encode Value ==
/// Canonical compact encoding of a JSON value with object keys sorted.
pub fn encode_value(value: &Value) -> String {
    let mut out = String::new();
    encode_into(value, &mut out);
    out
}

fn encode_into(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(s) => encode_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_into(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut fields: Vec<_> = map.iter().collect();
            fields.sort_unstable_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (name, item)) in fields.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_string(name, out);
                out.push(':');
                encode_into(item, out);
            }
            out.push('}');
        }
    }
}

// JSON string quoting; Display on a string Value cannot fail.
fn encode_string(s: &str, out: &mut String) {
    let _ = write!(out, "{}", Value::String(s.to_owned()));
}
