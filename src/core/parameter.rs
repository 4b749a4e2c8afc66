//! Request parameter handling
//!
//! Inputs arrive from the host as a JSON object in which optional fields may be
//! absent. Before a request body is serialized, absent fields are dropped so they
//! are never sent as explicit `null`s.

use serde_json::{Map, Value};

/// Invocation inputs as supplied by the host
pub type Inputs = Map<String, Value>;

/// Keep only the entries whose value is defined.
///
/// `None` marks a value the caller left unset; it is dropped. Every other entry,
/// including an explicit JSON `null`, is kept unchanged. Output order follows the
/// input iteration order. Applying the filter to its own output is a no-op.
///
/// # Examples
/// ```
/// use launchdarkly_blocks::core::parameter::filter_defined_params;
/// use serde_json::json;
///
/// let filtered = filter_defined_params([
///     ("a", Some(json!(1))),
///     ("b", None),
///     ("c", Some(json!("x"))),
/// ]);
/// assert_eq!(serde_json::Value::Object(filtered), json!({"a": 1, "c": "x"}));
/// ```
pub fn filter_defined_params<I, K>(params: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, Option<Value>)>,
    K: Into<String>,
{
    params
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name.into(), value)))
        .collect()
}

/// Pick the named fields out of the host inputs, marking absent ones as undefined
pub fn select_params<'a, I>(inputs: &Inputs, names: I) -> Vec<(String, Option<Value>)>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| (name.to_string(), inputs.get(name).cloned()))
        .collect()
}

/// Render a scalar input as the string used in a URL
///
/// Strings are used verbatim; numbers and booleans use their JSON text. Returns
/// `None` for `null`, arrays and objects.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
