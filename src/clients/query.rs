//! Form-style query string encoding.
//!
//! Nested values are flattened the conventional way
//! (`a[0]=x&a[1]=y`, `o[k]=v`), booleans become `1`/`0` and `null`
//! entries are dropped, matching what the Zoho API expects from
//! form-encoding clients.

use serde_json::{Map, Value};

/// Encodes a JSON object as a query string, without the leading `?`.
///
/// Returns an empty string when nothing is left to encode.
///
/// # Example
///
/// ```rust
/// use zoho_crm::clients::build_query;
/// use serde_json::json;
///
/// let query = json!({"fields": "Email,Last_Name", "ids": [1, 2], "approved": true});
/// assert_eq!(
///     build_query(query.as_object().unwrap()),
///     "fields=Email%2CLast_Name&ids%5B0%5D=1&ids%5B1%5D=2&approved=1"
/// );
/// ```
#[must_use]
pub fn build_query(params: &Map<String, Value>) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key, value, &mut pairs);
    }

    pairs
        .iter()
        .map(|(key, value)| {
            // RFC 3986 encoding: a space is `%20`, never `+`
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn flatten(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((prefix.to_string(), if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((prefix.to_string(), n.to_string())),
        Value::String(s) => pairs.push((prefix.to_string(), s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(&format!("{prefix}[{key}]"), item, pairs);
            }
        }
    }
}
