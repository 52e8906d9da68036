//! Pagination helpers over response bodies.
//!
//! The client never follows pages on its own. These read the
//! `pagination.more` and `pagination.next` fields so callers can.

use serde_json::Value;

/// Returns `pagination.more`, or `false` when absent or not a boolean.
///
/// # Example
///
/// ```rust
/// use zoho_crm::clients::has_more;
/// use serde_json::json;
///
/// assert!(has_more(&json!({"pagination": {"more": true}})));
/// assert!(!has_more(&json!({})));
/// ```
#[must_use]
pub fn has_more(response: &Value) -> bool {
    response
        .pointer("/pagination/more")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Returns `pagination.next`, or `1` when absent or `null`.
///
/// The value is returned as-is: a page number or an opaque page token.
///
/// # Example
///
/// ```rust
/// use zoho_crm::clients::next_page;
/// use serde_json::json;
///
/// assert_eq!(next_page(&json!({"pagination": {"next": 3}})), json!(3));
/// assert_eq!(next_page(&json!({})), json!(1));
/// ```
#[must_use]
pub fn next_page(response: &Value) -> Value {
    response
        .pointer("/pagination/next")
        .filter(|next| !next.is_null())
        .cloned()
        .unwrap_or_else(|| Value::from(1))
}
