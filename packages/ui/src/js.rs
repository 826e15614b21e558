use serde::Serialize;

/// Render `value` as a JavaScript literal for splicing into `document::eval` code.
pub(crate) fn js_literal<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
