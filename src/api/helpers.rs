//! Shared helpers for WASM API operations
//!
//! Serialization across the boundary, id parsing and error conversion. The
//! inner API functions report errors as `String`; these helpers log them and
//! turn them into `JsValue`s at the edge.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| to_js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| to_js_error(format!("{}: {}", error_context, e)))
}

/// Deserialize an optional value, falling back to its default for `undefined`/`null`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Parse an id handed over from JavaScript
pub fn parse_id(id: &str, context: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|e| format!("Invalid {} id '{}': {}", context, id, e))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error message and wrap it for JavaScript
pub fn to_js_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Lift an inner API result to the JavaScript boundary
pub fn into_js<T: Serialize>(result: Result<T, String>, error_context: &str) -> Result<JsValue, JsValue> {
    let value = result.map_err(to_js_error)?;
    serialize(&value, error_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "symbol"), Ok(id));

        let err = parse_id("not-an-id", "symbol").unwrap_err();
        assert!(err.starts_with("Invalid symbol id 'not-an-id'"));
    }
}
