//! Small helpers for crossing the JS boundary.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human-readable message for a thrown JS value.
pub(crate) fn error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{value:?}")
}

/// Build a plain JS object from key/value pairs.
pub(crate) fn object(entries: &[(&str, &JsValue)]) -> Result<Object, JsValue> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj)
}

/// Call `target[name](...args)` if it is a function.
///
/// Returns `Ok(None)` when the property is missing or not callable, which is
/// the case for custom elements that have not been upgraded yet.
pub(crate) fn call_method(target: &JsValue, name: &str, args: &js_sys::Array) -> Result<Option<JsValue>, JsValue> {
    let property = Reflect::get(target, &JsValue::from_str(name))?;
    let Some(method) = property.dyn_ref::<Function>() else {
        return Ok(None);
    };
    method.apply(target, args).map(Some)
}
