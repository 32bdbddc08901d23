use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::services::js::describe_js_error;

/// Write text to the system clipboard via `navigator.clipboard.writeText`
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let navigator = Reflect::get(&JsValue::from(window), &JsValue::from_str("navigator"))
        .map_err(describe_js_error)?;
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(describe_js_error)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("Clipboard API unavailable".to_string());
    }

    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(describe_js_error)?
        .dyn_into()
        .map_err(describe_js_error)?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(describe_js_error)?
        .dyn_into()
        .map_err(describe_js_error)?;

    JsFuture::from(promise).await.map_err(describe_js_error)?;
    Ok(())
}
