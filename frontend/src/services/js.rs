use wasm_bindgen::{JsCast, JsValue};

/// Best-effort readable text for a thrown JS value
pub fn describe_js_error(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    js_sys::JSON::stringify(&value)
        .ok()
        .map(String::from)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_describe_string_and_error() {
        assert_eq!(describe_js_error(JsValue::from_str("boom")), "boom");
        let error = js_sys::Error::new("bad thing");
        assert_eq!(describe_js_error(error.into()), "bad thing");
    }
}
