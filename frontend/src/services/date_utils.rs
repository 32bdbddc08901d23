use chrono::{DateTime, Local, Utc};

/// Current wall-clock time
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a time as a `datetime-local` input value (`YYYY-MM-DDTHH:MM`)
pub fn datetime_local_value(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string()
}

/// Wait for the given number of milliseconds without blocking the event loop
pub async fn delay(ms: u32) {
    gloo::timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::validation::parse_unlock_input;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_datetime_local_value_parses_back() {
        let value = datetime_local_value(now());
        assert_eq!(value.len(), 16);
        assert!(parse_unlock_input(&value).is_some());
    }
}
