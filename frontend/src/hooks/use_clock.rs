use chrono::{DateTime, Utc};
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::date_utils::now;
use crate::services::logging::Logger;

/// Configuration for the dashboard clock
#[derive(Clone, PartialEq)]
pub struct ClockConfig {
    pub tick_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_ms: 30_000, // 30 seconds
        }
    }
}

/// Hook returning a `now` that advances on every tick.
///
/// Eligibility and relative labels are computed against this value, so they
/// refresh without user interaction. The interval is dropped on unmount.
#[hook]
pub fn use_clock(config: ClockConfig) -> DateTime<Utc> {
    let current = use_state(now);

    {
        let current = current.clone();
        use_effect_with(config, move |config| {
            Logger::debug_with_component("clock-hook", &format!("Ticking every {} ms", config.tick_ms));
            let interval = Interval::new(config.tick_ms, move || current.set(now()));
            move || drop(interval)
        });
    }

    *current
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = ClockConfig::default();
        assert_eq!(config.tick_ms, 30_000);
    }
}
