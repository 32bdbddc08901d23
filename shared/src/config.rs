use serde::{Deserialize, Serialize};

/// Timing and display settings shared by both dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Simulated latency of an assign submission
    pub assign_delay_ms: u32,
    /// Simulated latency of a withdrawal
    pub withdraw_delay_ms: u32,
    /// Simulated latency of the student board's first load
    pub initial_load_delay_ms: u32,
    /// Simulated latency of a manual refresh
    pub refresh_delay_ms: u32,
    /// How often the student clock advances `now`
    pub clock_tick_ms: u32,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// How long the wallet menu shows "Copied"
    pub copied_feedback_ms: u32,
    /// Length of the rolling progress window
    pub progress_window_days: i64,
    /// Minimum visible bar width in percent
    pub progress_floor_percent: f64,
    /// Currency suffix on the parent dashboard
    pub parent_currency: String,
    /// Currency suffix on the student dashboard
    pub student_currency: String,
    /// Balance shown on the parent dashboard
    pub parent_balance: f64,
    /// `{address}` is replaced with the connected address
    pub explorer_url_template: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assign_delay_ms: 800,
            withdraw_delay_ms: 900,
            initial_load_delay_ms: 350,
            refresh_delay_ms: 300,
            clock_tick_ms: 30_000,
            toast_duration_ms: 3000,
            copied_feedback_ms: 1600,
            progress_window_days: 30,
            progress_floor_percent: 6.0,
            parent_currency: "STX".to_string(),
            student_currency: "EDU".to_string(),
            parent_balance: 420.0,
            explorer_url_template: "https://explorer.stacks.co/address/{address}?chain=testnet".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn explorer_url(&self, address: &str) -> String {
        self.explorer_url_template.replace("{address}", address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let config = DashboardConfig::default();
        assert_eq!(config.assign_delay_ms, 800);
        assert_eq!(config.withdraw_delay_ms, 900);
        assert_eq!(config.clock_tick_ms, 30_000);
        assert_eq!(config.progress_window_days, 30);
        assert_eq!(config.progress_floor_percent, 6.0);
    }

    #[test]
    fn test_explorer_url() {
        let config = DashboardConfig::default();
        assert_eq!(
            config.explorer_url("ST1ABC"),
            "https://explorer.stacks.co/address/ST1ABC?chain=testnet"
        );
    }

    #[test]
    fn test_partial_override_from_json() {
        let mut value = serde_json::to_value(DashboardConfig::default()).unwrap();
        value["withdraw_delay_ms"] = serde_json::json!(10);
        let config: DashboardConfig = serde_json::from_value(value).unwrap();
        assert_eq!(config.withdraw_delay_ms, 10);
        assert_eq!(config.assign_delay_ms, 800);
    }
}
