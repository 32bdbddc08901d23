//! Display formatting for amounts, times and wallet addresses.

use chrono::{DateTime, Local, Utc};

/// Format an amount with thousands separators, at most two fraction digits
/// and a currency suffix, e.g. `1,234.5 STX`
pub fn format_amount(value: f64, currency: &str) -> String {
    format!("{} {}", format_number(value), currency)
}

/// en-US style number with grouping and up to two fraction digits
pub fn format_number(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}{}", sign, grouped)
    } else if fraction % 10 == 0 {
        format!("{}{}.{}", sign, grouped, fraction / 10)
    } else {
        format!("{}{}.{:02}", sign, grouped, fraction)
    }
}

/// Human-relative distance between `target` and `now` with a suffix,
/// e.g. `in 3 days` or `about 2 hours ago`
pub fn format_relative(target: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (target - now).num_seconds();
    let distance = format_distance(seconds.unsigned_abs());
    if seconds > 0 {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn format_distance(seconds: u64) -> String {
    const MINUTES_IN_DAY: u64 = 1440;
    const MINUTES_IN_MONTH: u64 = 43_200;

    let minutes = (seconds as f64 / 60.0).round() as u64;

    if minutes == 0 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / 60.0).round() as u64;
        format!("about {}", plural(hours, "hour"))
    } else if minutes < 2520 {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as u64;
        plural(days, "day")
    } else if minutes < MINUTES_IN_MONTH * 2 {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as u64;
        format!("about {}", plural(months, "month"))
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            let nearest = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as u64;
            plural(nearest, "month")
        } else {
            let remainder = months % 12;
            let years = months / 12;
            if remainder < 3 {
                format!("about {}", plural(years, "year"))
            } else if remainder < 9 {
                format!("over {}", plural(years, "year"))
            } else {
                format!("almost {}", plural(years + 1, "year"))
            }
        }
    }
}

/// Absolute local date-time, e.g. `Oct 20, 2026, 2:30 PM`
pub fn format_date_time(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Shorten an address to its first 6 and last 4 characters
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

/// Deterministic two-hue gradient derived from the address characters
pub fn address_gradient(address: Option<&str>) -> String {
    match address {
        Some(address) if !address.is_empty() => {
            let sum: u32 = address.encode_utf16().map(u32::from).sum();
            let h1 = sum % 360;
            let h2 = (h1 + 60) % 360;
            format!(
                "linear-gradient(135deg,hsl({} 85% 45%), hsl({} 85% 40%))",
                h1, h2
            )
        }
        _ => "linear-gradient(135deg,#94f9c1,#60a5fa)".to_string(),
    }
}

/// Two characters after the address prefix, upper-cased
pub fn avatar_initials(address: &str) -> String {
    address.chars().skip(2).take(2).collect::<String>().to_uppercase()
}
