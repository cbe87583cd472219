//! Display formatting for dates, times, money and the rental summary

use yuno_domain::model::{Quote, RentalPoint};
use yuno_domain::service::quote_calculator::{parse_date, parse_time};

/// `"14:05"` → `"2:05 PM"`; blank or unparsable input gives `""`
pub fn format_time_12h(raw: &str) -> String {
    match parse_time(raw) {
        Ok(Some(time)) => time.format("%-I:%M %p").to_string(),
        _ => String::new(),
    }
}

/// `"2024-03-01"` → `"01 Mar 2024"`; unparsable input is returned as is
pub fn format_date_human(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_date(raw) {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Whole rupees with Indian digit grouping: `123456` → `"₹1,23,456"`
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

/// `"1 day"`, `"3 days"`
pub fn plural_days(days: u32) -> String {
    format!("{} day{}", days, if days > 1 { "s" } else { "" })
}

/// Date with the time appended when one was given
pub fn describe_point(point: &RentalPoint) -> String {
    let date = format_date_human(&point.date_string());
    match point.time {
        Some(_) => format!("{} at {}", date, format_time_12h(&point.time_string())),
        None => date,
    }
}

/// On-page summary line shown under the date pickers
pub fn rental_summary(quote: &Quote) -> String {
    format!(
        "Rental: {} ({} → {}) • Late return may incur extra charges.",
        plural_days(quote.duration_days),
        describe_point(&quote.pickup),
        describe_point(&quote.return_at)
    )
}
