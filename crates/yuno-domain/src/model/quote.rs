//! Rental quote values

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A calendar date with an optional time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalPoint {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl RentalPoint {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>) -> Self {
        Self { date, time }
    }

    /// Combine into one instant, filling a missing time with `fallback`
    pub fn at(&self, fallback: NaiveTime) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(fallback))
    }

    /// `YYYY-MM-DD`, the date-input wire format
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `HH:MM`, or empty when no time was given
    pub fn time_string(&self) -> String {
        self.time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Derived quote for a pickup/return pair and a vehicle's rates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub pickup: RentalPoint,
    pub return_at: RentalPoint,
    /// Inclusive day count, at least 1
    pub duration_days: u32,
    pub daily_rate: u64,
    pub weekly_rate: u64,
    pub estimated_total: u64,
}

impl Quote {
    /// Whether the weekly tier was applied to this total
    pub fn uses_weekly_tier(&self) -> bool {
        self.duration_days >= 7 && self.weekly_rate > 0
    }
}
