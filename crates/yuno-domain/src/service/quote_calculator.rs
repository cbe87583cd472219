//! Rental quote calculation
//!
//! Duration counts calendar days inclusively: same-day pickup and return is
//! one day, next-day return is two. Time of day only matters for display and
//! for deriving an automatic return 24 hours after pickup.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;
use yuno_types::QuoteError;

use crate::model::{Quote, RentalPoint};

/// Pickup time assumed when the form leaves it blank
pub const DEFAULT_PICKUP_TIME: &str = "10:00";

/// Automatic return offset from the pickup instant
pub const AUTO_RETURN_MILLIS: i64 = 24 * 60 * 60 * 1000;

pub const DAYS_PER_WEEK: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteConfig {
    pub default_pickup_time: NaiveTime,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            default_pickup_time: parse_time(DEFAULT_PICKUP_TIME)
                .ok()
                .flatten()
                .unwrap_or(NaiveTime::MIN),
        }
    }
}

impl QuoteConfig {
    pub fn with_default_time(raw: &str) -> Result<Self, QuoteError> {
        let default_pickup_time =
            parse_time(raw)?.ok_or_else(|| QuoteError::InvalidTime(raw.to_string()))?;
        Ok(Self {
            default_pickup_time,
        })
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, QuoteError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| QuoteError::InvalidDate(raw.to_string()))
}

/// Parse `HH:MM` (seconds allowed). Blank input is `Ok(None)`.
pub fn parse_time(raw: &str) -> Result<Option<NaiveTime>, QuoteError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| QuoteError::InvalidTime(raw.to_string()))
}

/// Inclusive day count between two calendar dates
pub fn rental_days(pickup: NaiveDate, return_date: NaiveDate) -> Result<u32, QuoteError> {
    if return_date < pickup {
        return Err(QuoteError::ReturnBeforePickup);
    }
    let days = return_date.signed_duration_since(pickup).num_days() + 1;
    Ok(u32::try_from(days).unwrap_or(u32::MAX))
}

/// Tiered total: full weeks at the weekly rate, leftover days at the daily rate
pub fn estimate_total(days: u32, daily_rate: u64, weekly_rate: u64) -> u64 {
    if days >= DAYS_PER_WEEK && weekly_rate > 0 {
        let weeks = u64::from(days / DAYS_PER_WEEK);
        let remainder = u64::from(days % DAYS_PER_WEEK);
        weeks
            .saturating_mul(weekly_rate)
            .saturating_add(remainder.saturating_mul(daily_rate))
    } else {
        u64::from(days).saturating_mul(daily_rate)
    }
}

fn lenient_time(raw: &str) -> Option<NaiveTime> {
    match parse_time(raw) {
        Ok(time) => time,
        Err(_) => {
            debug!(time = raw, "ignoring unparsable time of day");
            None
        }
    }
}

/// Quote a rental from form values.
///
/// Only the dates are validated; unparsable times are dropped since they do
/// not affect the duration.
pub fn compute_quote(
    pickup_date: &str,
    pickup_time: &str,
    return_date: &str,
    return_time: &str,
    daily_rate: u64,
    weekly_rate: u64,
) -> Result<Quote, QuoteError> {
    let pickup = RentalPoint::new(parse_date(pickup_date)?, lenient_time(pickup_time));
    let return_at = RentalPoint::new(parse_date(return_date)?, lenient_time(return_time));
    let duration_days = rental_days(pickup.date, return_at.date)?;
    let estimated_total = estimate_total(duration_days, daily_rate, weekly_rate);

    debug!(duration_days, estimated_total, "quote computed");
    Ok(Quote {
        pickup,
        return_at,
        duration_days,
        daily_rate,
        weekly_rate,
        estimated_total,
    })
}

/// Return point exactly 24 hours after pickup, in the given time zone.
///
/// The offset is added to the pickup instant, not the calendar date, so a
/// DST shift moves the return time of day accordingly.
pub fn auto_return_in<Tz: TimeZone>(
    tz: &Tz,
    config: &QuoteConfig,
    pickup_date: &str,
    pickup_time: &str,
) -> Result<RentalPoint, QuoteError> {
    let date = parse_date(pickup_date)?;
    let time = parse_time(pickup_time)?.unwrap_or(config.default_pickup_time);
    let local = date.and_time(time);

    let start = resolve_local(tz, local)
        .ok_or_else(|| QuoteError::InvalidTime(pickup_time.to_string()))?;
    let end = (start + Duration::milliseconds(AUTO_RETURN_MILLIS)).naive_local();

    Ok(RentalPoint::new(end.date(), Some(end.time())))
}

/// Local wall-clock times skipped by a DST jump resolve an hour later
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<chrono::DateTime<Tz>> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(local + Duration::hours(1))).earliest())
}

/// Automatic return in the machine's local time zone
pub fn auto_return(
    config: &QuoteConfig,
    pickup_date: &str,
    pickup_time: &str,
) -> Result<RentalPoint, QuoteError> {
    auto_return_in(&Local, config, pickup_date, pickup_time)
}

/// Quote with the return derived from pickup + 24h
pub fn compute_auto_quote<Tz: TimeZone>(
    tz: &Tz,
    config: &QuoteConfig,
    pickup_date: &str,
    pickup_time: &str,
    daily_rate: u64,
    weekly_rate: u64,
) -> Result<Quote, QuoteError> {
    let return_at = auto_return_in(tz, config, pickup_date, pickup_time)?;
    compute_quote(
        pickup_date,
        pickup_time,
        &return_at.date_string(),
        &return_at.time_string(),
        daily_rate,
        weekly_rate,
    )
}
