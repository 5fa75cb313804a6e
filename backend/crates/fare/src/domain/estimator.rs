//! Fare Estimator
//!
//! Pure fare formula. No I/O, no logging; the caller resolves distance,
//! duration and the rate schedule beforehand.
//!
//! ```text
//! total = base_rate
//!       + (meters * MILES_PER_METER) * distance_rate
//!       + (seconds / 60) * time_rate
//!       + peak_surcharge            (only while the peak rule holds)
//! ```
//!
//! The total is rounded to cents, half to even, on the exact binary value of
//! the `f64`. So `2.675` (stored as 2.67499999...) rounds to `2.67` and the
//! exact tie `0.125` rounds to `0.12`.
//!
//! Inputs are trusted: negative distance or duration lower the total.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::rates::RateSchedule;

/// Fixed meters-to-miles factor.
pub const MILES_PER_METER: f64 = 0.000621371;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Estimate a fare, evaluating the schedule's peak rule now.
pub fn estimate(distance_meters: f64, duration_seconds: f64, rates: &RateSchedule) -> f64 {
    estimate_with_peak(
        distance_meters,
        duration_seconds,
        rates,
        rates.is_peak_chargeable(),
    )
}

/// Estimate a fare with the peak decision already made by the caller.
pub fn estimate_with_peak(
    distance_meters: f64,
    duration_seconds: f64,
    rates: &RateSchedule,
    peak: bool,
) -> f64 {
    let distance_miles = distance_meters * MILES_PER_METER;
    let duration_minutes = duration_seconds / SECONDS_PER_MINUTE;

    let mut total = rates.base_rate
        + (distance_miles * rates.distance_rate)
        + (duration_minutes * rates.time_rate);
    if peak {
        total += rates.peak_surcharge;
    }

    round_fare(total)
}

/// Round to 2 decimal places, half to even. Non-finite input comes back unchanged.
pub fn round_fare(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
