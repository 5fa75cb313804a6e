//! Rate Schedule
//!
//! The four configured pricing parameters plus the rule deciding whether
//! the peak surcharge applies.

use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};

/// Configured pricing parameters
///
/// Read-only for the duration of one estimate. Loaded from JSON:
///
/// ```rust
/// use fare::domain::rates::{PeakRule, RateSchedule};
///
/// let rates: RateSchedule = serde_json::from_str(
///     r#"{"base_rate": 2.5, "distance_rate": 1.25, "time_rate": 0.2, "peak_surcharge": 3.0}"#,
/// ).unwrap();
/// assert_eq!(rates.peak, PeakRule::Never);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Flat amount charged on every trip
    pub base_rate: f64,
    /// Amount per mile
    pub distance_rate: f64,
    /// Amount per minute
    pub time_rate: f64,
    /// Flat amount added while the peak rule holds
    pub peak_surcharge: f64,
    #[serde(default)]
    pub peak: PeakRule,
}

impl RateSchedule {
    /// Schedule with the peak rule set to [`PeakRule::Never`].
    pub fn new(base_rate: f64, distance_rate: f64, time_rate: f64, peak_surcharge: f64) -> Self {
        Self {
            base_rate,
            distance_rate,
            time_rate,
            peak_surcharge,
            peak: PeakRule::Never,
        }
    }

    pub fn with_peak(mut self, peak: PeakRule) -> Self {
        self.peak = peak;
        self
    }

    /// Evaluate the peak rule against the local wall clock, now.
    pub fn is_peak_chargeable(&self) -> bool {
        self.is_peak_chargeable_at(Local::now().time())
    }

    pub fn is_peak_chargeable_at(&self, time: NaiveTime) -> bool {
        self.peak.is_active_at(time)
    }
}

/// When the peak surcharge applies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "windows", rename_all = "snake_case")]
pub enum PeakRule {
    #[default]
    Never,
    Always,
    /// Any of the listed local time windows
    Windows(Vec<PeakWindow>),
}

impl PeakRule {
    pub fn is_active_at(&self, time: NaiveTime) -> bool {
        match self {
            PeakRule::Never => false,
            PeakRule::Always => true,
            PeakRule::Windows(windows) => windows.iter().any(|w| w.contains(time)),
        }
    }
}

/// Half-open local time interval `[start, end)`
///
/// `start > end` wraps past midnight (22:00 to 02:00). `start == end` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PeakWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            self.start <= time && time < self.end
        } else {
            time >= self.start || time < self.end
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let rush = PeakWindow::new(t(7, 0), t(9, 30));
        assert!(!rush.contains(t(6, 59)));
        assert!(rush.contains(t(7, 0)));
        assert!(rush.contains(t(9, 29)));
        assert!(!rush.contains(t(9, 30)));
    }

    #[test]
    fn test_window_wraps_midnight() {
        let night = PeakWindow::new(t(22, 0), t(2, 0));
        assert!(night.contains(t(23, 15)));
        assert!(night.contains(t(0, 0)));
        assert!(night.contains(t(1, 59)));
        assert!(!night.contains(t(2, 0)));
        assert!(!night.contains(t(12, 0)));
    }

    #[test]
    fn test_empty_window() {
        let empty = PeakWindow::new(t(8, 0), t(8, 0));
        assert!(!empty.contains(t(8, 0)));
        assert!(!empty.contains(t(20, 0)));
    }

    #[test]
    fn test_rule_variants() {
        assert!(!PeakRule::Never.is_active_at(t(8, 0)));
        assert!(PeakRule::Always.is_active_at(t(3, 0)));

        let rule = PeakRule::Windows(vec![
            PeakWindow::new(t(7, 0), t(9, 0)),
            PeakWindow::new(t(17, 0), t(19, 0)),
        ]);
        assert!(rule.is_active_at(t(8, 0)));
        assert!(rule.is_active_at(t(18, 30)));
        assert!(!rule.is_active_at(t(12, 0)));
        assert!(!PeakRule::Windows(Vec::new()).is_active_at(t(8, 0)));
    }

    #[test]
    fn test_schedule_uses_rule() {
        let rates = RateSchedule::new(2.5, 1.25, 0.2, 3.0);
        assert!(!rates.is_peak_chargeable());
        assert!(rates.clone().with_peak(PeakRule::Always).is_peak_chargeable());
    }

    #[test]
    fn test_schedule_json_with_windows() {
        let json = r#"{
            "base_rate": 2.5,
            "distance_rate": 1.25,
            "time_rate": 0.2,
            "peak_surcharge": 3.0,
            "peak": {"mode": "windows", "windows": [{"start": "17:00:00", "end": "19:00:00"}]}
        }"#;
        let rates: RateSchedule = serde_json::from_str(json).unwrap();
        assert!(rates.is_peak_chargeable_at(t(18, 0)));
        assert!(!rates.is_peak_chargeable_at(t(20, 0)));
    }

    #[test]
    fn test_schedule_json_always() {
        let json = r#"{"base_rate": 1, "distance_rate": 1, "time_rate": 1,
                       "peak_surcharge": 1, "peak": {"mode": "always"}}"#;
        let rates: RateSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(rates.peak, PeakRule::Always);
    }

    #[test]
    fn test_schedule_json_missing_field() {
        let json = r#"{"base_rate": 2.5, "distance_rate": 1.25, "time_rate": 0.2}"#;
        assert!(serde_json::from_str::<RateSchedule>(json).is_err());
    }
}
