//! Rate schedule sources

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::rates::RateSchedule;
use crate::domain::repository::RateScheduleSource;
use crate::error::{FareError, FareResult};

/// Fixed schedule held in memory
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    rates: Arc<RateSchedule>,
}

impl StaticRateSource {
    pub fn new(rates: RateSchedule) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}

impl RateScheduleSource for StaticRateSource {
    async fn get_rates(&self) -> FareResult<RateSchedule> {
        Ok(self.rates.as_ref().clone())
    }
}

/// JSON schedule on disk, re-read on every lookup so edits apply to the
/// next estimate without a restart.
#[derive(Debug, Clone)]
pub struct JsonFileRateSource {
    path: PathBuf,
}

impl JsonFileRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateScheduleSource for JsonFileRateSource {
    async fn get_rates(&self) -> FareResult<RateSchedule> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            FareError::RateSource(format!("{}: {}", self.path.display(), e))
        })?;

        let rates: RateSchedule = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), "Loaded rate schedule");
        Ok(rates)
    }
}
