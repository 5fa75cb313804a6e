//! Collaborator Traits
//!
//! Interfaces for routing and rate configuration. Implementations are in the
//! infrastructure layer.

use serde::{Deserialize, Serialize};

use crate::domain::geometry::Coordinate;
use crate::domain::rates::RateSchedule;
use crate::error::FareResult;

/// Travel distance and time between two points, as reported by routing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl RouteInfo {
    pub fn new(distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            distance_meters,
            duration_seconds,
        }
    }
}

/// Routing lookup
#[trait_variant::make(RouteInfoProvider: Send)]
pub trait LocalRouteInfoProvider {
    /// Distance and duration of the route from `origin` to `destination`
    async fn route_info(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> FareResult<RouteInfo>;
}

/// Rate configuration lookup
#[trait_variant::make(RateScheduleSource: Send)]
pub trait LocalRateScheduleSource {
    /// Current schedule, read fresh on every call
    async fn get_rates(&self) -> FareResult<RateSchedule>;
}
