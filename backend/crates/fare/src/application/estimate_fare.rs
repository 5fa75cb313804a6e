//! Estimate Fare Use Case

use std::sync::Arc;

use serde::Serialize;

use crate::domain::estimator::estimate_with_peak;
use crate::domain::geometry::Coordinate;
use crate::domain::repository::{RateScheduleSource, RouteInfo, RouteInfoProvider};
use crate::error::FareResult;

/// Input DTO for estimate fare
#[derive(Debug, Clone, Copy)]
pub struct EstimateFareInput {
    pub origin: Coordinate,
    pub destination: Coordinate,
}

/// Output DTO for estimate fare
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateFareOutput {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Rounded to cents
    pub fare: f64,
    pub peak_applied: bool,
}

/// Estimate Fare Use Case
///
/// One routing lookup and one rate lookup per estimate. Errors from either
/// are returned as they are.
pub struct EstimateFareUseCase<R, S>
where
    R: RouteInfoProvider,
    S: RateScheduleSource,
{
    router: Arc<R>,
    rate_source: Arc<S>,
}

impl<R, S> EstimateFareUseCase<R, S>
where
    R: RouteInfoProvider,
    S: RateScheduleSource,
{
    pub fn new(router: Arc<R>, rate_source: Arc<S>) -> Self {
        Self {
            router,
            rate_source,
        }
    }

    pub async fn execute(&self, input: EstimateFareInput) -> FareResult<EstimateFareOutput> {
        let route = self
            .router
            .route_info(input.origin, input.destination)
            .await?;
        self.quote(route).await
    }

    /// Estimate for an already-resolved route
    pub async fn quote(&self, route: RouteInfo) -> FareResult<EstimateFareOutput> {
        let rates = self.rate_source.get_rates().await?;
        let peak_applied = rates.is_peak_chargeable();
        let fare = estimate_with_peak(
            route.distance_meters,
            route.duration_seconds,
            &rates,
            peak_applied,
        );

        tracing::info!(
            distance_meters = route.distance_meters,
            duration_seconds = route.duration_seconds,
            fare,
            peak_applied,
            "Estimated fare"
        );

        Ok(EstimateFareOutput {
            distance_meters: route.distance_meters,
            duration_seconds: route.duration_seconds,
            fare,
            peak_applied,
        })
    }
}
