//! Routing adapters

use crate::domain::geometry::{Coordinate, distance};
use crate::domain::repository::{RouteInfo, RouteInfoProvider};
use crate::error::{FareError, FareResult};

/// Straight-line routing for planar coordinates in meters
///
/// Distance is the Euclidean distance; duration assumes a constant average
/// speed. Used where no directions service is available.
#[derive(Debug, Clone, Copy)]
pub struct StraightLineRouter {
    average_speed_mps: f64,
}

impl StraightLineRouter {
    pub fn new(average_speed_mps: f64) -> FareResult<Self> {
        if !(average_speed_mps.is_finite() && average_speed_mps > 0.0) {
            return Err(FareError::InvalidConfig(format!(
                "average speed must be positive, got {}",
                average_speed_mps
            )));
        }
        Ok(Self { average_speed_mps })
    }

    pub fn average_speed_mps(&self) -> f64 {
        self.average_speed_mps
    }
}

impl RouteInfoProvider for StraightLineRouter {
    async fn route_info(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> FareResult<RouteInfo> {
        let distance_meters = distance(origin, destination);
        Ok(RouteInfo::new(
            distance_meters,
            distance_meters / self.average_speed_mps,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_straight_line_route() {
        let router = StraightLineRouter::new(10.0).unwrap();
        let route = router
            .route_info(Coordinate::new(0.0, 0.0), Coordinate::new(3000.0, 4000.0))
            .await
            .unwrap();
        assert_eq!(route.distance_meters, 5000.0);
        assert_eq!(route.duration_seconds, 500.0);
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        assert!(matches!(
            StraightLineRouter::new(0.0),
            Err(FareError::InvalidConfig(_))
        ));
        assert!(StraightLineRouter::new(-5.0).is_err());
        assert!(StraightLineRouter::new(f64::NAN).is_err());
    }
}
