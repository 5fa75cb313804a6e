//! Straight-line distance
//!
//! Euclidean distance between two planar points, used to rank drivers
//! around a pickup. Not on the fare path.

use std::cmp::Ordering;

use kernel::id::DriverId;
use serde::{Deserialize, Serialize};

/// A point in the plane (latitude/longitude or projected coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A driver tagged with their distance to a request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceResult {
    pub driver: DriverId,
    pub distance: f64,
}

/// `sqrt((x2 - x1)^2 + (y2 - y1)^2)`
pub fn distance(p1: Coordinate, p2: Coordinate) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn rank_by_distance(
    driver: DriverId,
    driver_coords: Coordinate,
    request_coords: Coordinate,
) -> DistanceResult {
    DistanceResult {
        driver,
        distance: distance(driver_coords, request_coords),
    }
}

/// Rank every candidate against the request, closest first.
///
/// The sort is stable: equal distances keep their input order. NaN
/// distances (from non-finite coordinates) go last.
pub fn nearest_drivers<I>(candidates: I, request_coords: Coordinate) -> Vec<DistanceResult>
where
    I: IntoIterator<Item = (DriverId, Coordinate)>,
{
    let mut ranked: Vec<DistanceResult> = candidates
        .into_iter()
        .map(|(driver, coords)| rank_by_distance(driver, coords, request_coords))
        .collect();

    ranked.sort_by(|a, b| match (a.distance.is_nan(), b.distance.is_nan()) {
        (false, false) => a.distance.total_cmp(&b.distance),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        let d = distance(Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_from_tuple() {
        let d = distance((1.0, 1.0).into(), (4.0, 5.0).into());
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_nan_propagates() {
        let d = distance(Coordinate::new(f64::NAN, 0.0), Coordinate::new(1.0, 1.0));
        assert!(d.is_nan());
    }

    #[test]
    fn test_rank_by_distance_tags_driver() {
        let driver = DriverId::new();
        let result = rank_by_distance(driver, (6.0, 8.0).into(), (0.0, 0.0).into());
        assert_eq!(result.driver, driver);
        assert_eq!(result.distance, 10.0);
    }

    #[test]
    fn test_nearest_drivers_ordering() {
        let far = DriverId::new();
        let near = DriverId::new();
        let broken = DriverId::new();
        let tie = DriverId::new();

        let ranked = nearest_drivers(
            vec![
                (far, Coordinate::new(30.0, 40.0)),
                (broken, Coordinate::new(f64::NAN, 0.0)),
                (near, Coordinate::new(3.0, 4.0)),
                (tie, Coordinate::new(-3.0, -4.0)),
            ],
            Coordinate::new(0.0, 0.0),
        );

        let order: Vec<DriverId> = ranked.iter().map(|r| r.driver).collect();
        assert_eq!(order, vec![near, tie, far, broken]);
    }

    #[test]
    fn test_nearest_drivers_empty() {
        let none: Vec<(DriverId, Coordinate)> = Vec::new();
        assert!(nearest_drivers(none, Coordinate::new(0.0, 0.0)).is_empty());
    }
}
