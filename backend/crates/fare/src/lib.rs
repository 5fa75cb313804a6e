//! Fare Module
//!
//! Clean Architecture structure:
//! - `domain/` - Straight-line distance, rate schedule, fare formula, collaborator traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Rate sources and routing adapters
//!
//! ## Model
//! - The fare formula is a pure function of distance, duration and the rate schedule
//! - Routing and rate lookups happen in the use case, never inside the formula
//! - Failures from collaborators propagate unchanged; nothing is retried or defaulted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

pub use application::config::FareConfig;
pub use application::estimate_fare::{EstimateFareInput, EstimateFareOutput, EstimateFareUseCase};
pub use domain::estimator::{MILES_PER_METER, estimate, estimate_with_peak, round_fare};
pub use domain::geometry::{Coordinate, DistanceResult, distance, nearest_drivers, rank_by_distance};
pub use domain::rates::{PeakRule, PeakWindow, RateSchedule};
pub use error::{FareError, FareResult};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
