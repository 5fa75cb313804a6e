//! Domain Layer - Business logic
//!
//! This layer contains:
//! - Straight-line distance and driver ranking
//! - The rate schedule and its peak rule
//! - The fare formula
//! - Collaborator traits (routing, rate source)

pub mod estimator;
pub mod geometry;
pub mod rates;
pub mod repository;
