//! Infrastructure Layer
//!
//! Implementations of the domain collaborator traits.

pub mod rate_source;
pub mod routing;
