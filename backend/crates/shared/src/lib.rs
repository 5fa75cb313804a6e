//! Shared Kernel - Vocabulary shared by every ride crate
//!
//! This crate contains the small set of types every other crate agrees on:
//! - The unified error type and its classification
//! - Typed identifiers for drivers, riders and trips
//!
//! Only things with the same meaning across all crates belong here.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;
