//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Secret hashing and verification (Argon2id, PHC strings)

pub mod password;
