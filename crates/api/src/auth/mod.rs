//! Authentication primitives.
//!
//! - [`jwt`]: bearer token validation (and issuance for tooling and tests).

pub mod jwt;
