//! Loan pre-qualification: eligibility rules, tiered offer pricing and the HTTP surface
//! used to run both server-side.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
