//----------------------------------------
// Root lib
//----------------------------------------
//! Statistical power of a one-sample t-test, estimated empirically by
//! testing every subsample of a fixed size drawn without replacement from
//! an observed population. A seeded Monte Carlo variant covers populations
//! too large to enumerate.
//!
//! Subsample standard deviations divide by n rather than n - 1 unless
//! `SdConvention::Sample` is requested.

/// Public API for power estimates, power curves and subsample enumeration
pub mod compute;
/// Reference tumor-length datasets
pub mod data;
/// Error types
pub mod error;
mod enumeration;
mod hypothesis_type;
mod power;
mod sampling;
mod validate;
