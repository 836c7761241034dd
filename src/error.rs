//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::enumeration::error::EnumerationErr;
pub use crate::validate::ArgumentErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TpowerErr {
    #[error("invalid argument: {0}")]
    InvalidArgument(ArgumentErr),
    #[error("while enumerating subsamples: {0}")]
    Enumeration(EnumerationErr),
    #[error("while constructing t distribution: {0}")]
    TDistribution(statrs::StatsError),
}
