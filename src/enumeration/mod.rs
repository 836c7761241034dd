//----------------------------------------
// enumeration mod
//----------------------------------------
pub mod binomial;
pub mod error;
pub mod subsamples;
