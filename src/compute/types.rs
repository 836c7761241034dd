//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::enumeration::subsamples::Subsamples;
pub use crate::hypothesis_type::HypothesisType;
pub use crate::power::estimate_power::PowerEstimator;
pub use crate::power::t_test::TTest;
pub use crate::power::types::{PowerPoint, PowerSettings, RejectionTally, SdConvention};
