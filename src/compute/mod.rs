//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::enumeration::binomial::n_choose_k;
pub use crate::enumeration::subsamples::subsamples;
pub use crate::power::estimate_power::estimate_power;
pub use crate::power::min_sample_size::min_sample_size;
pub use crate::power::power_curve::power_curve;
pub use crate::power::t_test::critical_value;
pub use crate::sampling::simulate_power::simulate_power;
