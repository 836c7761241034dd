//----------------------------------------
// power mod
//----------------------------------------
pub mod estimate_power;
pub mod min_sample_size;
pub mod power_curve;
pub mod t_test;
pub mod types;
