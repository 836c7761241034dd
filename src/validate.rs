//----------------------------------------
// Argument validation
//----------------------------------------
use crate::error::TpowerErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ArgumentErr {
    #[error("population must contain at least one observation")]
    EmptyPopulation,
    #[error("subsample size should be in [1, {population_size}]; got {n}")]
    SubsampleSizeOutOfRange { n: usize, population_size: usize },
    #[error("subsample has {got} values but the test was built for {expected}")]
    SubsampleLengthMismatch { expected: usize, got: usize },
    #[error("alpha should be in (0, 1); got {0}")]
    AlphaOutOfRange(f64),
    #[error("{name} should be finite; got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("number of simulated draws should be positive")]
    ZeroDraws,
    #[error("target power should be in (0, 1]; got {0}")]
    TargetPowerOutOfRange(f64),
}

impl Into<TpowerErr> for ArgumentErr {
    fn into(self) -> TpowerErr {
        TpowerErr::InvalidArgument(self)
    }
}

pub fn check_population(population: &[f64]) -> Result<(), TpowerErr> {
    if population.is_empty() {
        return Err(ArgumentErr::EmptyPopulation.into());
    }
    if let Some(&value) = population.iter().find(|x| !x.is_finite()) {
        return Err(ArgumentErr::NonFinite {
            name: "observation",
            value,
        }
        .into());
    }
    Ok(())
}

pub fn check_subsample_size(n: usize, population_size: usize) -> Result<(), TpowerErr> {
    if n < 1 || n > population_size {
        return Err(ArgumentErr::SubsampleSizeOutOfRange { n, population_size }.into());
    }
    Ok(())
}

pub fn check_alpha(alpha: f64) -> Result<(), TpowerErr> {
    // Written so that NaN fails as well
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(ArgumentErr::AlphaOutOfRange(alpha).into());
    }
    Ok(())
}

pub fn check_finite(name: &'static str, value: f64) -> Result<(), TpowerErr> {
    if !value.is_finite() {
        return Err(ArgumentErr::NonFinite { name, value }.into());
    }
    Ok(())
}
