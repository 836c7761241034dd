use tracing::debug;

use crate::error::TpowerErr;
use crate::power::estimate_power::PowerEstimator;
use crate::power::types::PowerSettings;
use crate::validate::{ArgumentErr, check_population};

/// Smallest subsample size whose exhaustive power reaches `target_power`,
/// or `None` if no size up to the population size does.
///
/// Sizes are scanned upward from 1. Power need not increase with n, so a
/// root find over n is not an option here.
pub fn min_sample_size(
    population: &[f64],
    target_power: f64,
    settings: &PowerSettings,
) -> Result<Option<usize>, TpowerErr> {
    if !(target_power > 0.0 && target_power <= 1.0) {
        return Err(ArgumentErr::TargetPowerOutOfRange(target_power).into());
    }
    check_population(population)?;

    for n in 1..=population.len() {
        let power = PowerEstimator::new(population, n, settings)?.tally().power();
        if power >= target_power {
            debug!(n, power, target_power, "target power reached");
            return Ok(Some(n));
        }
    }
    Ok(None)
}
