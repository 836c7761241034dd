use tracing::trace;

use crate::error::TpowerErr;
use crate::power::estimate_power::PowerEstimator;
use crate::power::types::{PowerPoint, PowerSettings};

/// Exhaustive power at each requested subsample size, in the order given
pub fn power_curve<I>(
    population: &[f64],
    sizes: I,
    settings: &PowerSettings,
) -> Result<Vec<PowerPoint>, TpowerErr>
where
    I: IntoIterator<Item = usize>,
{
    sizes
        .into_iter()
        .map(|n| {
            let power = PowerEstimator::new(population, n, settings)?.tally().power();
            trace!(n, power, "power curve point");
            Ok(PowerPoint { n, power })
        })
        .collect()
}
