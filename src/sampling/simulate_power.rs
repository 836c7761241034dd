use rand::{SeedableRng, rngs, seq::index};
use tracing::debug;

use crate::error::TpowerErr;
use crate::power::t_test::TTest;
use crate::power::types::{PowerSettings, RejectionTally};
use crate::validate::{ArgumentErr, check_population, check_subsample_size};

/// Monte Carlo counterpart to exhaustive enumeration, for populations where
/// C(N, n) is too large to walk. Each draw picks `n` distinct positions
/// uniformly without replacement and applies the same test as the
/// exhaustive estimator. Results are reproducible for a given seed.
pub fn simulate_power(
    population: &[f64],
    n: usize,
    draws: u64,
    seed: u64,
    settings: &PowerSettings,
) -> Result<RejectionTally, TpowerErr> {
    check_population(population)?;
    check_subsample_size(n, population.len())?;
    if draws == 0 {
        return Err(ArgumentErr::ZeroDraws.into());
    }
    let t_test = TTest::new(n, settings)?;

    let mut rng = rngs::StdRng::seed_from_u64(seed);
    let mut subsample = Vec::with_capacity(n);
    let mut tally = RejectionTally::default();
    for _ in 0..draws {
        subsample.clear();
        subsample.extend(
            index::sample(&mut rng, population.len(), n)
                .iter()
                .map(|i| population[i]),
        );
        tally = tally.record(t_test.rejects_sized(&subsample));
    }

    debug!(
        n,
        draws,
        seed,
        rejections = tally.rejections,
        "finished simulation"
    );
    Ok(tally)
}
