use tracing::debug;

use crate::enumeration::subsamples::{Subsamples, subsamples};
use crate::error::TpowerErr;
use crate::power::t_test::TTest;
use crate::power::types::{PowerSettings, RejectionTally};

/// Exhaustive power estimate over every subsample of size `n`.
///
/// Each of the C(N, n) subsamples drawn without replacement from the
/// population is tested against `mu0` with a lower-tailed one-sample t-test
/// at level `alpha`; the result is the fraction that reject. The subsample
/// standard deviation divides by n, not n - 1.
pub fn estimate_power(
    population: &[f64],
    n: usize,
    mu0: f64,
    alpha: f64,
) -> Result<f64, TpowerErr> {
    let settings = PowerSettings::new(mu0, alpha)?;
    Ok(PowerEstimator::new(population, n, &settings)?.tally().power())
}

/// Enumerates the subsamples of one population at one subsample size and
/// tests each of them. The enumeration is lazy, so callers can stop early
/// through `decisions` or `tally_until`.
#[derive(Clone)]
pub struct PowerEstimator<'a> {
    subsamples: Subsamples<'a>,
    t_test: TTest,
}

impl<'a> PowerEstimator<'a> {
    pub fn new(
        population: &'a [f64],
        n: usize,
        settings: &PowerSettings,
    ) -> Result<Self, TpowerErr> {
        let subsamples = subsamples(population, n)?;
        let t_test = TTest::new(n, settings)?;
        debug!(
            population_size = population.len(),
            n,
            total = subsamples.total(),
            "enumerating subsamples"
        );
        Ok(PowerEstimator { subsamples, t_test })
    }

    /// C(N, n), the number of subsamples a full tally evaluates
    pub fn total(&self) -> u64 {
        self.subsamples.total()
    }

    /// Reject decision for each subsample, in enumeration order. Every call
    /// starts from the first subsample.
    pub fn decisions(&self) -> impl Iterator<Item = bool> + '_ {
        self.subsamples
            .clone()
            .map(move |subsample| self.t_test.rejects_sized(&subsample))
    }

    pub fn tally(&self) -> RejectionTally {
        let tally = self
            .decisions()
            .fold(RejectionTally::default(), RejectionTally::record);
        debug!(
            rejections = tally.rejections,
            evaluated = tally.evaluated,
            "finished enumeration"
        );
        tally
    }

    /// Tally over at most `max_subsamples` subsamples
    pub fn tally_until(&self, max_subsamples: u64) -> RejectionTally {
        let limit = usize::try_from(max_subsamples).unwrap_or(usize::MAX);
        self.decisions()
            .take(limit)
            .fold(RejectionTally::default(), RejectionTally::record)
    }
}
