use std::ops::Range;

use itertools::Itertools;
use itertools::structs::Combinations;

use crate::enumeration::binomial::n_choose_k;
use crate::error::TpowerErr;
use crate::validate::{check_population, check_subsample_size};

/// Lazy sequence of every subsample of `n` distinct positions drawn from a
/// population, in lexicographic order of position index. Only the current
/// index combination is held in memory. A clone continues from the same
/// position; call `subsamples` again to start over.
#[derive(Clone)]
pub struct Subsamples<'a> {
    population: &'a [f64],
    positions: Combinations<Range<usize>>,
    total: u64,
}

impl Subsamples<'_> {
    /// Number of subsamples the full sequence yields, i.e. C(N, n)
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Iterator for Subsamples<'_> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions
            .next()
            .map(|idx| idx.into_iter().map(|i| self.population[i]).collect())
    }
}

pub fn subsamples(population: &[f64], n: usize) -> Result<Subsamples<'_>, TpowerErr> {
    check_population(population)?;
    check_subsample_size(n, population.len())?;
    let total = n_choose_k(population.len(), n)?;
    Ok(Subsamples {
        population,
        positions: (0..population.len()).combinations(n),
        total,
    })
}
