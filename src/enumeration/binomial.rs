use crate::enumeration::error::EnumerationErr;
use crate::error::TpowerErr;

/// Exact binomial coefficient C(n, k). Returns 0 when k > n.
pub fn n_choose_k(n: usize, k: usize) -> Result<u64, TpowerErr> {
    if k > n {
        return Ok(0);
    }
    // C(n, k) = C(n, n - k); iterate over the shorter side
    let k_short = k.min(n - k);
    let overflow = || -> TpowerErr { EnumerationErr::CountOverflow { n, k }.into() };

    // After step i the accumulator holds C(n, i + 1), so each division is exact
    let mut count: u128 = 1;
    for i in 0..k_short {
        count = count
            .checked_mul((n - i) as u128)
            .ok_or_else(overflow)?
            / (i as u128 + 1);
    }
    u64::try_from(count).map_err(|_| overflow())
}
