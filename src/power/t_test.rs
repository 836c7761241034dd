use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;
use tracing::debug;

use crate::error::TpowerErr;
use crate::hypothesis_type::HypothesisType;
use crate::power::types::{PowerSettings, SdConvention};
use crate::validate::{ArgumentErr, check_alpha, check_finite};

/// Critical value of the t distribution with `df` degrees of freedom: the
/// (1 - alpha) quantile for one-sided alternatives, (1 - alpha / 2) for
/// `NotEqual`
pub fn critical_value(
    df: usize,
    alpha: f64,
    hypothesis_type: HypothesisType,
) -> Result<f64, TpowerErr> {
    check_alpha(alpha)?;
    let t_dist = StudentsT::new(0.0, 1.0, df as f64).map_err(TpowerErr::TDistribution)?;
    Ok(t_dist.inverse_cdf(1. - hypothesis_type.tail_probability(alpha)))
}

/// One-sample t-test against a fixed null mean, resolved for a single
/// subsample size so the critical value is looked up once.
#[derive(Debug, Clone, Copy)]
pub struct TTest {
    n: usize,
    mu0: f64,
    hypothesis_type: HypothesisType,
    sd_convention: SdConvention,
    // None only for n = 1, where every subsample is degenerate
    critical: Option<f64>,
}

impl TTest {
    pub fn new(n: usize, settings: &PowerSettings) -> Result<Self, TpowerErr> {
        check_finite("mu0", settings.mu0)?;
        check_alpha(settings.alpha)?;
        let critical = if n >= 2 {
            let t_crit = critical_value(n - 1, settings.alpha, settings.hypothesis_type)?;
            debug!(n, df = n - 1, t_crit, "resolved critical value");
            Some(t_crit)
        } else {
            None
        };
        Ok(TTest {
            n,
            mu0: settings.mu0,
            hypothesis_type: settings.hypothesis_type,
            sd_convention: settings.sd_convention,
            critical,
        })
    }

    pub fn critical(&self) -> Option<f64> {
        self.critical
    }

    /// Subsample size the critical value was resolved for
    pub fn n(&self) -> usize {
        self.n
    }

    /// Whether the subsample rejects the null hypothesis. Fails if the
    /// subsample does not hold exactly `n` values.
    ///
    /// A subsample whose values are all identical has no defined t
    /// statistic. It rejects whenever the common value differs from `mu0`
    /// and never rejects when it equals `mu0`, whatever the direction of
    /// the alternative. This reproduces the reference power values; it is
    /// not a standard statistical convention.
    pub fn rejects(&self, subsample: &[f64]) -> Result<bool, TpowerErr> {
        if subsample.len() != self.n {
            return Err(ArgumentErr::SubsampleLengthMismatch {
                expected: self.n,
                got: subsample.len(),
            }
            .into());
        }
        Ok(self.rejects_sized(subsample))
    }

    // Callers guarantee subsample.len() == self.n
    pub(crate) fn rejects_sized(&self, subsample: &[f64]) -> bool {
        let Some(&first) = subsample.first() else {
            return false;
        };
        if subsample.iter().all(|&x| x == first) {
            return first != self.mu0;
        }
        let Some(critical) = self.critical else {
            return false;
        };

        let n = subsample.len() as f64;
        let mean = subsample.iter().mean();
        let sd = match self.sd_convention {
            SdConvention::Population => subsample.iter().population_std_dev(),
            SdConvention::Sample => subsample.iter().std_dev(),
        };
        // Distinct values whose spread underflows; treat like the degenerate case
        if sd == 0.0 {
            return mean != self.mu0;
        }

        let t = (mean - self.mu0) / (sd / n.sqrt());
        self.hypothesis_type.in_rejection_region(t, critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PowerSettings {
        PowerSettings::new(5.0, 0.05).unwrap()
    }

    #[test]
    fn one_sided_critical_values() {
        let df_1 = critical_value(1, 0.05, HypothesisType::TrtLess).unwrap();
        assert!((df_1 - 6.313752).abs() < 0.0001);
        let df_9 = critical_value(9, 0.05, HypothesisType::TrtLess).unwrap();
        assert!((df_9 - 1.833113).abs() < 0.0001);
        assert_eq!(
            critical_value(9, 0.05, HypothesisType::TrtLess).unwrap(),
            critical_value(9, 0.05, HypothesisType::TrtGreater).unwrap()
        );
    }

    #[test]
    fn two_sided_critical_value() {
        let df_9 = critical_value(9, 0.05, HypothesisType::NotEqual).unwrap();
        assert!((df_9 - 2.262157).abs() < 0.0001);
    }

    #[test]
    fn zero_degrees_of_freedom() {
        assert!(matches!(
            critical_value(0, 0.05, HypothesisType::TrtLess),
            Err(TpowerErr::TDistribution(_))
        ));
    }

    #[test]
    fn single_value_subsamples() {
        let t_test = TTest::new(1, &settings()).unwrap();
        assert_eq!(t_test.critical(), None);
        assert!(!t_test.rejects(&[5.0]).unwrap());
        assert!(t_test.rejects(&[2.0]).unwrap());
        assert!(t_test.rejects(&[7.0]).unwrap());
    }

    #[test]
    fn identical_values() {
        let t_test = TTest::new(3, &settings()).unwrap();
        assert!(!t_test.rejects(&[5.0, 5.0, 5.0]).unwrap());
        assert!(t_test.rejects(&[2.0, 2.0, 2.0]).unwrap());

        // Degenerate rule ignores the direction of the alternative
        let greater_settings = settings().with_hypothesis_type(HypothesisType::TrtGreater);
        let greater = TTest::new(2, &greater_settings).unwrap();
        assert!(greater.rejects(&[2.0, 2.0]).unwrap());
        assert!(!greater.rejects(&[5.0, 5.0]).unwrap());
    }

    #[test]
    fn lower_tailed_pairs() {
        let t_test = TTest::new(2, &settings()).unwrap();
        // t = -32.5
        assert!(t_test.rejects(&[2.0, 2.25]).unwrap());
        // t = -1.41
        assert!(!t_test.rejects(&[5.0, 2.0]).unwrap());
        // Large positive t never rejects a lower-tailed test
        assert!(!t_test.rejects(&[8.0, 8.25]).unwrap());
    }

    #[test]
    fn upper_and_two_tailed_pairs() {
        let greater_settings = settings().with_hypothesis_type(HypothesisType::TrtGreater);
        let greater = TTest::new(2, &greater_settings).unwrap();
        assert!(greater.rejects(&[8.0, 8.25]).unwrap());
        assert!(!greater.rejects(&[2.0, 2.25]).unwrap());

        let two_sided_settings = settings().with_hypothesis_type(HypothesisType::NotEqual);
        let two_sided = TTest::new(2, &two_sided_settings).unwrap();
        assert!(two_sided.rejects(&[8.0, 8.25]).unwrap());
        assert!(two_sided.rejects(&[2.0, 2.25]).unwrap());
        assert!(!two_sided.rejects(&[5.0, 2.0]).unwrap());
    }

    #[test]
    fn sd_convention_changes_decision() {
        // Population sd gives t = -7.07, sample sd gives t = -5.0; critical is 6.31
        let population = TTest::new(2, &settings()).unwrap();
        let sample = TTest::new(2, &settings().with_sd_convention(SdConvention::Sample)).unwrap();
        assert!(population.rejects(&[2.0, 3.0]).unwrap());
        assert!(!sample.rejects(&[2.0, 3.0]).unwrap());
    }

    #[test]
    fn underflowing_spread() {
        // Distinct values whose variance underflows to zero still reject
        let settings = PowerSettings::new(0.0, 0.05).unwrap();
        let t_test = TTest::new(2, &settings).unwrap();
        assert!(t_test.rejects(&[1e-200, 2e-200]).unwrap());
    }

    #[test]
    fn length_must_match_n() {
        // t = -6.0 would reject at df = 3 but not against the df = 1 critical value
        let t_test = TTest::new(2, &settings()).unwrap();
        assert_eq!(t_test.n(), 2);
        if let Err(e) = t_test.rejects(&[4.0, 4.5, 4.0, 4.5]) {
            assert_eq!(
                String::from(
                    "invalid argument: subsample has 4 values but the test was built for 2"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }

        let singleton = TTest::new(1, &settings()).unwrap();
        assert!(matches!(
            singleton.rejects(&[2.0, 3.0]),
            Err(TpowerErr::InvalidArgument(ArgumentErr::SubsampleLengthMismatch {
                expected: 1,
                got: 2
            }))
        ));

        // Built for the right size, the same subsample rejects
        let sized = TTest::new(4, &settings()).unwrap();
        assert!(sized.rejects(&[4.0, 4.5, 4.0, 4.5]).unwrap());
    }
}
