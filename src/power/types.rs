//----------------------------------------
// power mod types
//----------------------------------------
use serde::Serialize;

use crate::error::TpowerErr;
use crate::hypothesis_type::HypothesisType;
use crate::validate::{check_alpha, check_finite};

/// Denominator used for the subsample standard deviation.
///
/// `Population` divides by n and reproduces the reference power values;
/// textbook t-tests use `Sample` (n - 1), which gives smaller t statistics
/// and therefore lower power for the same data.
#[derive(Default, Debug, PartialEq, Copy, Clone)]
pub enum SdConvention {
    #[default]
    Population,
    Sample,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct PowerSettings {
    pub mu0: f64,
    pub alpha: f64,
    pub hypothesis_type: HypothesisType,
    pub sd_convention: SdConvention,
}

impl PowerSettings {
    pub fn new(mu0: f64, alpha: f64) -> Result<Self, TpowerErr> {
        check_finite("mu0", mu0)?;
        check_alpha(alpha)?;
        Ok(PowerSettings {
            mu0,
            alpha,
            hypothesis_type: HypothesisType::default(),
            sd_convention: SdConvention::default(),
        })
    }

    pub fn with_hypothesis_type(mut self, hypothesis_type: HypothesisType) -> Self {
        self.hypothesis_type = hypothesis_type;
        self
    }

    pub fn with_sd_convention(mut self, sd_convention: SdConvention) -> Self {
        self.sd_convention = sd_convention;
        self
    }
}

#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize)]
pub struct RejectionTally {
    pub rejections: u64,
    pub evaluated: u64,
}

impl RejectionTally {
    pub fn record(self, rejected: bool) -> Self {
        RejectionTally {
            rejections: self.rejections + u64::from(rejected),
            evaluated: self.evaluated + 1,
        }
    }

    /// Fraction of evaluated subsamples that rejected the null; 0 if none
    /// were evaluated
    pub fn power(&self) -> f64 {
        if self.evaluated == 0 {
            return 0.0;
        }
        self.rejections as f64 / self.evaluated as f64
    }
}

#[derive(Debug, PartialEq, Copy, Clone, Serialize)]
pub struct PowerPoint {
    pub n: usize,
    pub power: f64,
}
