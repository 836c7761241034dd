/// Direction of the alternative hypothesis relative to the null mean.
/// `TrtLess` is the lower-tailed test used when treatment is expected to
/// reduce the measured value.
#[derive(Default, Debug, PartialEq, Copy, Clone)]
pub enum HypothesisType {
    NotEqual,
    TrtGreater,
    #[default]
    TrtLess,
}

impl HypothesisType {
    /// Upper-tail probability whose quantile is the critical value
    pub fn tail_probability(&self, alpha: f64) -> f64 {
        match self {
            HypothesisType::NotEqual => alpha / 2.,
            HypothesisType::TrtGreater | HypothesisType::TrtLess => alpha,
        }
    }

    /// Whether statistic `t` falls in the rejection region bounded by the
    /// positive `critical` value
    pub fn in_rejection_region(&self, t: f64, critical: f64) -> bool {
        match self {
            HypothesisType::TrtLess => t <= -critical,
            HypothesisType::TrtGreater => t >= critical,
            HypothesisType::NotEqual => t.abs() >= critical,
        }
    }
}
