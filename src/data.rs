//----------------------------------------
// Reference datasets
//----------------------------------------

/// Tumor lengths from the ten-subject reference study
pub const TUMOR_LENGTHS: [f64; 10] = [5., 2., 2., 5., 2.5, 2., 2., 3., 2.5, 2.25];

/// The reference study extended to twenty subjects
pub const TUMOR_LENGTHS_EXTENDED: [f64; 20] = [
    5., 2., 2., 5., 2.5, 2., 2., 3., 2.5, 2.25, 4., 1., 1.5, 2., 3., 2.75, 2., 2.1, 6., 1.25,
];

/// Null-hypothesis mean tumor length for the reference datasets
pub const REFERENCE_MU0: f64 = 5.0;

/// Significance level used with the reference datasets
pub const REFERENCE_ALPHA: f64 = 0.05;
