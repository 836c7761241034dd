//----------------------------------------
// enumeration errors
//----------------------------------------
use crate::error::TpowerErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EnumerationErr {
    #[error("number of subsamples C({n}, {k}) does not fit in 64 bits; use simulation instead")]
    CountOverflow { n: usize, k: usize },
}

impl Into<TpowerErr> for EnumerationErr {
    fn into(self) -> TpowerErr {
        TpowerErr::Enumeration(self)
    }
}
