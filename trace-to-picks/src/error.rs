use thiserror::Error;
use xcorr_common::{Real, SampleIndex};

pub type PickResult<T> = Result<T, PickError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PickError {
    #[error("Threshold is not finite: {0}")]
    NonFiniteThreshold(Real),
    #[error("Threshold is negative: {0}")]
    NegativeThreshold(Real),
    #[error("Trace sample at index {index} is not finite: {value}")]
    NonFiniteSample { index: SampleIndex, value: Real },
}
