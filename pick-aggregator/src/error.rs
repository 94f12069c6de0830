use thiserror::Error;
use xcorr_common::{Real, SampleRate};

pub type CoincidenceResult<T> = Result<T, CoincidenceError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoincidenceError {
    #[error("Number of peak lists ({peak_lists}) does not match number of channels ({channels})")]
    ChannelCountMismatch { peak_lists: usize, channels: usize },
    #[error("min_trig {min_trig} is outside the valid range [1, {channels}]")]
    MinTrigOutOfRange { min_trig: usize, channels: usize },
    #[error("Sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(SampleRate),
    #[error("Moveout must be non-negative and finite, got {0} s")]
    InvalidMoveout(Real),
    #[error("Trigger interval must be non-negative and finite, got {0} s")]
    InvalidTrigInt(Real),
}
