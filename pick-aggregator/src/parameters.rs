use crate::error::{CoincidenceError, CoincidenceResult};
use serde::{Deserialize, Serialize};
use xcorr_common::{Real, SampleCount, SampleRate};

/// Time-domain configuration of the coincidence trigger.
///
/// `moveout_secs` and `trig_int_secs` are given in seconds and converted to
/// sample counts against `sample_rate` (rounding to the nearest sample).
/// This differs from the single-channel picker, whose separation radius is
/// already a sample count; the field names and types carry the distinction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoincidenceParameters {
    pub sample_rate: SampleRate,
    pub moveout_secs: Real,
    pub min_trig: usize,
    pub trig_int_secs: Real,
}

impl CoincidenceParameters {
    pub fn new(
        sample_rate: SampleRate,
        moveout_secs: Real,
        min_trig: usize,
        trig_int_secs: Real,
    ) -> CoincidenceResult<Self> {
        let parameters = Self {
            sample_rate,
            moveout_secs,
            min_trig,
            trig_int_secs,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> CoincidenceResult<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(CoincidenceError::InvalidSampleRate(self.sample_rate));
        }
        if !self.moveout_secs.is_finite() || self.moveout_secs < 0.0 {
            return Err(CoincidenceError::InvalidMoveout(self.moveout_secs));
        }
        if !self.trig_int_secs.is_finite() || self.trig_int_secs < 0.0 {
            return Err(CoincidenceError::InvalidTrigInt(self.trig_int_secs));
        }
        Ok(())
    }

    /// Largest sample-index separation at which picks from different
    /// channels count as the same event.
    pub fn moveout_samples(&self) -> SampleCount {
        seconds_to_samples(self.moveout_secs, self.sample_rate)
    }

    /// Suppression radius applied to the fused triggers.
    pub fn trig_int_samples(&self) -> SampleCount {
        seconds_to_samples(self.trig_int_secs, self.sample_rate)
    }
}

fn seconds_to_samples(seconds: Real, sample_rate: SampleRate) -> SampleCount {
    (seconds * sample_rate).round() as SampleCount
}
