use crate::{Real, SampleIndex};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A single retained peak of a correlation trace: the correlation statistic
/// and the sample index it was observed at.
///
/// The statistic keeps its sign; thresholding and suppression compare
/// magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pick {
    pub value: Real,
    pub index: SampleIndex,
}

impl Pick {
    pub fn new(value: Real, index: SampleIndex) -> Self {
        Self { value, index }
    }

    pub fn magnitude(&self) -> Real {
        self.value.abs()
    }
}

impl Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.value, self.index)
    }
}

/// An ordered list of picks from one channel.
///
/// Lists built by `find_peaks` or `decluster` are sorted ascending by index,
/// with every pair of entries further apart than the separation radius used
/// to build them.
pub type PickList = Vec<Pick>;
