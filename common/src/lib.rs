pub mod decluster;
pub mod pick;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub use decluster::decluster;
pub use pick::{Pick, PickList};

pub type Real = f64;

pub type SampleIndex = usize;
pub type SampleCount = usize;
pub type SampleRate = Real;

/// Identity of a recording channel, as a station code and channel code pair.
///
/// Only ever compared for equality; the codes carry no meaning to the
/// detection pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationChannel {
    pub station: String,
    pub channel: String,
}

impl StationChannel {
    pub fn new(station: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            channel: channel.into(),
        }
    }
}

impl Display for StationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.station, self.channel)
    }
}
