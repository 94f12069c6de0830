//! This crate fuses the per-channel pick lists produced by `trace-to-picks`
//! into consolidated multi-channel detections.
//!
//! Picks from different channels that fall within a moveout tolerance of
//! each other are chained into coincidence clusters; a cluster seen on
//! enough distinct channels is promoted to a single trigger carrying the
//! mean pick value and the earliest pick index. Typical usage:
//! ```rust
//! use pick_aggregator::coin_trig;
//! use xcorr_common::{Pick, StationChannel};
//!
//! let peak_lists = vec![
//!     vec![Pick::new(0.5, 100), Pick::new(0.3, 800), Pick::new(0.3, 105)],
//!     vec![Pick::new(0.4, 120), Pick::new(0.7, 850)],
//! ];
//! let channels = vec![
//!     StationChannel::new("a", "Z"),
//!     StationChannel::new("b", "Z"),
//! ];
//! let triggers = coin_trig(&peak_lists, &channels, 10.0, 3.0, 2, 1.0)?;
//! assert_eq!(triggers.len(), 1);
//! assert_eq!(triggers[0].index, 100);
//! # Ok::<(), pick_aggregator::CoincidenceError>(())
//! ```

mod cluster;
mod error;
mod parameters;

use cluster::coincidence_clusters;
use std::collections::HashSet;
use tracing::debug;
use xcorr_common::{Pick, PickList, Real, SampleRate, StationChannel, decluster};

pub use error::{CoincidenceError, CoincidenceResult};
pub use parameters::CoincidenceParameters;

/// A fused multi-channel detection. Same shape as a single-channel pick;
/// which channels contributed to it is deliberately not retained.
pub type Trigger = Pick;

/// Fuses independent per-channel pick lists into coincidence triggers.
///
/// `peak_lists[k]` holds the picks observed on `channels[k]`. Picks from
/// different channels whose sample indices are within `moveout_secs` of each
/// other (converted against `sample_rate`, chained transitively) form one
/// candidate cluster; clusters represented on at least `min_trig` distinct
/// channel identities each yield a trigger whose value is the mean of the
/// contributing picks and whose index is the earliest contribution. Triggers
/// closer together than `trig_int_secs` are then thinned by the same
/// suppression rule the single-channel picker uses.
///
/// `moveout_secs` and `trig_int_secs` are in seconds, unlike the
/// sample-valued `trig_int` of `trace_to_picks::find_peaks`.
#[tracing::instrument(skip_all, fields(num_channels = channels.len(), num_clusters, num_triggers))]
pub fn coin_trig(
    peak_lists: &[PickList],
    channels: &[StationChannel],
    sample_rate: SampleRate,
    moveout_secs: Real,
    min_trig: usize,
    trig_int_secs: Real,
) -> CoincidenceResult<Vec<Trigger>> {
    if peak_lists.len() != channels.len() {
        return Err(CoincidenceError::ChannelCountMismatch {
            peak_lists: peak_lists.len(),
            channels: channels.len(),
        });
    }
    if channels.is_empty() {
        return Ok(Vec::new());
    }
    if !(1..=channels.len()).contains(&min_trig) {
        return Err(CoincidenceError::MinTrigOutOfRange {
            min_trig,
            channels: channels.len(),
        });
    }
    let parameters =
        CoincidenceParameters::new(sample_rate, moveout_secs, min_trig, trig_int_secs)?;

    let clusters = coincidence_clusters(peak_lists, parameters.moveout_samples());
    tracing::Span::current().record("num_clusters", clusters.len());

    let mut raw = Vec::new();
    for cluster in &clusters {
        let distinct: HashSet<&StationChannel> = cluster
            .iter()
            .map(|tagged| &channels[tagged.channel])
            .collect();
        if distinct.len() < min_trig {
            debug!(
                "Dropping cluster at sample {} seen on {} of {min_trig} channels",
                cluster[0].pick.index,
                distinct.len(),
            );
            continue;
        }
        let value =
            cluster.iter().map(|tagged| tagged.pick.value).sum::<Real>() / cluster.len() as Real;
        raw.push(Trigger::new(value, cluster[0].pick.index));
    }

    let triggers = decluster(raw, parameters.trig_int_samples());
    tracing::Span::current().record("num_triggers", triggers.len());
    Ok(triggers)
}
