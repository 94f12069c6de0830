pub(crate) mod candidates;

use crate::error::{PickError, PickResult};
use candidates::CandidateFilter;
use rayon::prelude::*;
use xcorr_common::{PickList, Real, SampleCount, decluster};

/// Extracts the detection picks of a single channel's correlation trace.
///
/// A sample is a candidate when its magnitude reaches `thresh`; of any two
/// candidates within `trig_int` samples of each other only the one of larger
/// magnitude survives. The returned list is sorted ascending by index.
///
/// `trig_int` is a radius in samples. The sibling parameter of
/// `pick_aggregator::coin_trig` is in seconds; the unsigned type here is
/// what tells the two apart at the call site.
#[tracing::instrument(skip_all, fields(num_samples = trace.len(), num_picks))]
pub fn find_peaks(trace: &[Real], thresh: Real, trig_int: SampleCount) -> PickResult<PickList> {
    validate(trace, thresh)?;

    let candidates: Vec<_> = trace
        .iter()
        .copied()
        .enumerate()
        .candidates(thresh)
        .collect();
    let picks = decluster(candidates, trig_int);

    tracing::Span::current().record("num_picks", picks.len());
    Ok(picks)
}

/// Runs `find_peaks` over many channels' traces, fanning the channels out
/// across the rayon thread pool. Results keep the order of the inputs; the
/// first malformed trace fails the whole call.
pub fn multi_find_peaks(
    traces: &[Vec<Real>],
    thresh: Real,
    trig_int: SampleCount,
) -> PickResult<Vec<PickList>> {
    traces
        .par_iter()
        .map(|trace| find_peaks(trace, thresh, trig_int))
        .collect()
}

fn validate(trace: &[Real], thresh: Real) -> PickResult<()> {
    if !thresh.is_finite() {
        return Err(PickError::NonFiniteThreshold(thresh));
    }
    if thresh < 0.0 {
        return Err(PickError::NegativeThreshold(thresh));
    }
    if let Some((index, &value)) = trace.iter().enumerate().find(|(_, value)| !value.is_finite()) {
        return Err(PickError::NonFiniteSample { index, value });
    }
    Ok(())
}
