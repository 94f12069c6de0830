use crate::{Pick, PickList, SampleCount};

/// Greedy non-maximum suppression over a set of candidate picks.
///
/// Candidates are processed in descending magnitude order, ties going to the
/// smaller index. Each accepted pick suppresses every other candidate within
/// `trig_int` samples of it, the boundary distance included. The retained
/// picks are returned sorted ascending by index.
///
/// `trig_int` of zero suppresses nothing but exact index collisions, so a
/// candidate set with unique indices passes through unchanged.
pub fn decluster(mut candidates: Vec<Pick>, trig_int: SampleCount) -> PickList {
    if candidates.len() < 2 {
        return candidates;
    }
    candidates.sort_by_key(|pick| pick.index);

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| {
        candidates[b]
            .magnitude()
            .total_cmp(&candidates[a].magnitude())
            .then_with(|| candidates[a].index.cmp(&candidates[b].index))
    });

    let mut suppressed = vec![false; candidates.len()];
    let mut retained = PickList::new();
    for position in order {
        if suppressed[position] {
            continue;
        }
        let accepted = candidates[position];
        retained.push(accepted);

        // The candidates are index-sorted, so the suppression neighbourhood
        // [index - trig_int, index + trig_int] is a contiguous range.
        let from = candidates
            .partition_point(|pick| pick.index.saturating_add(trig_int) < accepted.index);
        let to = candidates
            .partition_point(|pick| pick.index <= accepted.index.saturating_add(trig_int));
        for flag in &mut suppressed[from..to] {
            *flag = true;
        }
    }

    retained.sort_by_key(|pick| pick.index);
    retained
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidates() {
        assert_eq!(decluster(vec![], 10), vec![]);
    }

    #[test]
    fn single_candidate() {
        let candidates = vec![Pick::new(0.7, 42)];
        assert_eq!(decluster(candidates.clone(), 10), candidates);
    }

    #[test]
    fn chained_candidates_keep_every_other_peak() {
        // Peaks of increasing size exactly the separation radius apart: the
        // largest wins each neighbourhood, leaving indices 16, 8 and 0.
        let candidates = vec![
            Pick::new(0.2, 0),
            Pick::new(1.2, 4),
            Pick::new(2.2, 8),
            Pick::new(3.2, 12),
            Pick::new(4.2, 16),
        ];
        assert_eq!(
            decluster(candidates, 4),
            vec![Pick::new(0.2, 0), Pick::new(2.2, 8), Pick::new(4.2, 16)]
        );
    }

    #[test]
    fn boundary_distance_is_suppressed() {
        let candidates = vec![Pick::new(0.5, 10), Pick::new(0.4, 15)];
        assert_eq!(decluster(candidates, 5), vec![Pick::new(0.5, 10)]);
    }

    #[test]
    fn just_beyond_boundary_survives() {
        let candidates = vec![Pick::new(0.5, 10), Pick::new(0.4, 16)];
        assert_eq!(
            decluster(candidates, 5),
            vec![Pick::new(0.5, 10), Pick::new(0.4, 16)]
        );
    }

    #[test]
    fn magnitude_ties_go_to_the_smaller_index() {
        let candidates = vec![Pick::new(0.5, 20), Pick::new(0.5, 12), Pick::new(0.5, 28)];
        assert_eq!(
            decluster(candidates, 10),
            vec![Pick::new(0.5, 12), Pick::new(0.5, 28)]
        );
    }

    #[test]
    fn magnitude_not_sign_decides_dominance() {
        let candidates = vec![Pick::new(-0.9, 100), Pick::new(0.6, 103)];
        assert_eq!(decluster(candidates, 5), vec![Pick::new(-0.9, 100)]);
    }

    #[test]
    fn zero_radius_keeps_unique_indices() {
        let candidates = vec![Pick::new(0.3, 0), Pick::new(0.4, 1), Pick::new(0.5, 2)];
        assert_eq!(decluster(candidates.clone(), 0), candidates);
    }

    #[test]
    fn radius_longer_than_span_leaves_the_global_maximum() {
        let candidates = vec![
            Pick::new(0.3, 3),
            Pick::new(-0.8, 57),
            Pick::new(0.5, 91),
        ];
        assert_eq!(decluster(candidates, 1000), vec![Pick::new(-0.8, 57)]);
    }
}
