use itertools::Itertools;
use xcorr_common::{Pick, PickList, SampleCount};

/// One channel's pick tagged with the channel's position in the input lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TaggedPick {
    pub(crate) channel: usize,
    pub(crate) pick: Pick,
}

/// Disjoint-set forest over the flattened pick pool.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            self.parent[element] = self.parent[self.parent[element]];
            element = self.parent[element];
        }
        element
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_a] = root_b;
        }
    }
}

/// Builds the coincidence clusters of a multi-channel pick pool: the
/// connected components of the graph linking picks from different channels
/// whose sample indices are within `moveout` of each other, boundary
/// included. Picks from the same channel never link directly, but may end up
/// in one cluster through a chain over other channels.
///
/// Clusters and the picks within them come back sorted by sample index.
pub(crate) fn coincidence_clusters(
    peak_lists: &[PickList],
    moveout: SampleCount,
) -> Vec<Vec<TaggedPick>> {
    let mut pool: Vec<TaggedPick> = peak_lists
        .iter()
        .enumerate()
        .flat_map(|(channel, picks)| picks.iter().map(move |&pick| TaggedPick { channel, pick }))
        .collect();
    pool.sort_by_key(|tagged| tagged.pick.index);

    let mut sets = DisjointSets::new(pool.len());
    for (position, tagged) in pool.iter().enumerate() {
        // The pool is index-sorted, so every link partner of this pick sits
        // in the window of picks no more than `moveout` samples ahead.
        for (offset, other) in pool[position + 1..].iter().enumerate() {
            if other.pick.index - tagged.pick.index > moveout {
                break;
            }
            if other.channel != tagged.channel {
                sets.union(position, position + 1 + offset);
            }
        }
    }

    let mut clusters: Vec<Vec<TaggedPick>> = (0..pool.len())
        .map(|position| (sets.find(position), pool[position]))
        .into_group_map()
        .into_values()
        .collect();
    clusters.sort_by_key(|cluster| cluster[0].pick.index);
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(channel: usize, value: f64, index: usize) -> TaggedPick {
        TaggedPick {
            channel,
            pick: Pick::new(value, index),
        }
    }

    #[test]
    fn empty_pool_has_no_clusters() {
        assert!(coincidence_clusters(&[], 30).is_empty());
        assert!(coincidence_clusters(&[vec![], vec![]], 30).is_empty());
    }

    #[test]
    fn picks_beyond_moveout_stay_apart() {
        let peak_lists = vec![vec![Pick::new(0.3, 800)], vec![Pick::new(0.7, 850)]];
        let clusters = coincidence_clusters(&peak_lists, 30);
        assert_eq!(
            clusters,
            vec![vec![tagged(0, 0.3, 800)], vec![tagged(1, 0.7, 850)]]
        );
    }

    #[test]
    fn picks_at_exactly_moveout_coincide() {
        let peak_lists = vec![vec![Pick::new(0.3, 100)], vec![Pick::new(0.7, 130)]];
        let clusters = coincidence_clusters(&peak_lists, 30);
        assert_eq!(
            clusters,
            vec![vec![tagged(0, 0.3, 100), tagged(1, 0.7, 130)]]
        );
    }

    #[test]
    fn same_channel_picks_never_link_directly() {
        let peak_lists = vec![vec![Pick::new(0.5, 0), Pick::new(0.4, 20)]];
        let clusters = coincidence_clusters(&peak_lists, 25);
        assert_eq!(
            clusters,
            vec![vec![tagged(0, 0.5, 0)], vec![tagged(0, 0.4, 20)]]
        );
    }

    #[test]
    fn chains_span_further_than_one_moveout() {
        // 0 and 50 are 50 apart, but both within 30 of the middle pick on a
        // third channel, so all three form one component.
        let peak_lists = vec![
            vec![Pick::new(0.5, 0)],
            vec![Pick::new(0.6, 25)],
            vec![Pick::new(0.7, 50)],
        ];
        let clusters = coincidence_clusters(&peak_lists, 30);
        assert_eq!(
            clusters,
            vec![vec![
                tagged(0, 0.5, 0),
                tagged(1, 0.6, 25),
                tagged(2, 0.7, 50)
            ]]
        );
    }

    #[test]
    fn same_channel_picks_join_through_another_channel() {
        let peak_lists = vec![
            vec![Pick::new(0.5, 100), Pick::new(0.3, 105)],
            vec![Pick::new(0.4, 120)],
        ];
        let clusters = coincidence_clusters(&peak_lists, 30);
        assert_eq!(
            clusters,
            vec![vec![
                tagged(0, 0.5, 100),
                tagged(0, 0.3, 105),
                tagged(1, 0.4, 120)
            ]]
        );
    }
}
