use std::collections::BTreeSet;

use degswap_core::Edge;
use degswap_graph::{degree_sequences, EdgeList};
use proptest::prelude::*;

fn check_invariants(list: &EdgeList) {
    let distinct: BTreeSet<Edge> = list.iter().collect();
    assert_eq!(distinct.len(), list.len());
    assert_eq!(list.index().len(), list.len());
    for edge in list.iter() {
        assert!(list.index().contains(edge));
    }
}

fn pairs() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::btree_set((0u32..8, 0u32..8), 2..24)
        .prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn exchanges_preserve_margins_and_simplicity(
        edges in pairs(),
        moves in prop::collection::vec((any::<usize>(), any::<usize>()), 0..64),
    ) {
        let mut list = EdgeList::from_edges(edges.into_iter().map(Edge::from)).unwrap();
        let before = degree_sequences(&list);
        check_invariants(&list);

        for (raw_i, raw_j) in moves {
            let i = raw_i % list.len();
            let j = raw_j % list.len();
            let snapshot = list.clone();
            match list.exchange_tails(i, j) {
                Ok(corners) => {
                    prop_assert_eq!(list.edge(i), Some(corners.new_i));
                    prop_assert_eq!(list.edge(j), Some(corners.new_j));
                }
                Err(_) => {
                    prop_assert_eq!(&list, &snapshot);
                }
            }
            check_invariants(&list);
        }

        prop_assert_eq!(degree_sequences(&list), before);
    }
}
