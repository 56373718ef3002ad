use std::collections::BTreeSet;

use tracing::trace;

use crate::{math::Map, prelude::*};

/// Computes the coarsest partition of the states of `dfa` into classes of equivalent states
/// with Moore's algorithm. The computation starts from the split into accepting and rejecting
/// states and repeats [`refinement_pass`] over all classes until a pass does not split any
/// class anymore.
///
/// All states are assumed to be reachable and the transition function is assumed to be
/// complete, see [`Dfa::ensure_complete`].
pub(crate) fn moore_partition_refinement(dfa: &Dfa) -> Partition<State> {
    let (accepting, rejecting): (BTreeSet<State>, BTreeSet<State>) = dfa
        .states()
        .iter()
        .cloned()
        .partition(|q| dfa.is_accepting(q));
    let mut partition = Partition::new([accepting, rejecting]);
    trace!("initial partition {}", partition.show());

    let mut pass = 0;
    loop {
        pass += 1;
        let refined = refinement_pass(dfa, &partition);
        trace!("pass {pass} produced {}", refined.show());

        // a pass never merges classes, so an unchanged count means no class was split
        if refined.size() == partition.size() {
            return refined;
        }
        partition = refined;
    }
}

/// Splits every class of `partition` into groups of states whose successors lie in the same
/// classes of `partition`. Successors are always looked up in `partition` as it was before the
/// pass started, splits found during the pass only take effect in the next one.
///
/// The order of the result is deterministic: the groups obtained from a class replace it at
/// its position, in the order in which they were discovered.
pub(crate) fn refinement_pass(dfa: &Dfa, partition: &Partition<State>) -> Partition<State> {
    let class_of = partition.class_index();
    let mut refined = Vec::with_capacity(partition.size());

    for class in partition {
        if class.len() == 1 {
            refined.push(class.clone());
        } else {
            refined.extend(split_class(dfa, class, &class_of));
        }
    }

    Partition::from(refined)
}

/// Goes through the states of `class` in ascending order. Each state joins the first group
/// whose earliest member it cannot be distinguished from, or starts a new group.
fn split_class(
    dfa: &Dfa,
    class: &BTreeSet<State>,
    class_of: &Map<&State, usize>,
) -> Vec<BTreeSet<State>> {
    let mut groups: Vec<BTreeSet<State>> = Vec::new();

    for q in class {
        let matching = groups.iter_mut().find(|group| {
            let first = group.first().expect("groups are never empty");
            same_successor_classes(dfa, first, q, class_of)
        });
        match matching {
            Some(group) => {
                group.insert(q.clone());
            }
            None => {
                groups.push(BTreeSet::from([q.clone()]));
            }
        }
    }

    if groups.len() > 1 {
        trace!("split {} into {}", class.show(), groups.show());
    }
    groups
}

/// Returns true if for every symbol, the successors of `p` and `q` lie in the same class.
fn same_successor_classes(dfa: &Dfa, p: &State, q: &State, class_of: &Map<&State, usize>) -> bool {
    dfa.alphabet().iter().all(|a| {
        let class = |state: &State| {
            let successor = dfa
                .successor(state, a)
                .expect("transition function must be complete");
            class_of
                .get(successor)
                .expect("successors of reachable states are reachable")
        };
        class(p) == class(q)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::wiki_dfa;

    fn partition<const N: usize>(classes: [&[&str]; N]) -> Partition<State> {
        Partition::new(
            classes
                .into_iter()
                .map(|class| class.iter().map(|&q| State::from(q))),
        )
    }

    fn ordered(partition: &Partition<State>) -> Vec<BTreeSet<State>> {
        partition.iter().cloned().collect()
    }

    #[test]
    fn single_pass_uses_snapshot() {
        // `p` leaves the class in this pass, `x` moves to `p` and must only be split off in
        // the next pass
        let dfa = DfaBuilder::default()
            .with_states(["p", "q", "x", "y", "f"])
            .with_alphabet(["a"])
            .with_accepting(["f"])
            .with_transitions([
                ("p", "a", "f"),
                ("q", "a", "q"),
                ("x", "a", "p"),
                ("y", "a", "q"),
                ("f", "a", "f"),
            ])
            .into_dfa("p")
            .unwrap();

        let once = refinement_pass(&dfa, &partition([&["f"], &["p", "q", "x", "y"]]));
        assert_eq!(
            ordered(&once),
            ordered(&partition([&["f"], &["p"], &["q", "x", "y"]]))
        );
        assert_eq!(
            ordered(&moore_partition_refinement(&dfa)),
            ordered(&partition([&["f"], &["p"], &["q", "y"], &["x"]]))
        );
    }

    #[test]
    fn splits_of_earlier_classes_apply_in_next_pass() {
        // `{a, b}` is split before `{c, d}` is looked at, `c` and `d` still agree on the old class
        let dfa = DfaBuilder::default()
            .with_states(["a", "b", "c", "d", "f"])
            .with_alphabet(["x"])
            .with_accepting(["f"])
            .with_transitions([
                ("a", "x", "f"),
                ("b", "x", "b"),
                ("c", "x", "a"),
                ("d", "x", "b"),
                ("f", "x", "f"),
            ])
            .into_dfa("a")
            .unwrap();

        let start = partition([&["f"], &["a", "b"], &["c", "d"]]);
        let once = refinement_pass(&dfa, &start);
        assert_eq!(
            ordered(&once),
            ordered(&partition([&["f"], &["a"], &["b"], &["c", "d"]]))
        );
        let twice = refinement_pass(&dfa, &once);
        assert_eq!(
            ordered(&twice),
            ordered(&partition([&["f"], &["a"], &["b"], &["c"], &["d"]]))
        );
    }

    #[test]
    fn wiki_pass_splits_rejecting_class() {
        let dfa = wiki_dfa();
        let start = partition([&["q2", "q3", "q4"], &["q0", "q1", "q5"]]);
        let once = refinement_pass(&dfa, &start);
        assert_eq!(
            once.iter().cloned().collect::<Vec<_>>(),
            partition([&["q2", "q3", "q4"], &["q0", "q1"], &["q5"]])
                .iter()
                .cloned()
                .collect::<Vec<_>>()
        );
        assert_eq!(refinement_pass(&dfa, &once), once);
    }

    #[test]
    fn refinement_needs_several_passes() {
        // a chain into an accepting sink, each pass separates one more state
        let dfa = DfaBuilder::default()
            .with_states(["0", "1", "2", "3"])
            .with_alphabet(["a"])
            .with_accepting(["3"])
            .with_transitions([("0", "a", "1"), ("1", "a", "2"), ("2", "a", "3"), ("3", "a", "3")])
            .into_dfa("0")
            .unwrap();

        let first = refinement_pass(&dfa, &partition([&["3"], &["0", "1", "2"]]));
        assert_eq!(first, partition([&["3"], &["0", "1"], &["2"]]));

        let result = moore_partition_refinement(&dfa);
        assert!(result.is_discrete());
        assert_eq!(result.size(), 4);
    }

    #[test]
    fn first_match_groups_in_discovery_order() {
        // `b` and `d` behave alike, as do `a` and `c`
        let dfa = DfaBuilder::default()
            .with_states(["a", "b", "c", "d", "f"])
            .with_alphabet(["x"])
            .with_accepting(["f"])
            .with_transitions([
                ("a", "x", "f"),
                ("b", "x", "a"),
                ("c", "x", "f"),
                ("d", "x", "c"),
                ("f", "x", "f"),
            ])
            .into_dfa("b")
            .unwrap();

        let result = moore_partition_refinement(&dfa);
        assert_eq!(
            result.iter().cloned().collect::<Vec<_>>(),
            partition([&["f"], &["a", "c"], &["b", "d"]])
                .iter()
                .cloned()
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn single_class_when_everything_accepts() {
        let dfa = DfaBuilder::default()
            .with_states(["p", "q"])
            .with_alphabet(["a"])
            .with_accepting(["p", "q"])
            .with_transitions([("p", "a", "q"), ("q", "a", "p")])
            .into_dfa("p")
            .unwrap();
        assert_eq!(moore_partition_refinement(&dfa), partition([&["p", "q"]]));
    }
}
