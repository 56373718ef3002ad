use tracing::trace;

use crate::{math::Map, prelude::*};

/// Maps every excess state, which is a state that is equivalent to some smaller state, to the
/// representative of its class. The representative of a class is its smallest member.
#[derive(Debug, Clone, Default)]
struct EquivalenceMap(Map<State, State>);

impl EquivalenceMap {
    fn from_partition(partition: &Partition<State>) -> Self {
        let mut map = Map::default();
        for class in partition {
            let mut members = class.iter();
            let Some(representative) = members.next() else {
                continue;
            };
            for excess in members {
                map.insert(excess.clone(), representative.clone());
            }
        }
        Self(map)
    }

    fn representative(&self, state: &State) -> Option<&State> {
        self.0.get(state)
    }

    fn is_excess(&self, state: &State) -> bool {
        self.0.contains_key(state)
    }
}

/// Collapses every class of `partition` onto its representative. Excess states are removed
/// along with their outgoing transitions and accepting status, transitions into excess states
/// are redirected to the representative and the initial state is replaced if it is excess.
///
/// The classes of `partition` have to be classes of equivalent states that cover all states
/// of `dfa`.
pub(super) fn collapse(dfa: &mut Dfa, partition: &Partition<State>) {
    let equivalence = EquivalenceMap::from_partition(partition);
    if equivalence.0.is_empty() {
        trace!("no equivalent states to collapse");
        return;
    }
    trace!("collapsing classes {}", partition.show());

    dfa.states.retain(|q| !equivalence.is_excess(q));
    dfa.transitions.retain(|q, _| !equivalence.is_excess(q));

    for row in dfa.transitions.values_mut() {
        for target in row.values_mut() {
            if let Some(representative) = equivalence.representative(target) {
                *target = representative.clone();
            }
        }
    }

    // a class either consists of accepting states only or of rejecting states only, so
    // every dropped accepting state has an accepting representative
    dfa.accepting.retain(|q| !equivalence.is_excess(q));

    if let Some(representative) = equivalence.representative(&dfa.initial) {
        trace!("replacing initial state {} by {representative}", dfa.initial);
        dfa.initial = representative.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::wiki_dfa;

    #[test]
    fn representatives_are_smallest_members() {
        let partition = Partition::new([
            vec![State::from("q4"), "q2".into(), "q3".into()],
            vec!["q1".into(), "q0".into()],
            vec!["q5".into()],
        ]);
        let map = EquivalenceMap::from_partition(&partition);
        assert_eq!(map.0.len(), 3);
        assert_eq!(
            map.representative(&"q4".into()).map(State::as_str),
            Some("q2")
        );
        assert_eq!(
            map.representative(&"q1".into()).map(State::as_str),
            Some("q0")
        );
        assert!(!map.is_excess(&"q5".into()));
        assert!(!map.is_excess(&"q2".into()));
    }

    #[test]
    fn collapse_redirects_transitions() {
        let mut dfa = wiki_dfa();
        let partition = Partition::new([
            vec![State::from("q0"), "q1".into()],
            vec!["q2".into(), "q3".into(), "q4".into()],
            vec!["q5".into()],
        ]);
        collapse(&mut dfa, &partition);

        assert_eq!(dfa.size(), 3);
        assert_eq!(dfa.transitions().count(), 6);
        assert!(dfa
            .transitions()
            .all(|(_, _, p)| dfa.states().contains(p)));
        assert_eq!(dfa.successor("q0", "a").map(State::as_str), Some("q0"));
        assert_eq!(dfa.successor("q2", "a").map(State::as_str), Some("q2"));
        assert_eq!(
            dfa.accepting_states().iter().map(State::as_str).collect::<Vec<_>>(),
            vec!["q2"]
        );
    }

    #[test]
    fn discrete_partition_changes_nothing() {
        let mut dfa = wiki_dfa();
        let partition = Partition::new(dfa.states().iter().map(|q| [q.clone()]));
        collapse(&mut dfa, &partition);
        assert_eq!(dfa, wiki_dfa());
    }
}
