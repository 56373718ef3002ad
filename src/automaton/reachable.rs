use std::collections::{BTreeSet, VecDeque};

use tracing::trace;

use crate::{math::Set, prelude::*};

/// Computes the set of states that can be reached from the initial state of `dfa` by reading
/// some finite word. The computation proceeds in rounds: every round follows all transitions
/// leaving the states that were discovered in the previous round, and it stops as soon as a
/// round does not discover anything new. Transitions that are missing are simply not followed.
pub fn reachable_states(dfa: &Dfa) -> BTreeSet<State> {
    let mut reachable = BTreeSet::from([dfa.initial().clone()]);
    let mut frontier = reachable.clone();
    let mut round = 0;

    while !frontier.is_empty() {
        round += 1;
        let mut next = BTreeSet::new();
        for q in &frontier {
            for a in dfa.alphabet() {
                if let Some(p) = dfa.successor(q, a) {
                    if reachable.insert(p.clone()) {
                        next.insert(p.clone());
                    }
                }
            }
        }
        trace!("round {round} discovered {}", next.show());
        frontier = next;
    }

    reachable
}

/// Type alias for a minimal representative of a state which is its length-lexicographically minimal
/// access sequence and the state itself.
pub type MinimalRepresentative<'a> = (Vec<Symbol>, &'a State);

/// Iterator that returns the minimal representatives of the states of a [`Dfa`]. A minimal representative
/// for a state `q` is the length-lexicographically minimal word with which `q` can be reached from a given
/// state. States are produced in the order of their minimal representatives.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<'a> {
    dfa: &'a Dfa,
    seen: Set<&'a State>,
    queue: VecDeque<MinimalRepresentative<'a>>,
}

impl<'a> MinimalRepresentatives<'a> {
    /// Starts the search for minimal representatives in `origin`.
    pub fn new(dfa: &'a Dfa, origin: &'a State) -> Self {
        let seen = Set::from_iter([origin]);
        let queue = [(vec![], origin)].into_iter().collect();
        Self { dfa, seen, queue }
    }
}

impl<'a> Iterator for MinimalRepresentatives<'a> {
    type Item = MinimalRepresentative<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (access, q) = self.queue.pop_front()?;
        for a in self.dfa.alphabet() {
            if let Some(p) = self.dfa.successor(q, a) {
                if self.seen.insert(p) {
                    let mut extended = access.clone();
                    extended.push(a.clone());
                    self.queue.push_back((extended, p));
                }
            }
        }
        Some((access, q))
    }
}

impl Dfa {
    /// Returns the states that are reachable from the initial state, see [`reachable_states`].
    pub fn reachable_states(&self) -> BTreeSet<State> {
        reachable_states(self)
    }

    /// Returns an iterator over the reachable states together with their minimal representatives,
    /// beginning with the initial state and the empty word.
    pub fn minimal_representatives(&self) -> MinimalRepresentatives<'_> {
        MinimalRepresentatives::new(self, &self.initial)
    }

    /// Returns an iterator over the states reachable from `origin` together with their minimal
    /// representatives. Returns `None` if `origin` is not a state.
    pub fn minimal_representatives_from(
        &self,
        origin: impl AsRef<str>,
    ) -> Option<MinimalRepresentatives<'_>> {
        let origin = self.states.get(origin.as_ref())?;
        Some(MinimalRepresentatives::new(self, origin))
    }

    /// Removes all states that are not reachable from the initial state, along with the
    /// transitions leaving them and their accepting status.
    pub fn trim_unreachable(&mut self) {
        let reachable = self.reachable_states();
        if reachable.len() < self.states.len() {
            tracing::debug!(
                "discarding unreachable states {}",
                self.states.difference(&reachable).collect::<Vec<_>>().show()
            );
        }
        self.transitions.retain(|q, _| reachable.contains(q));
        self.accepting.retain(|q| reachable.contains(q));
        self.states = reachable;
    }
}
