use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::{alphabet::impl_label, prelude::*};

mod builder;
pub use builder::DfaBuilder;

mod dfa;

mod reachable;
pub use reachable::{reachable_states, MinimalRepresentative, MinimalRepresentatives};

/// A state of an automaton. States carry no structure besides their label, two states are
/// the same if and only if their labels are the same.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(String);
impl_label!(State);

impl Show for State {
    fn show(&self) -> String {
        self.0.clone()
    }
}

/// Errors that are raised when the components of a [`Dfa`] do not fit together.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AutomatonError {
    /// A state is used that was never declared.
    #[error("{role} state `{state}` is not a declared state")]
    UnknownState {
        /// The offending state.
        state: State,
        /// Where the state was used, for example `initial` or `accepting`.
        role: &'static str,
    },
    /// A transition is labeled with a symbol that is not in the alphabet.
    #[error("symbol `{symbol}` of the transition from `{state}` is not in the alphabet")]
    UnknownSymbol {
        /// The source of the transition.
        state: State,
        /// The offending symbol.
        symbol: Symbol,
    },
    /// Two transitions with the same source and symbol lead to different targets.
    #[error("transition from `{state}` on `{symbol}` leads to both `{first}` and `{second}`")]
    ConflictingTransition {
        /// The common source.
        state: State,
        /// The common symbol.
        symbol: Symbol,
        /// The target of the transition that was given first.
        first: State,
        /// The target of the conflicting transition.
        second: State,
    },
}

/// A deterministic finite automaton. It accepts a finite word if reading the word from the
/// initial state leads to an accepting state.
///
/// All components are kept in sorted order, so iterating over states, symbols or transitions
/// is deterministic. A `Dfa` may have an incomplete transition function, but it is always
/// deterministic and only refers to declared states and symbols, see [`DfaBuilder`].
#[derive(Clone, PartialEq, Eq)]
pub struct Dfa {
    pub(crate) states: BTreeSet<State>,
    pub(crate) alphabet: BTreeSet<Symbol>,
    pub(crate) accepting: BTreeSet<State>,
    pub(crate) initial: State,
    pub(crate) transitions: BTreeMap<State, BTreeMap<Symbol, State>>,
}

impl Dfa {
    /// Returns a [`DfaBuilder`], which is the way to construct a new automaton.
    pub fn builder() -> DfaBuilder {
        DfaBuilder::default()
    }

    /// Returns the set of states.
    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    /// Returns the alphabet.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    /// Returns the set of accepting states.
    pub fn accepting_states(&self) -> &BTreeSet<State> {
        &self.accepting
    }

    /// Returns an iterator over all states that are not accepting.
    pub fn rejecting_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.difference(&self.accepting)
    }

    /// Returns the initial state.
    pub fn initial(&self) -> &State {
        &self.initial
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns true if `state` is an accepting state.
    pub fn is_accepting(&self, state: impl AsRef<str>) -> bool {
        self.accepting.contains(state.as_ref())
    }

    /// Returns the state that is reached from `state` on `symbol`, or `None` if no such
    /// transition exists.
    pub fn successor(&self, state: impl AsRef<str>, symbol: impl AsRef<str>) -> Option<&State> {
        self.transitions.get(state.as_ref())?.get(symbol.as_ref())
    }

    /// Iterates over all transitions as triples of source, symbol and target, sorted by source
    /// and then by symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, &Symbol, &State)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(q, row)| row.iter().map(move |(a, p)| (q, a, p)))
    }
}

impl std::fmt::Debug for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DFA with initial state {} and accepting states {}\n{}",
            self.initial,
            self.accepting.show(),
            self.build_transition_table()
        )
    }
}
