use std::{
    borrow::Borrow,
    collections::{btree_map::Entry, BTreeMap, BTreeSet},
};

use tracing::trace;

use crate::prelude::*;

/// Helper struct for the construction of a [`Dfa`]. It collects states, symbols, accepting
/// states and transitions, and checks that they fit together once [`DfaBuilder::into_dfa`]
/// is called.
///
/// # Example
///
/// We want to create a DFA with two states `p` and `q` over the alphabet `{a, b}`, which
/// accepts all words that end in `b`:
/// ```
/// use mindfa::prelude::*;
///
/// let dfa = DfaBuilder::default()
///     .with_states(["p", "q"])
///     .with_alphabet(["a", "b"])
///     .with_accepting(["q"])
///     .with_transitions([("p", "a", "p"), ("p", "b", "q"), ("q", "a", "p"), ("q", "b", "q")])
///     .into_dfa("p") // p is the initial state
///     .unwrap();
/// assert!(dfa.accepts(["a", "b"]));
/// assert!(!dfa.accepts(["b", "a"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DfaBuilder {
    states: BTreeSet<State>,
    symbols: BTreeSet<Symbol>,
    accepting: Vec<State>,
    transitions: Vec<(State, Symbol, State)>,
}

impl DfaBuilder {
    /// Declares the given states.
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Borrow<str>,
    {
        self.states
            .extend(states.into_iter().map(|q| State::from(q.borrow())));
        self
    }

    /// Declares the given alphabet symbols.
    pub fn with_alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Borrow<str>,
    {
        self.symbols
            .extend(symbols.into_iter().map(|a| Symbol::from(a.borrow())));
        self
    }

    /// Marks the given states as accepting. They have to be declared through
    /// [`Self::with_states`] as well.
    pub fn with_accepting<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Borrow<str>,
    {
        self.accepting
            .extend(states.into_iter().map(|q| State::from(q.borrow())));
        self
    }

    /// Adds a single transition from `source` on `symbol` to `target`.
    pub fn add_transition(
        &mut self,
        source: impl Borrow<str>,
        symbol: impl Borrow<str>,
        target: impl Borrow<str>,
    ) {
        self.transitions.push((
            State::from(source.borrow()),
            Symbol::from(symbol.borrow()),
            State::from(target.borrow()),
        ));
    }

    /// Adds the given transitions, which are triples of source, symbol and target.
    pub fn with_transitions<I, Q, A, P>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (Q, A, P)>,
        Q: Borrow<str>,
        A: Borrow<str>,
        P: Borrow<str>,
    {
        for (q, a, p) in transitions {
            self.add_transition(q, a, p);
        }
        self
    }

    /// Builds the [`Dfa`] with the given `initial` state. Fails if some state or symbol is used
    /// without being declared, or if two transitions leave the same state on the same symbol
    /// towards different targets. The transition function may be incomplete.
    pub fn into_dfa(self, initial: impl Borrow<str>) -> Result<Dfa, AutomatonError> {
        let Self {
            states,
            symbols,
            accepting,
            transitions,
        } = self;

        let known = |state: State, role: &'static str| {
            if states.contains(&state) {
                Ok(state)
            } else {
                Err(AutomatonError::UnknownState { state, role })
            }
        };

        let initial = known(State::from(initial.borrow()), "initial")?;
        let accepting = accepting
            .into_iter()
            .map(|q| known(q, "accepting"))
            .collect::<Result<BTreeSet<_>, _>>()?;

        let mut table: BTreeMap<State, BTreeMap<Symbol, State>> = BTreeMap::new();
        for (source, symbol, target) in transitions {
            let source = known(source, "source")?;
            let target = known(target, "target")?;
            if !symbols.contains(&symbol) {
                return Err(AutomatonError::UnknownSymbol {
                    state: source,
                    symbol,
                });
            }

            let row = table.entry(source.clone()).or_default();
            match row.entry(symbol) {
                Entry::Vacant(e) => {
                    e.insert(target);
                }
                Entry::Occupied(e) if e.get() == &target => {
                    trace!("ignoring repeated transition {source},{}->{target}", e.key());
                }
                Entry::Occupied(e) => {
                    let (symbol, first) = e.remove_entry();
                    return Err(AutomatonError::ConflictingTransition {
                        state: source,
                        symbol,
                        first,
                        second: target,
                    });
                }
            }
        }

        Ok(Dfa {
            states,
            alphabet: symbols,
            accepting,
            initial,
            transitions: table,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn two_states() -> DfaBuilder {
        DfaBuilder::default()
            .with_states(["p", "q"])
            .with_alphabet(["a"])
    }

    #[test]
    fn builds_sorted_components() {
        let dfa = DfaBuilder::default()
            .with_states(["q", "p"])
            .with_alphabet(["b", "a"])
            .with_accepting(["q"])
            .with_transitions([("q", "b", "p"), ("p", "a", "q"), ("p", "a", "q")])
            .into_dfa("p")
            .unwrap();

        assert_eq!(
            dfa.states().iter().map(State::as_str).collect::<Vec<_>>(),
            vec!["p", "q"]
        );
        assert_eq!(dfa.initial().as_str(), "p");
        assert!(dfa.is_accepting("q"));
        assert_eq!(dfa.rejecting_states().count(), 1);
        assert_eq!(dfa.transitions().count(), 2);
        assert_eq!(dfa.successor("p", "a").map(State::as_str), Some("q"));
        assert_eq!(dfa.successor("q", "a"), None);
    }

    #[test]
    fn rejects_undeclared_states() {
        assert_eq!(
            two_states().into_dfa("r"),
            Err(AutomatonError::UnknownState {
                state: "r".into(),
                role: "initial"
            })
        );
        assert!(matches!(
            two_states().with_accepting(["r"]).into_dfa("p"),
            Err(AutomatonError::UnknownState { role: "accepting", .. })
        ));
        assert!(matches!(
            two_states()
                .with_transitions([("p", "a", "r")])
                .into_dfa("p"),
            Err(AutomatonError::UnknownState { role: "target", .. })
        ));
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(matches!(
            two_states()
                .with_transitions([("p", "b", "q")])
                .into_dfa("p"),
            Err(AutomatonError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn rejects_nondeterminism() {
        let err = two_states()
            .with_transitions([("p", "a", "q"), ("p", "a", "p")])
            .into_dfa("p")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "transition from `p` on `a` leads to both `q` and `p`"
        );
    }
}
