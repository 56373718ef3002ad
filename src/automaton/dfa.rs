use std::collections::{BTreeSet, VecDeque};

use owo_colors::OwoColorize;

use crate::{math::Set, prelude::*};

impl Dfa {
    /// Reads `word` starting in the initial state and returns the state that is reached. If some
    /// symbol of the word has no transition (in particular if it is not in the alphabet), the
    /// run is unsuccessful and `None` is returned.
    pub fn run<I, S>(&self, word: I) -> Option<&State>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        word.into_iter()
            .try_fold(&self.initial, |q, a| self.successor(q, a))
    }

    /// Returns true if and only if the run on `word` is successful and ends in an accepting state.
    pub fn accepts<I, S>(&self, word: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.run(word).is_some_and(|q| self.is_accepting(q))
    }

    /// Returns the first pair of state and symbol (in sorted order) for which no transition
    /// exists, or `None` if the transition function is complete.
    pub fn missing_transition(&self) -> Option<(&State, &Symbol)> {
        self.states.iter().find_map(|q| {
            self.alphabet
                .iter()
                .find(|a| self.successor(q, a).is_none())
                .map(|a| (q, a))
        })
    }

    /// Returns true if every state has a transition on every symbol of the alphabet.
    pub fn is_complete(&self) -> bool {
        self.missing_transition().is_none()
    }

    /// Verifies that the transition function is complete, which is what minimization requires.
    pub fn ensure_complete(&self) -> Result<(), MinimizationError> {
        match self.missing_transition() {
            None => Ok(()),
            Some((state, symbol)) => Err(MinimizationError::IncompleteTransition {
                state: state.clone(),
                symbol: symbol.clone(),
            }),
        }
    }

    /// Tries to construct a shortest word that is accepted. If no such word exists, the function
    /// returns `None`, meaning the accepted language is empty.
    pub fn give_word(&self) -> Option<Vec<Symbol>> {
        self.minimal_representatives()
            .find_map(|(mr, q)| self.is_accepting(q).then_some(mr))
    }

    /// Returns true if and only if the accepted language is empty.
    pub fn is_empty_language(&self) -> bool {
        self.give_word().is_none()
    }

    /// Attempts to separate the state `left` from the state `right` by finding a shortest word which
    /// is accepted from exactly one of them. Returns `None` if the two states are equivalent or if
    /// one of them does not exist.
    pub fn separate(&self, left: impl AsRef<str>, right: impl AsRef<str>) -> Option<Vec<Symbol>> {
        let q = self.states.get(left.as_ref())?;
        let p = self.states.get(right.as_ref())?;
        if p == q {
            return None;
        }
        separating_word((self, q), (self, p))
    }

    /// Computes a shortest word that is accepted by exactly one of `self` and `other`. A missing
    /// transition behaves like a transition into a rejecting sink, and the alphabets of the two
    /// automata are joined.
    pub fn distinguishing_word(&self, other: &Dfa) -> Option<Vec<Symbol>> {
        separating_word((self, &self.initial), (other, &other.initial))
    }

    /// Checks whether `self` is equivalent to `other`, i.e. whether the two DFAs accept
    /// the same language. This is done by searching the reachable part of the product for a
    /// pair of states on which the two automata disagree.
    pub fn equivalent(&self, other: &Dfa) -> bool {
        self.distinguishing_word(other).is_none()
    }

    /// Tries to find an isomorphism between the reachable parts of `self` and `other`, that is a
    /// bijection between their states which maps the initial state to the initial state, preserves
    /// acceptance and commutes with the transitions. Both automata need to have the same alphabet
    /// and may not have unreachable states.
    pub fn isomorphism(&self, other: &Dfa) -> Option<Bijection<State, State>> {
        if self.size() != other.size() || self.alphabet != other.alphabet {
            return None;
        }

        let mut bijection = Bijection::new();
        bijection.insert(self.initial.clone(), other.initial.clone());
        let mut queue = VecDeque::from([(&self.initial, &other.initial)]);

        while let Some((q, p)) = queue.pop_front() {
            if self.is_accepting(q) != other.is_accepting(p) {
                return None;
            }
            for a in &self.alphabet {
                match (self.successor(q, a), other.successor(p, a)) {
                    (None, None) => {}
                    (Some(q2), Some(p2)) => {
                        let known = (
                            bijection.get_by_left(q2).cloned(),
                            bijection.get_by_right(p2).cloned(),
                        );
                        match known {
                            (None, None) => {
                                bijection.insert(q2.clone(), p2.clone());
                                queue.push_back((q2, p2));
                            }
                            (Some(image), Some(preimage)) if &image == p2 && &preimage == q2 => {}
                            _ => return None,
                        }
                    }
                    _ => return None,
                }
            }
        }

        (bijection.len() == self.size()).then_some(bijection)
    }

    /// Returns true if [`Self::isomorphism`] finds an isomorphism.
    pub fn is_isomorphic(&self, other: &Dfa) -> bool {
        self.isomorphism(other).is_some()
    }

    /// Returns a string representation of the transition table. The initial state is marked with
    /// an arrow and accepting states are highlighted.
    pub fn build_transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet.iter().map(|a| a.show())),
        );
        for q in &self.states {
            let marker = if q == &self.initial { "→ " } else { "" };
            let name = q.show();
            let label = if self.is_accepting(q) {
                format!("{marker}{}", name.bold().green())
            } else {
                format!("{marker}{name}")
            };
            let mut row = vec![label];
            for a in &self.alphabet {
                match self.successor(q, a) {
                    Some(p) => row.push(p.show()),
                    None => row.push("-".to_string()),
                }
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

/// Breadth-first search through the product of two automata, starting in the given pair of states.
/// Returns the access word of the first pair that disagrees on acceptance. A `None` component
/// stands for the rejecting sink that missing transitions lead into.
fn separating_word(left: (&Dfa, &State), right: (&Dfa, &State)) -> Option<Vec<Symbol>> {
    let ((l, q), (r, p)) = (left, right);
    let alphabet: BTreeSet<&Symbol> = l.alphabet.iter().chain(r.alphabet.iter()).collect();
    let accepting = |dfa: &Dfa, state: Option<&State>| state.is_some_and(|s| dfa.is_accepting(s));

    let mut seen: Set<(Option<&State>, Option<&State>)> = Set::default();
    seen.insert((Some(q), Some(p)));
    let mut queue = VecDeque::from([(Vec::new(), Some(q), Some(p))]);

    while let Some((word, q, p)) = queue.pop_front() {
        if accepting(l, q) != accepting(r, p) {
            return Some(word);
        }
        for &a in &alphabet {
            let next = (
                q.and_then(|q| l.successor(q, a)),
                p.and_then(|p| r.successor(p, a)),
            );
            if seen.insert(next) {
                let mut extended = word.clone();
                extended.push(a.clone());
                queue.push_back((extended, next.0, next.1));
            }
        }
    }
    None
}
