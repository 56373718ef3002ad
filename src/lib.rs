//! Minimization of deterministic finite automata (DFA).
//!
//! A [`Dfa`] consists of a finite set of states, an alphabet, a set of accepting states, a designated initial state and a transition function that maps every pair of state and symbol to a successor state. States and symbols are plain string labels, and all collections are kept in sorted label order, so every operation of this crate is deterministic.
//!
//! Minimization runs in three phases. First the states that cannot be reached from the initial state are discarded (see [`automaton::reachable_states`]). Then the remaining states are split into classes of indistinguishable states, starting from the split into accepting and rejecting states and refining until the [`math::Partition`] is stable. Finally every class is collapsed onto its smallest member, the representative, and all transitions, accepting states and the initial state are redirected accordingly.
//!
//! Automata are usually read from and written to a simple line based format, which is handled by the [`definition`] module:
//! ```
//! use mindfa::prelude::*;
//!
//! let dfa: Dfa = "s1,s2,s3\na,b\ns2,s3\ns1\ns1,a->s2\ns1,b->s1\ns2,a->s1\ns2,b->s1\ns3,a->s2\ns3,b->s3"
//!     .parse()
//!     .unwrap();
//! let minimized = dfa.minimize().unwrap();
//! assert_eq!(minimized.size(), 2);
//! assert_eq!(
//!     minimized.to_definition(),
//!     "s1,s2\na,b\ns2\ns1\ns1,a->s2\ns1,b->s1\ns2,a->s1\ns2,b->s1\n"
//! );
//! ```
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use mindfa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::Symbol,
        automaton::{AutomatonError, Dfa, DfaBuilder, MinimalRepresentatives, State},
        definition::{parse_definition, read_definition, DefinitionError, WriteDefinition},
        math,
        math::{Bijection, Partition},
        minimization::MinimizationError,
        Show,
    };
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

/// Module that contains the definition of alphabet symbols.
pub mod alphabet;

/// Defines deterministic finite automata, how they are built and queried.
pub mod automaton;
pub use automaton::{Dfa, State};

/// Contains the partition refinement algorithm and the collapsing of equivalent states.
pub mod minimization;

/// Reading and writing automata in the line based definition format.
pub mod definition;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;

use itertools::Itertools;
use std::collections::BTreeSet;

/// Helper trait which can be used to display states, symbols, words and the like.
pub trait Show {
    /// Returns a [`String`] representation of `self`.
    fn show(&self) -> String;

    /// Show a collection of the thing, for a word this might mean concatenating them, for a set
    /// of states it is usually a comma separated list in braces.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for usize {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for BTreeSet<S> {
    fn show(&self) -> String {
        format!("{{{}}}", self.iter().map(|x| x.show()).join(", "))
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}
