pub(crate) mod partition_refinement;

mod collapse;

use thiserror::Error;
use tracing::debug;

use crate::prelude::*;

/// Errors that prevent an automaton from being minimized.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MinimizationError {
    /// The transition function is not complete.
    #[error("no transition from state `{state}` on symbol `{symbol}`")]
    IncompleteTransition {
        /// The state that lacks the transition.
        state: State,
        /// The symbol on which the transition is missing.
        symbol: Symbol,
    },
}

impl Dfa {
    /// Returns the unique minimal automaton that accepts the same language as `self`. States
    /// that are not reachable are removed, and each class of equivalent states is collapsed onto
    /// its smallest member. Fails if the transition function is not complete.
    ///
    /// # Example
    /// ```
    /// use mindfa::prelude::*;
    ///
    /// let dfa = DfaBuilder::default()
    ///     .with_states(["p", "q", "r"])
    ///     .with_alphabet(["a"])
    ///     .with_accepting(["q", "r"])
    ///     .with_transitions([("p", "a", "q"), ("q", "a", "r"), ("r", "a", "q")])
    ///     .into_dfa("p")
    ///     .unwrap();
    /// let minimized = dfa.minimize().unwrap();
    /// assert_eq!(minimized.size(), 2);
    /// assert_eq!(minimized.successor("q", "a").map(State::as_str), Some("q"));
    /// ```
    pub fn minimize(mut self) -> Result<Dfa, MinimizationError> {
        self.minimize_in_place()?;
        Ok(self)
    }

    /// Minimizes `self` in place, see [`Self::minimize`]. If an error is returned, `self` has
    /// not been modified.
    pub fn minimize_in_place(&mut self) -> Result<(), MinimizationError> {
        self.ensure_complete()?;
        let before = self.size();

        self.trim_unreachable();
        let reachable = self.size();

        let partition = partition_refinement::moore_partition_refinement(self);
        collapse::collapse(self, &partition);

        debug!(
            "minimized automaton from {before} to {} states ({} unreachable)",
            self.size(),
            before - reachable
        );
        Ok(())
    }

    /// Computes the classes of equivalent states among the states that are reachable. Two states
    /// are equivalent if and only if every word is either accepted from both of them or from
    /// neither. Fails if the transition function is not complete.
    pub fn equivalence_classes(&self) -> Result<Partition<State>, MinimizationError> {
        self.ensure_complete()?;
        if self.reachable_states().len() == self.size() {
            Ok(partition_refinement::moore_partition_refinement(self))
        } else {
            let mut trimmed = self.clone();
            trimmed.trim_unreachable();
            Ok(partition_refinement::moore_partition_refinement(&trimmed))
        }
    }
}
