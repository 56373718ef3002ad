use std::{
    collections::BTreeSet,
    fmt::{Result, Write},
};

use itertools::Itertools;
use tracing::trace;

use crate::prelude::*;

/// Writes an automaton in the definition format. Every component is written in sorted order,
/// so the output only depends on the automaton and not on how it was constructed.
pub trait WriteDefinition {
    /// Writes the complete definition to `w`, every line is terminated by a newline.
    fn write_definition<W: Write>(&self, w: &mut W) -> Result;

    /// Returns the definition as a [`String`].
    fn to_definition(&self) -> String {
        let mut w = String::new();
        self.write_definition(&mut w)
            .expect("writing to a String cannot fail");
        trace!("produced definition\n{}", w);
        w
    }
}

fn write_list<W: Write, S: std::fmt::Display>(w: &mut W, set: &BTreeSet<S>) -> Result {
    writeln!(w, "{}", set.iter().format(","))
}

impl WriteDefinition for Dfa {
    fn write_definition<W: Write>(&self, w: &mut W) -> Result {
        write_list(w, self.states())?;
        write_list(w, self.alphabet())?;
        write_list(w, self.accepting_states())?;
        writeln!(w, "{}", self.initial())?;
        for (q, a, p) in self.transitions() {
            writeln!(w, "{q},{a}->{p}")?;
        }
        Ok(())
    }
}
