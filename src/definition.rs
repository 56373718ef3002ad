//! The definition format describes an automaton line by line:
//! 1. the states, separated by `,`
//! 2. the alphabet symbols, separated by `,`
//! 3. the accepting states, separated by `,` (an empty line if there are none)
//! 4. the initial state
//! 5. and every following line: a transition of the form `state,symbol->state`
//!
//! The transitions end with the first blank line or with the end of the input. For example
//! ```text
//! s1,s2,s3
//! a,b
//! s2,s3
//! s1
//! s1,a->s2
//! s1,b->s1
//! s2,a->s1
//! s2,b->s1
//! s3,a->s2
//! s3,b->s3
//! ```
use thiserror::Error;

use crate::prelude::*;

mod input;
pub use input::{parse_definition, read_definition};

mod output;
pub use output::WriteDefinition;

/// Errors that can occur while reading an automaton definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The input ended before all header lines were read.
    #[error("line {line} is missing, expected the {expected}")]
    MissingLine {
        /// The number of the missing line, counting from 1.
        line: usize,
        /// Description of what the line should contain.
        expected: &'static str,
    },
    /// A line does not have the expected shape.
    #[error("line {line} is malformed ({reason}): \"{content}\"")]
    MalformedLine {
        /// The number of the line, counting from 1.
        line: usize,
        /// The content of the line.
        content: String,
        /// What is wrong with the line.
        reason: &'static str,
    },
    /// The lines are well formed but do not describe a valid automaton.
    #[error("invalid automaton: {0}")]
    Automaton(#[from] AutomatonError),
    /// The definition could not be read.
    #[error("could not read definition: {0}")]
    Io(#[from] std::io::Error),
}

impl std::str::FromStr for Dfa {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_definition(s)
    }
}

impl std::fmt::Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_definition(f)
    }
}
