use std::io::BufRead;

use tracing::{debug, trace};

use crate::prelude::*;

use super::DefinitionError;

const HEADER: [&str; 4] = [
    "list of states",
    "list of alphabet symbols",
    "list of accepting states",
    "initial state",
];

/// Parses an automaton from its definition, see the [module documentation](super) for the format.
/// The resulting automaton refers only to declared states and symbols and is deterministic, but
/// its transition function may be incomplete.
pub fn parse_definition(input: &str) -> Result<Dfa, DefinitionError> {
    let mut lines = input.lines().map(str::trim).enumerate().map(|(i, l)| (i + 1, l));

    let mut header = Vec::with_capacity(HEADER.len());
    for expected in HEADER {
        match lines.next() {
            Some(line) => header.push(line),
            None => {
                return Err(DefinitionError::MissingLine {
                    line: header.len() + 1,
                    expected,
                })
            }
        }
    }

    let states = identifiers(header[0])?;
    let alphabet = identifiers(header[1])?;
    let accepting = identifiers(header[2])?;
    let initial = match identifiers(header[3])?.as_slice() {
        [initial] => *initial,
        _ => {
            return Err(malformed(
                header[3],
                "expected exactly one initial state",
            ))
        }
    };

    let mut builder = DfaBuilder::default()
        .with_states(states)
        .with_alphabet(alphabet)
        .with_accepting(accepting);

    for line in lines.by_ref() {
        if line.1.is_empty() {
            trace!("blank line {} ends the transitions", line.0);
            break;
        }
        let (source, symbol, target) = transition(line)?;
        builder.add_transition(source, symbol, target);
    }
    if lines.next().is_some() {
        debug!("ignoring input after the first blank line");
    }

    Ok(builder.into_dfa(initial)?)
}

/// Reads the whole of `reader` and parses it with [`parse_definition`].
pub fn read_definition<R: BufRead>(mut reader: R) -> Result<Dfa, DefinitionError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_definition(&input)
}

fn malformed((line, content): (usize, &str), reason: &'static str) -> DefinitionError {
    DefinitionError::MalformedLine {
        line,
        content: content.to_string(),
        reason,
    }
}

/// Splits a comma separated list, an empty line is the empty list.
fn identifiers((line, content): (usize, &str)) -> Result<Vec<&str>, DefinitionError> {
    if content.is_empty() {
        return Ok(vec![]);
    }
    content
        .split(',')
        .map(str::trim)
        .map(|id| {
            if id.is_empty() {
                Err(malformed((line, content), "empty identifier"))
            } else {
                Ok(id)
            }
        })
        .collect()
}

/// Parses a line of the form `state,symbol->state`.
fn transition(line: (usize, &str)) -> Result<(&str, &str, &str), DefinitionError> {
    let (left, target) = line
        .1
        .split_once("->")
        .ok_or_else(|| malformed(line, "missing `->`"))?;
    let target = target.trim();
    if target.is_empty() || target.contains(',') || target.contains("->") {
        return Err(malformed(line, "expected a single target state"));
    }
    match identifiers((line.0, left.trim()))?.as_slice() {
        [source, symbol] => Ok((*source, *symbol, target)),
        _ => Err(malformed(line, "expected `state,symbol` before `->`")),
    }
}
