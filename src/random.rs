use tracing::trace;

use crate::prelude::*;

/// Generate a random automaton with `size` states by randomly drawing transitions, using a fresh
/// random number generator. See [`generate_random_dfa_with`].
pub fn generate_random_dfa(symbols: usize, size: usize) -> Dfa {
    generate_random_dfa_with(&mut fastrand::Rng::new(), symbols, size)
}

/// Generate a random automaton of size `size` over an alphabet of `symbols` symbols, drawing all
/// randomness from `rng`. The algorithm is as follows:
/// 1. Create the states `q0` to `q{size-1}` and the symbols `a`, `b`, ...
/// 2. For each state, for each symbol draw a target state and add the corresponding transition.
/// 3. Decide for each state with probability one half whether it is accepting.
///
/// The initial state is `q0`, the result is complete but may have unreachable states. Symbols
/// beyond `z` are named `s26`, `s27` and so on.
pub fn generate_random_dfa_with(rng: &mut fastrand::Rng, symbols: usize, size: usize) -> Dfa {
    assert!(size > 0, "an automaton needs at least one state");
    let states: Vec<String> = (0..size).map(|i| format!("q{i}")).collect();
    let alphabet: Vec<String> = (0..symbols).map(symbol_name).collect();

    let mut builder = DfaBuilder::default()
        .with_states(states.iter().map(String::as_str))
        .with_alphabet(alphabet.iter().map(String::as_str))
        .with_accepting(
            states
                .iter()
                .filter(|_| rng.bool())
                .map(String::as_str),
        );
    for q in &states {
        for a in &alphabet {
            builder.add_transition(q.as_str(), a.as_str(), states[rng.usize(..size)].as_str());
        }
    }

    let dfa = builder
        .into_dfa(states[0].as_str())
        .expect("generated automaton is well formed");
    trace!("generated random automaton\n{}", dfa.to_definition());
    dfa
}

/// Draws a word of length at most `max_len` over the alphabet of `dfa`.
pub fn random_word(rng: &mut fastrand::Rng, dfa: &Dfa, max_len: usize) -> Vec<Symbol> {
    let alphabet: Vec<&Symbol> = dfa.alphabet().iter().collect();
    if alphabet.is_empty() {
        return vec![];
    }
    (0..rng.usize(..=max_len))
        .map(|_| alphabet[rng.usize(..alphabet.len())].clone())
        .collect()
}

fn symbol_name(i: usize) -> String {
    match u8::try_from(i) {
        Ok(i) if i < 26 => char::from(b'a' + i).to_string(),
        _ => format!("s{i}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_automata_are_complete() {
        let mut rng = fastrand::Rng::with_seed(42);
        for size in 1..20 {
            let dfa = generate_random_dfa_with(&mut rng, 3, size);
            assert_eq!(dfa.size(), size);
            assert_eq!(
                dfa.alphabet().iter().map(Symbol::as_str).collect::<Vec<_>>(),
                vec!["a", "b", "c"]
            );
            assert!(dfa.is_complete());
            assert_eq!(dfa.initial().as_str(), "q0");
        }
    }

    #[test]
    fn random_words_agree_after_minimization() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let dfa = generate_random_dfa_with(&mut rng, 2, 12);
            let minimized = dfa.clone().minimize().unwrap();
            for _ in 0..100 {
                let word = random_word(&mut rng, &dfa, 15);
                assert_eq!(dfa.accepts(&word), minimized.accepts(&word));
            }
        }
    }

    #[test]
    fn symbol_names() {
        assert_eq!(symbol_name(0), "a");
        assert_eq!(symbol_name(25), "z");
        assert_eq!(symbol_name(26), "s26");
        assert_eq!(symbol_name(300), "s300");
    }
}
