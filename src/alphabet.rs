use std::{borrow::Borrow, fmt::Display};

use crate::Show;

/// Implements the conversions shared by all label types, that is types which wrap a
/// [`String`] and are identified by it.
macro_rules! impl_label {
    ($ty:ident) => {
        impl $ty {
            /// Returns the underlying label.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $ty {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&$ty> for $ty {
            fn from(value: &$ty) -> Self {
                value.clone()
            }
        }
    };
}
pub(crate) use impl_label;

/// A symbol of the alphabet over which an automaton reads its input. Symbols are opaque,
/// two symbols are the same if and only if their labels are the same. The ordering of
/// symbols is the lexicographic ordering of their labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);
impl_label!(Symbol);

impl Show for Symbol {
    fn show(&self) -> String {
        self.0.clone()
    }

    /// Words are shown by concatenating their symbols, the empty word is shown as `ε`.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        let word: String = iter.into_iter().map(|sym| sym.as_str()).collect();
        if word.is_empty() {
            "ε".to_string()
        } else {
            word
        }
    }
}

/// Turns something that looks like a sequence of labels into a word, i.e. a vector of [`Symbol`]s.
pub fn word<I, S>(symbols: I) -> Vec<Symbol>
where
    I: IntoIterator<Item = S>,
    S: Borrow<str>,
{
    symbols
        .into_iter()
        .map(|sym| Symbol::from(sym.borrow()))
        .collect()
}

/// Renders a word with symbols separated by `.`, which unlike [`Show`] is unambiguous for
/// symbols that consist of more than one character.
pub fn format_word(word: &[Symbol]) -> impl Display + '_ {
    itertools::Itertools::format(word.iter(), ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_ordered_by_label() {
        let mut symbols = word(["b", "ab", "a"]);
        symbols.sort();
        assert_eq!(symbols, word(["a", "ab", "b"]));
        assert_eq!(format_word(&symbols).to_string(), "a.ab.b");
        assert_eq!(symbols.show(), "aabb");
        assert_eq!(word::<_, &str>([]).show(), "ε");
    }
}
