use std::error;
use std::fmt;

/// Errors reported by the automata engine and its rendering backend.
#[derive(Debug)]
pub enum Error {
    /// An input symbol is not part of the automaton's alphabet.
    UnknownSymbol(String),
    /// The transition function is undefined for a (state, symbol) pair.
    MissingTransition { state: String, symbol: String },
    /// A diagram could not be rendered.
    Render(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSymbol(symbol) => {
                write!(f, "symbol '{}' is not in the alphabet", symbol)
            }
            Error::MissingTransition { state, symbol } => {
                write!(f, "no transition from state '{}' on '{}'", state, symbol)
            }
            Error::Render(reason) => write!(f, "diagram rendering failed: {}", reason),
        }
    }
}

impl error::Error for Error {}
