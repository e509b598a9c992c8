use std::fmt;

/// A named automaton state (e.g., "q0", "q3q6", "q_sink").
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct State {
    pub name: String,
}

impl State {
    /// Create a new State
    pub fn new(name: &str) -> Self {
        State {
            name: name.to_string(),
        }
    }

    /// Create a new State from a String
    pub fn from_string(name: String) -> Self {
        State { name }
    }

    /// Get the name of the state
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
