use std::fmt;

/// An input symbol of an automaton's alphabet.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InputSymbol {
    pub name: String,
}

impl InputSymbol {
    /// Create a new InputSymbol
    pub fn new(name: &str) -> Self {
        InputSymbol {
            name: name.to_string(),
        }
    }

    /// Create a new InputSymbol from a String
    pub fn from_string(name: String) -> Self {
        InputSymbol { name }
    }

    /// Get the name of the symbol
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for InputSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// One symbol per character of the input string.
pub fn char_to_symbol(c: char) -> InputSymbol {
    InputSymbol {
        name: c.to_string(),
    }
}

/// Convert a whole string into the symbol sequence the simulator consumes.
pub fn string_to_symbols(input: &str) -> Vec<InputSymbol> {
    input.chars().map(char_to_symbol).collect()
}
