use crate::input_symbol::{string_to_symbols, InputSymbol};

pub trait Language {
    fn accepts(&self, input: &[InputSymbol]) -> bool;

    /// Converts the string into a symbol sequence (one symbol per character)
    /// and checks whether the language accepts it.
    fn accepts_string(&self, input: &str) -> bool {
        self.accepts(&string_to_symbols(input))
    }
}
