pub mod dfa;
pub mod minimize;
pub mod state;
