//! Formal-language exercise lab.
//!
//! Two independent pipelines:
//! - a pattern matcher that checks literal strings against ten fixed
//!   regular-language patterns ([patterns](crate::patterns)), and
//! - a DFA engine that completes, minimizes, tabulates and simulates
//!   hardcoded deterministic finite automata ([fa](crate::fa)).
//!
//! The [fa::dfa](crate::fa::dfa) module holds the automaton type and the
//! acceptance simulator; [fa::minimize](crate::fa::minimize) implements
//! partition-refinement minimization. Presentation concerns live in
//! [table](crate::table) and [diagram](crate::diagram); the interactive
//! shells drive everything through [shell](crate::shell).

#[macro_use]
extern crate lazy_static;

pub mod diagram;
pub mod errors;
pub mod fa;
pub mod input_symbol;
pub mod language;
pub mod patterns;
pub mod shell;
pub mod table;
