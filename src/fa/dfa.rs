use hashbrown::{HashMap, HashSet};
use rustc_hash::FxHashSet;
use std::cmp::max;
use std::fmt::Display;

use crate::errors::Error;
use crate::fa::state::State;
use crate::input_symbol::{string_to_symbols, InputSymbol};
use crate::language::Language;

/// A deterministic finite automaton.
///
/// States and symbols are interned: the public API speaks [State] and
/// [InputSymbol], the transition table works on indices. The transition
/// function may be partial while the automaton is being built; [Dfa::complete]
/// makes it total before simulation or minimization.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub state_index_map: HashMap<State, usize>, // Map of state names to state indices
    pub alphabet_index_map: HashMap<InputSymbol, usize>, // Map of input symbols to indices

    pub states: Vec<State>,         // List of states
    pub alphabet: Vec<InputSymbol>, // Input symbols (alphabet)

    pub transitions: Vec<HashMap<usize, usize>>, // Transitions (state -> input symbol -> next state)
    pub start_state: usize,                      // Start state
    pub accept_states: HashSet<usize>,           // Accept states
}

impl Dfa {
    /// Creates a new, empty DFA
    pub fn new() -> Self {
        Dfa {
            state_index_map: HashMap::new(),
            alphabet_index_map: HashMap::new(),
            states: vec![],
            alphabet: vec![],
            transitions: vec![],
            start_state: 0,
            accept_states: HashSet::new(),
        }
    }

    /// Builds a DFA from a literal definition: start state, accepting states,
    /// and (from, symbol, to) transitions.
    pub fn from_parts(
        start: &str,
        accepting: &[&str],
        transitions: &[(&str, &str, &str)],
    ) -> Self {
        let mut dfa = Dfa::new();
        dfa.set_start_state(State::new(start));
        for name in accepting {
            dfa.add_accept_state(State::new(name));
        }
        for (from, symbol, to) in transitions {
            dfa.add_transition(&State::new(from), &InputSymbol::new(symbol), &State::new(to));
        }
        dfa
    }

    pub fn get_start_state(&self) -> &State {
        &self.states[self.start_state]
    }

    pub fn get_accept_states(&self) -> HashSet<State> {
        HashSet::from_iter(self.accept_states.iter().map(|&s| &self.states[s]).cloned())
    }

    /// Sets the start state
    pub fn set_start_state(&mut self, start_state: State) {
        let start_index = self
            .state_index_map
            .entry(start_state.clone())
            .or_insert_with(|| {
                let index = self.states.len();
                self.states.push(start_state);
                self.transitions.push(HashMap::new());
                index
            });
        self.start_state = *start_index;
    }

    /// Adds a new accept state
    pub fn add_accept_state(&mut self, accept_state: State) {
        let accept_index = self
            .state_index_map
            .entry(accept_state.clone())
            .or_insert_with(|| {
                let index = self.states.len();
                self.states.push(accept_state);
                self.transitions.push(HashMap::new());
                index
            });
        self.accept_states.insert(*accept_index);
    }

    /// Adds a transition from state `from` to state `to` on input `symbol`
    pub fn add_transition(&mut self, from: &State, symbol: &InputSymbol, to: &State) {
        let from_index = *self.state_index_map.entry(from.clone()).or_insert_with(|| {
            let index = self.states.len();
            self.states.push(from.clone());
            index
        });
        let to_index = *self.state_index_map.entry(to.clone()).or_insert_with(|| {
            let index = self.states.len();
            self.states.push(to.clone());
            index
        });
        let symbol_index = *self
            .alphabet_index_map
            .entry(symbol.clone())
            .or_insert_with(|| {
                let index = self.alphabet.len();
                self.alphabet.push(symbol.clone());
                index
            });

        // Ensure the transition vector is large enough
        while self.transitions.len() <= max(from_index, to_index) {
            self.transitions.push(HashMap::new());
        }

        // Add the transition (overrides any existing transition)
        self.transitions[from_index].insert(symbol_index, to_index);
    }

    /// Returns the next state given the current state and input symbol
    fn next_state(&self, state: usize, symbol: usize) -> Option<usize> {
        self.transitions.get(state)?.get(&symbol).copied()
    }

    /// True if the transition function is defined for every (state, symbol) pair
    pub fn is_total(&self) -> bool {
        self.states.iter().enumerate().all(|(s, _)| {
            (0..self.alphabet.len()).all(|c| self.next_state(s, c).is_some())
        })
    }

    /// Returns an equivalent DFA with a total transition function.
    ///
    /// Missing transitions are redirected to a synthetic non-accepting sink
    /// state with self-loops on every symbol. An already total automaton is
    /// returned unchanged, with no sink added.
    pub fn complete(&self) -> Dfa {
        if self.is_total() {
            return self.clone();
        }

        let mut out = self.clone();
        while out.transitions.len() < out.states.len() {
            out.transitions.push(HashMap::new());
        }

        // pick a sink name that does not collide with an existing state
        let mut sink_name = String::from("q_sink");
        while out.state_index_map.contains_key(&State::new(&sink_name)) {
            sink_name.push('_');
        }
        let sink_index = out.states.len();
        let sink = State::from_string(sink_name);
        out.state_index_map.insert(sink.clone(), sink_index);
        out.states.push(sink);
        out.transitions.push(HashMap::new());

        for state in 0..out.states.len() {
            for symbol in 0..out.alphabet.len() {
                out.transitions[state].entry(symbol).or_insert(sink_index);
            }
        }
        out
    }

    /// Runs the automaton on the input and returns the visited state sequence,
    /// starting with the start state.
    pub fn run(&self, input: &[InputSymbol]) -> Result<Vec<usize>, Error> {
        let mut trace = Vec::with_capacity(input.len() + 1);
        let mut current = self.start_state;
        trace.push(current);
        for symbol in input {
            let symbol_index = *self
                .alphabet_index_map
                .get(symbol)
                .ok_or_else(|| Error::UnknownSymbol(symbol.get_name().to_string()))?;
            current = self.next_state(current, symbol_index).ok_or_else(|| {
                Error::MissingTransition {
                    state: self.states[current].get_name().to_string(),
                    symbol: symbol.get_name().to_string(),
                }
            })?;
            trace.push(current);
        }
        Ok(trace)
    }

    /// Acceptance verdict, or an error if the input uses symbols outside the
    /// alphabet (or hits an undefined transition of a partial automaton).
    ///
    /// The empty input is accepted iff the start state is accepting.
    pub fn try_accepts(&self, input: &[InputSymbol]) -> Result<bool, Error> {
        let mut current = self.start_state;
        for symbol in input {
            let symbol_index = *self
                .alphabet_index_map
                .get(symbol)
                .ok_or_else(|| Error::UnknownSymbol(symbol.get_name().to_string()))?;
            current = self.next_state(current, symbol_index).ok_or_else(|| {
                Error::MissingTransition {
                    state: self.states[current].get_name().to_string(),
                    symbol: symbol.get_name().to_string(),
                }
            })?;
        }
        Ok(self.accept_states.contains(&current))
    }

    /// [Dfa::try_accepts] on one symbol per character of `input`.
    pub fn try_accepts_string(&self, input: &str) -> Result<bool, Error> {
        self.try_accepts(&string_to_symbols(input))
    }

    /// Returns the set of states reachable from the given state
    pub fn reachable_states(&self, state: usize) -> FxHashSet<usize> {
        let mut reachable = FxHashSet::from_iter([state]);
        let mut stack = vec![state];

        while let Some(current_state) = stack.pop() {
            for (_, &next_state) in self.transitions[current_state].iter() {
                if reachable.insert(next_state) {
                    stack.push(next_state);
                }
            }
        }

        reachable
    }
}

impl Default for Dfa {
    fn default() -> Self {
        Dfa::new()
    }
}

impl Language for Dfa {
    /// A string over symbols outside the alphabet is simply not in the language.
    fn accepts(&self, input: &[InputSymbol]) -> bool {
        self.try_accepts(input).unwrap_or(false)
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "DFA {{")?;
        writeln!(f, "  Start state: {}", self.get_start_state())?;
        let mut accepting: Vec<&str> =
            self.accept_states.iter().map(|&s| self.states[s].get_name()).collect();
        accepting.sort_unstable();
        writeln!(f, "  Accepting states: {{{}}}", accepting.join(", "))?;
        for (from_state, transitions_map) in self.transitions.iter().enumerate() {
            let mut row: Vec<(&str, &str)> = transitions_map
                .iter()
                .map(|(&c, &to)| (self.alphabet[c].get_name(), self.states[to].get_name()))
                .collect();
            row.sort_unstable();
            for (symbol, to) in row {
                writeln!(f, "    {} -- {} --> {}", self.states[from_state], symbol, to)?;
            }
        }
        writeln!(f, "}}")
    }
}
