//! Console transition tables.

use std::cmp::max;

use crate::fa::dfa::Dfa;

/// Formats a row-per-state transition table for console display.
///
/// The start state is prefixed with `->`, accepting states with `*`, and an
/// undefined transition of a partial automaton prints as `-`. Sink states
/// sort after the regular states.
pub fn transition_table(dfa: &Dfa) -> String {
    let mut state_order: Vec<usize> = (0..dfa.states.len()).collect();
    state_order.sort_by_key(|&s| {
        let name = dfa.states[s].get_name();
        (name.contains("sink"), name.to_string())
    });
    let mut symbol_order: Vec<usize> = (0..dfa.alphabet.len()).collect();
    symbol_order.sort_by_key(|&c| dfa.alphabet[c].get_name().to_string());

    let longest_name = dfa
        .states
        .iter()
        .map(|s| s.get_name().len())
        .max()
        .unwrap_or(0);
    let column = max(10, longest_name + 4);
    let rule = "-".repeat(column * (symbol_order.len() + 1));

    let mut out = String::new();
    out.push_str(&format!("{:<width$}", "State", width = column));
    for &c in &symbol_order {
        out.push_str(&format!("{:^width$}", dfa.alphabet[c].get_name(), width = column));
    }
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for &s in &state_order {
        let mut label = String::new();
        if s == dfa.start_state {
            label.push_str("->");
        }
        if dfa.accept_states.contains(&s) {
            label.push('*');
        }
        label.push_str(dfa.states[s].get_name());
        out.push_str(&format!("{:<width$}", label, width = column));

        for &c in &symbol_order {
            let cell = dfa
                .transitions
                .get(s)
                .and_then(|row| row.get(&c))
                .map(|&to| dfa.states[to].get_name().to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("{:^width$}", cell, width = column));
        }
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Start state: {}\n", dfa.get_start_state()));
    let mut accepting: Vec<&str> = dfa
        .accept_states
        .iter()
        .map(|&s| dfa.states[s].get_name())
        .collect();
    accepting.sort_unstable();
    out.push_str(&format!("Accepting states: {{{}}}\n", accepting.join(", ")));
    out
}
