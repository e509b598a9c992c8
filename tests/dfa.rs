use automata_lab::errors::Error;
use automata_lab::fa::dfa::Dfa;
use automata_lab::fa::state::State;
use automata_lab::input_symbol::{string_to_symbols, InputSymbol};
use automata_lab::language::Language;

// a -> accepting, anything else dead
fn single_a() -> Dfa {
    Dfa::from_parts("s0", &["s1"], &[("s0", "a", "s1")])
}

#[test]
fn test_empty_string() {
    // accepted iff the start state is accepting
    let accepting_start = Dfa::from_parts("q0", &["q0"], &[("q0", "a", "q0")]);
    assert!(accepting_start.try_accepts_string("").unwrap());

    let rejecting_start = Dfa::from_parts("q0", &["q1"], &[("q0", "a", "q1")]);
    assert!(!rejecting_start.try_accepts_string("").unwrap());
}

#[test]
fn test_unknown_symbol_is_an_error() {
    let dfa = Dfa::from_parts(
        "q0",
        &["q1"],
        &[("q0", "a", "q1"), ("q0", "b", "q0"), ("q1", "a", "q1"), ("q1", "b", "q1")],
    );
    match dfa.try_accepts_string("ac") {
        Err(Error::UnknownSymbol(symbol)) => assert_eq!(symbol, "c"),
        other => panic!("expected UnknownSymbol, got {:?}", other),
    }
    // through the Language trait the string is simply not in the language
    assert!(!dfa.accepts_string("ac"));
    assert!(dfa.accepts_string("a"));
}

#[test]
fn test_partial_automaton_reports_missing_transition() {
    let dfa = Dfa::from_parts("q0", &["q1"], &[("q0", "a", "q1"), ("q1", "b", "q0")]);
    assert!(!dfa.is_total());
    match dfa.try_accepts_string("aa") {
        Err(Error::MissingTransition { state, symbol }) => {
            assert_eq!(state, "q1");
            assert_eq!(symbol, "a");
        }
        other => panic!("expected MissingTransition, got {:?}", other),
    }
}

#[test]
fn test_completion_adds_a_sink() {
    let partial = single_a();
    assert!(!partial.is_total());

    let complete = partial.complete();
    assert!(complete.is_total());
    assert_eq!(complete.states.len(), partial.states.len() + 1);
    assert!(complete
        .states
        .iter()
        .any(|state| state.get_name() == "q_sink"));

    // the sink traps and rejects
    assert!(complete.try_accepts_string("a").unwrap());
    assert!(!complete.try_accepts_string("aa").unwrap());
    assert!(!complete.try_accepts_string("aaa").unwrap());
}

#[test]
fn test_completion_of_total_automaton_is_identity() {
    let total = Dfa::from_parts(
        "q0",
        &["q0"],
        &[("q0", "a", "q1"), ("q0", "b", "q0"), ("q1", "a", "q0"), ("q1", "b", "q1")],
    );
    assert!(total.is_total());
    let complete = total.complete();
    assert_eq!(complete.states.len(), total.states.len());
}

#[test]
fn test_completion_avoids_sink_name_collision() {
    let mut partial = Dfa::from_parts("q_sink", &[], &[("q_sink", "a", "q_sink")]);
    partial.add_transition(&State::new("q_sink"), &InputSymbol::new("b"), &State::new("q0"));
    // q0 has no outgoing transitions, so a fresh sink is needed
    let complete = partial.complete();
    assert!(complete.is_total());
    assert!(complete
        .states
        .iter()
        .any(|state| state.get_name() == "q_sink_"));
}

#[test]
fn test_run_returns_the_visited_states() {
    let dfa = single_a().complete();
    let input = string_to_symbols("aa");
    let trace = dfa.run(&input).unwrap();
    let names: Vec<&str> = trace
        .iter()
        .map(|&s| dfa.states[s].get_name())
        .collect();
    assert_eq!(names, vec!["s0", "s1", "q_sink"]);
}
