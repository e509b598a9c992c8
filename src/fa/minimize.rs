//! DFA minimization by partition refinement.
//!
//! The state set is split into accepting and non-accepting blocks and refined
//! to a fixed point: a block splits whenever some symbol sends part of it into
//! a different block than the rest. The refined classes are exactly the
//! Myhill-Nerode equivalence classes of the reachable states, and the quotient
//! automaton over them is the unique minimal DFA for the language.

use hashbrown::{HashMap, HashSet};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;

use crate::fa::dfa::Dfa;
use crate::fa::state::State;

impl Dfa {
    /// Partitions the given states into classes of behaviorally
    /// indistinguishable states.
    ///
    /// Hopcroft-style refinement over inverted transitions: repeatedly pick a
    /// block from the worklist, compute its predecessors per symbol, and split
    /// every block that straddles the predecessor set, re-queueing the smaller
    /// half. The transition function must be total over `states`.
    pub fn equivalence_classes(&self, states: &FxHashSet<usize>) -> HashSet<BTreeSet<usize>> {
        // invert the transition map, restricted to the given states
        let mut inverted: Vec<Vec<HashSet<usize>>> =
            vec![vec![HashSet::new(); self.alphabet.len()]; self.states.len()];
        for (from, row) in self.transitions.iter().enumerate() {
            if !states.contains(&from) {
                continue;
            }
            for (&symbol, &to) in row.iter() {
                inverted[to][symbol].insert(from);
            }
        }

        let accepting: BTreeSet<usize> = states
            .iter()
            .filter(|s| self.accept_states.contains(*s))
            .copied()
            .collect();
        let rejecting: BTreeSet<usize> = states
            .iter()
            .filter(|s| !self.accept_states.contains(*s))
            .copied()
            .collect();

        let mut partition: HashSet<BTreeSet<usize>> = HashSet::new();
        let mut worklist: HashSet<BTreeSet<usize>> = HashSet::new();
        for block in [accepting, rejecting] {
            // a wholly accepting (or rejecting) automaton starts from a single block
            if !block.is_empty() {
                partition.insert(block.clone());
                worklist.insert(block);
            }
        }

        while let Some(splitter) = worklist.iter().next().cloned() {
            worklist.remove(&splitter);

            for symbol in 0..self.alphabet.len() {
                // predecessors of the splitter block via this symbol
                let preds: BTreeSet<usize> = splitter
                    .iter()
                    .flat_map(|&s| inverted[s][symbol].iter())
                    .copied()
                    .collect();
                if preds.is_empty() {
                    continue;
                }

                let mut splits = Vec::new();
                for block in partition.iter() {
                    let inside: BTreeSet<usize> = block.intersection(&preds).copied().collect();
                    if inside.is_empty() || block.is_subset(&preds) {
                        continue;
                    }
                    let outside: BTreeSet<usize> = block.difference(&inside).copied().collect();
                    if worklist.contains(block) {
                        worklist.remove(block);
                        worklist.insert(inside.clone());
                        worklist.insert(outside.clone());
                    } else if inside.len() <= outside.len() {
                        worklist.insert(inside.clone());
                    } else {
                        worklist.insert(outside.clone());
                    }
                    splits.push((block.clone(), inside, outside));
                }
                for (block, inside, outside) in splits {
                    partition.remove(&block);
                    partition.insert(inside);
                    partition.insert(outside);
                }
            }
        }

        partition
    }

    /// Returns the minimal DFA accepting the same language.
    ///
    /// The automaton is completed first (see [Dfa::complete]), restricted to
    /// the states reachable from the start state, and collapsed to its
    /// equivalence classes. Unreachable states never appear in the result; a
    /// sink class survives, so the result stays total.
    ///
    /// Class naming is stable for a given input: each class is named by the
    /// concatenation of its member names in sorted order, so a merge of q3
    /// and q6 becomes "q3q6", and classes are ordered by their smallest
    /// member index in the source automaton.
    pub fn minimize(&self) -> Dfa {
        let total = self.complete();
        let reachable = total.reachable_states(total.start_state);

        let mut classes: Vec<BTreeSet<usize>> =
            total.equivalence_classes(&reachable).into_iter().collect();
        classes.sort_by_key(|class| class.iter().next().copied().unwrap_or(usize::MAX));

        let mut class_of: HashMap<usize, usize> = HashMap::new();
        for (class_index, class) in classes.iter().enumerate() {
            for &state in class {
                class_of.insert(state, class_index);
            }
        }

        let class_names: Vec<State> = classes
            .iter()
            .map(|class| {
                let mut names: Vec<&str> =
                    class.iter().map(|&s| total.states[s].get_name()).collect();
                names.sort_unstable();
                State::from_string(names.concat())
            })
            .collect();

        let mut out = Dfa::new();
        out.set_start_state(class_names[class_of[&total.start_state]].clone());
        for (class_index, class) in classes.iter().enumerate() {
            if class.iter().any(|s| total.accept_states.contains(s)) {
                out.add_accept_state(class_names[class_index].clone());
            }
        }
        for (class_index, class) in classes.iter().enumerate() {
            // transitions via any representative; well-defined by construction
            let representative = match class.iter().next() {
                Some(&state) => state,
                None => continue,
            };
            for (symbol_index, symbol) in total.alphabet.iter().enumerate() {
                if let Some(&to) = total.transitions[representative].get(&symbol_index) {
                    out.add_transition(
                        &class_names[class_index],
                        symbol,
                        &class_names[class_of[&to]],
                    );
                }
            }
        }
        out
    }
}
