//! State-diagram preparation and rendering.
//!
//! [Diagram] is a plain node/edge description of an automaton; [Diagram::to_dot]
//! turns it into Graphviz DOT text. Actual image rendering sits behind the
//! narrow [DiagramRenderer] trait so the acceptance and minimization logic
//! never depends on an external renderer being installed.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::errors::Error;
use crate::fa::dfa::Dfa;

#[derive(Debug, Clone)]
pub struct DiagramNode {
    pub name: String,
    pub accepting: bool,
    pub initial: bool,
}

#[derive(Debug, Clone)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Node list, edge list, labels. Nothing else.
#[derive(Debug, Clone)]
pub struct Diagram {
    pub title: String,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl Diagram {
    /// Builds the diagram description of an automaton. Parallel transitions
    /// between the same pair of states are merged into a single edge labeled
    /// with the sorted symbols ("a, b").
    pub fn from_dfa(dfa: &Dfa, title: &str) -> Diagram {
        let mut node_order: Vec<usize> = (0..dfa.states.len()).collect();
        node_order.sort_by_key(|&s| dfa.states[s].get_name().to_string());
        let nodes = node_order
            .iter()
            .map(|&s| DiagramNode {
                name: dfa.states[s].get_name().to_string(),
                accepting: dfa.accept_states.contains(&s),
                initial: s == dfa.start_state,
            })
            .collect();

        let mut grouped: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
        for (from, row) in dfa.transitions.iter().enumerate() {
            for (&symbol, &to) in row.iter() {
                let key = (
                    dfa.states[from].get_name().to_string(),
                    dfa.states[to].get_name().to_string(),
                );
                grouped
                    .entry(key)
                    .or_default()
                    .push(dfa.alphabet[symbol].get_name().to_string());
            }
        }
        let edges = grouped
            .into_iter()
            .map(|((from, to), mut symbols)| {
                symbols.sort_unstable();
                DiagramEdge {
                    from,
                    to,
                    label: symbols.join(", "),
                }
            })
            .collect();

        Diagram {
            title: title.to_string(),
            nodes,
            edges,
        }
    }

    /// Emits the diagram as Graphviz DOT, left-to-right, accepting states as
    /// double circles, with an invisible node pointing at the initial state.
    pub fn to_dot(&self) -> String {
        let mut output = String::from("digraph finite_state_machine {\n");
        output.push_str(&format!("\tlabel=\"{}\";\n", self.title));
        output.push_str("\tfontname=\"Helvetica,Arial,sans-serif\"\n");
        output.push_str("\tnode [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        output.push_str("\tedge [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        output.push_str("\trankdir=LR;\n");
        for node in &self.nodes {
            let shape = if node.accepting { "doublecircle" } else { "circle" };
            output.push_str(&format!("\t\"{}\" [shape = {}];\n", node.name, shape));
        }
        for edge in &self.edges {
            output.push_str(&format!(
                "\t\"{}\" -> \"{}\" [label = \"{}\"];\n",
                edge.from, edge.to, edge.label
            ));
        }
        output.push_str("\tstart [label= \"\", shape=none,height=.0,width=.0]\n");
        for node in &self.nodes {
            if node.initial {
                output.push_str(&format!("\tstart -> \"{}\";\n", node.name));
            }
        }
        output.push_str("}\n");
        output
    }
}

/// A rendering backend for diagrams. Swappable; rendering is optional.
pub trait DiagramRenderer {
    fn render(&self, diagram: &Diagram, path: &Path) -> Result<(), Error>;
}

/// Renders PNG images by piping DOT text into the external `dot` program.
#[derive(Debug, Default)]
pub struct GraphvizRenderer;

impl DiagramRenderer for GraphvizRenderer {
    fn render(&self, diagram: &Diagram, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Render(format!("cannot create output directory: {}", e))
            })?;
        }

        let mut child = Command::new("dot")
            .arg("-Tpng")
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::Render(format!(
                    "cannot run 'dot' (is Graphviz installed and on PATH?): {}",
                    e
                ))
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(diagram.to_dot().as_bytes())
                .map_err(|e| Error::Render(format!("cannot write to 'dot': {}", e)))?;
        }
        drop(child.stdin.take());

        let status = child
            .wait()
            .map_err(|e| Error::Render(format!("'dot' did not finish: {}", e)))?;
        if !status.success() {
            return Err(Error::Render(format!("'dot' exited with {}", status)));
        }
        Ok(())
    }
}
