//! DFA minimization lab: completes and minimizes two fixed automata, prints
//! their transition tables, renders state diagrams, and then tests input
//! strings interactively against the minimized automata.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use automata_lab::diagram::{Diagram, DiagramRenderer, GraphvizRenderer};
use automata_lab::fa::dfa::Dfa;
use automata_lab::shell::{install_interrupt_handler, prompt, Signal, QUIT};
use automata_lab::table::transition_table;

/// Minimizes two fixed automata, prints their transition tables, renders
/// state diagrams, and tests input strings interactively.
#[derive(Parser)]
#[command(name = "dfa_lab")]
struct Args {
    /// Directory where rendered diagram images are written
    #[arg(long, default_value = "output_dfa_images")]
    out_dir: PathBuf,
    /// Skip diagram rendering
    #[arg(long)]
    no_render: bool,
}

/// The 7-state automaton of the first exercise. Already total; its four
/// accepting states collapse under minimization (q3 with q6, q4 with q5).
fn automaton_one() -> Dfa {
    Dfa::from_parts(
        "q0",
        &["q0", "q1", "q3", "q6"],
        &[
            ("q0", "a", "q1"),
            ("q0", "b", "q2"),
            ("q1", "a", "q3"),
            ("q1", "b", "q4"),
            ("q2", "a", "q5"),
            ("q2", "b", "q6"),
            ("q3", "a", "q3"),
            ("q3", "b", "q3"),
            ("q4", "a", "q4"),
            ("q4", "b", "q4"),
            ("q5", "a", "q5"),
            ("q5", "b", "q5"),
            ("q6", "a", "q6"),
            ("q6", "b", "q6"),
        ],
    )
}

/// The partial automaton of the second exercise. Completion adds a sink;
/// minimization merges q3 with q6 and keeps the sink class.
fn automaton_two() -> Dfa {
    Dfa::from_parts(
        "q0",
        &["q0", "q1", "q3", "q6"],
        &[
            ("q0", "a", "q1"),
            ("q0", "b", "q2"),
            ("q1", "a", "q3"),
            ("q2", "b", "q6"),
            ("q3", "a", "q3"),
            ("q3", "b", "q3"),
            ("q6", "a", "q6"),
            ("q6", "b", "q6"),
        ],
    )
}

enum TestExit {
    Done,
    Terminated,
}

fn interactive_test(dfa: &Dfa, title: &str) -> TestExit {
    println!("\n--- Interactive test: {} ---", title);
    loop {
        let message = format!("Enter an input sequence (or '{}' to finish): ", QUIT);
        match prompt(&message) {
            Signal::Line(input) => match dfa.try_accepts_string(&input) {
                Ok(true) => println!("{:?} -> ACCEPTED", input),
                Ok(false) => println!("{:?} -> REJECTED", input),
                Err(e) => println!("Invalid entry: {}", e),
            },
            Signal::Back | Signal::Quit => {
                println!("Test finished.");
                return TestExit::Done;
            }
            Signal::Eof => return TestExit::Terminated,
        }
    }
}

fn render(dfa: &Dfa, title: &str, path: &Path) {
    let diagram = Diagram::from_dfa(dfa, title);
    match GraphvizRenderer.render(&diagram, path) {
        Ok(()) => println!("-> wrote {}", path.display()),
        Err(e) => eprintln!("ERROR: {}", e),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    install_interrupt_handler()?;

    let automata = [("dfa1", automaton_one()), ("dfa2", automaton_two())];
    for (id, source) in automata {
        println!("\n{}", "=".repeat(50));
        println!("          ANALYSIS OF {}          ", id.to_uppercase());
        println!("{}", "=".repeat(50));

        let complete = source.complete();
        println!("\n--- Transition table: {} (original) ---", id);
        println!("{}", transition_table(&complete));

        let minimized = complete.minimize();
        println!("--- Transition table: {} (minimized) ---", id);
        println!("{}", transition_table(&minimized));

        if !args.no_render {
            let original_png = args.out_dir.join(format!("{}_original.png", id));
            render(&complete, &format!("{} (original)", id), &original_png);
            let minimized_png = args.out_dir.join(format!("{}_minimizado.png", id));
            render(&minimized, &format!("{} (minimized)", id), &minimized_png);
        }

        let title = format!("{} (minimized)", id);
        if let TestExit::Terminated = interactive_test(&minimized, &title) {
            println!("\nProgram terminated.");
            return Ok(());
        }
    }

    println!("\nEnd of analysis.");
    if !args.no_render {
        println!("Images were written to '{}'.", args.out_dir.display());
    }
    Ok(())
}
