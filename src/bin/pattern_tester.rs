//! Menu-driven tester for the ten fixed regular-language patterns.

use anyhow::Result;
use clap::Parser;

use automata_lab::patterns::{find_pattern, Pattern, PATTERNS};
use automata_lab::shell::{install_interrupt_handler, prompt, Signal, BACK, QUIT};

/// Interactive tester for ten fixed regular-language patterns.
#[derive(Parser)]
#[command(name = "pattern_tester")]
struct Args {
    /// Jump straight to one pattern (a-j) instead of showing the menu
    #[arg(short, long)]
    pattern: Option<char>,
}

enum LoopExit {
    Back,
    Quit,
}

fn print_menu() {
    println!("\n--- REGULAR EXPRESSION TESTER ---");
    for pattern in PATTERNS.iter() {
        println!("  {}) {}", pattern.id, pattern.description);
    }
    println!("\nType '{}' at any prompt to leave the program.", QUIT);
}

fn verdict(matched: bool) -> &'static str {
    if matched {
        "accepted"
    } else {
        "rejected"
    }
}

fn run_pattern(pattern: &Pattern) -> LoopExit {
    println!("\n{}", "=".repeat(72));
    println!("Testing pattern '{}'", pattern.id);
    println!("Description: {}", pattern.description);
    println!("Regular expression: r\"{}\"", pattern.source);
    println!("{}", "=".repeat(72));

    println!("\n--- Initial battery ---");
    for sample in pattern.battery {
        println!("{:?}: {}", sample, verdict(pattern.matches(sample)));
    }
    println!();

    loop {
        let message = format!("Enter a string to test (or '{}' for the menu): ", BACK);
        match prompt(&message) {
            Signal::Line(input) => {
                println!("-> {:?}: {}\n", input, verdict(pattern.matches(&input)));
            }
            Signal::Back => return LoopExit::Back,
            Signal::Quit | Signal::Eof => return LoopExit::Quit,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    install_interrupt_handler()?;

    if let Some(id) = args.pattern {
        let pattern = find_pattern(id.to_ascii_lowercase())
            .ok_or_else(|| anyhow::anyhow!("no pattern '{}'; valid identifiers are a-j", id))?;
        run_pattern(pattern);
        println!("Program terminated.");
        return Ok(());
    }

    loop {
        print_menu();
        match prompt("Choose an option (a-j): ") {
            Signal::Line(line) => {
                let lowered = line.to_ascii_lowercase();
                let selection = match lowered.chars().next() {
                    Some(id) if lowered.chars().count() == 1 => find_pattern(id),
                    _ => None,
                };
                match selection {
                    Some(pattern) => {
                        if let LoopExit::Quit = run_pattern(pattern) {
                            break;
                        }
                    }
                    None => println!("Invalid option. Please try again."),
                }
            }
            Signal::Back => println!("Invalid option. Please try again."),
            Signal::Quit | Signal::Eof => break,
        }
    }

    println!("Program terminated.");
    Ok(())
}
