//! Line input for the interactive loops.
//!
//! The quit/back sentinels are recognized here, once; the driving loops only
//! match on the returned [Signal] instead of scattering exit checks.

use std::io::{self, BufRead, Write};
use std::process;

/// Outcome of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// A regular input line (trimmed; may be empty).
    Line(String),
    /// The user typed the back sentinel ("voltar").
    Back,
    /// The user typed the quit sentinel ("sair").
    Quit,
    /// End of input, or the input stream failed.
    Eof,
}

pub const QUIT: &str = "sair";
pub const BACK: &str = "voltar";

/// Installs a handler that turns an interrupt signal into the same clean
/// termination as end-of-input: print the notice and exit.
///
/// Can only be installed once per process.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        println!("\nProgram terminated.");
        process::exit(0);
    })
}

/// Prints the prompt and reads one line from standard input.
pub fn prompt(message: &str) -> Signal {
    print!("{}", message);
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    match io::stdin().lock().read_line(&mut buffer) {
        Ok(0) | Err(_) => Signal::Eof,
        Ok(_) => {
            let line = buffer.trim();
            if line.eq_ignore_ascii_case(QUIT) {
                Signal::Quit
            } else if line.eq_ignore_ascii_case(BACK) {
                Signal::Back
            } else {
                Signal::Line(line.to_string())
            }
        }
    }
}
