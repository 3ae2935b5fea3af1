//! # Panadería Counter Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration and catalog
//! 3. Create the ticket manager
//! 4. Read commands until `quit`

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match panaderia_counter_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("panaderia-counter: {}", err.message);
            ExitCode::FAILURE
        }
    }
}
