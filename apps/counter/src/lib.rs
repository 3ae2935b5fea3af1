//! # Panadería Counter Library
//!
//! Terminal front-end for the bakery counter.
//!
//! ## Module Organization
//! ```text
//! panaderia_counter_lib/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   └── config.rs   ◄─── CounterConfig (env + defaults), catalog loading
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing and dispatch
//! │   ├── catalog.rs
//! │   ├── ticket.rs
//! │   └── config.rs
//! └── error.rs        ◄─── AppError shown to the cashier
//! ```
//!
//! ## Session
//! One command per line on stdin. Replies go to stdout; rejected commands
//! print a `! <message>` notice and the prompt comes back. Logs go to
//! stderr so a printed receipt can be piped cleanly.

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{execute, Command, Reply};
use error::AppError;
use panaderia_core::TicketManager;
use state::CounterConfig;

const PROMPT: &str = "> ";

/// Runs the counter on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Counter Startup                                   │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, on stderr                     │
/// │     • Default: info,panaderia_core=debug,panaderia_counter_lib=debug    │
/// │       override with RUST_LOG                                            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • PANADERIA_* environment variables over defaults                   │
/// │     • Catalog file when PANADERIA_CATALOG is set                        │
/// │                                                                         │
/// │  3. Build TicketManager ──────────────────────────────────────────────► │
/// │     • First product selected, quantity 1, empty ticket                  │
/// │                                                                         │
/// │  4. Session loop until `quit` or end of input                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), AppError> {
    init_tracing();

    info!("Starting Panadería counter");

    let config = CounterConfig::from_env();
    let catalog = config.load_catalog()?;
    info!(
        store = %config.store_name,
        products = catalog.len(),
        "Configuration loaded"
    );

    let mut manager = TicketManager::new(catalog).with_receipt_config(config.receipt_config());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut manager, &config, stdin.lock(), stdout.lock())?;

    info!(lines = manager.ticket().line_count(), "Counter closed");
    Ok(())
}

/// Reads commands from `input` until `quit` or end of input.
///
/// Recoverable command errors are written to `output` as notices; the
/// rest end the session and are returned.
pub fn run_session<R, W>(
    manager: &mut TicketManager,
    config: &CounterConfig,
    input: R,
    mut output: W,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{} - type 'help' for commands", config.store_name)?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;

        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| execute(manager, config, command));

        match result {
            Ok(Reply::Quit) => return Ok(()),
            Ok(Reply::Text(text)) => writeln!(output, "{}", text)?,
            Err(err) if !err.is_recoverable() => return Err(err),
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "Command rejected");
                writeln!(output, "! {}", err.message)?;
            }
        }

        prompt(&mut output)?;
    }

    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "{}", PROMPT)?;
    output.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=panaderia_core=trace` - Trace the ticket logic only
/// - Default: INFO, DEBUG for the panaderia crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,panaderia_core=debug,panaderia_counter_lib=debug")
    });

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
