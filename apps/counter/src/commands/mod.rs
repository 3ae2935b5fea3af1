//! # Counter Commands Module
//!
//! All commands the cashier can type at the prompt.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing & dispatch)
//! ├── catalog.rs  ◄─── Catalog listing
//! ├── ticket.rs   ◄─── Selection, lines, receipt
//! └── config.rs   ◄─── Configuration display
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  "qty 3" ──► Command::from_str ──► Command::Quantity(Some(3))           │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                       execute(&mut TicketManager, &CounterConfig, cmd)  │
//! │                                          │                              │
//! │                              ┌───────────┴───────────┐                  │
//! │                              ▼                       ▼                  │
//! │                        Ok(Reply::Text)          Err(AppError)           │
//! │                        printed as-is            printed as notice       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod ticket;

use std::str::FromStr;

use panaderia_core::TicketManager;

use crate::error::AppError;
use crate::state::CounterConfig;

/// Usage text for `help`.
pub const HELP: &str = "\
Commands:
  catalog          list products with their index
  select <index>   choose the product to add
  qty <n>          set the quantity to add
  add              add the selected product to the ticket
  remove <index>   remove a ticket line
  ticket           show the ticket and totals
  json             show the counter state as JSON
  print            print the receipt
  config           show the active configuration
  help             show this text
  quit             leave the counter";

/// A parsed cashier command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Catalog,
    Select(usize),
    /// `None` when the quantity text is missing or not an integer.
    Quantity(Option<i64>),
    Add,
    Remove(usize),
    Ticket,
    Json,
    Print,
    Config,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_lowercase();
        let arg = words.next();

        if words.next().is_some() {
            return Err(AppError::invalid_command(format!(
                "Too many arguments for '{}'",
                name
            )));
        }

        let command = match name.as_str() {
            "catalog" | "menu" => Command::Catalog,
            "select" => Command::Select(parse_index("select", arg)?),
            "qty" | "quantity" => Command::Quantity(arg.and_then(|a| a.parse::<i64>().ok())),
            "add" => Command::Add,
            "remove" | "rm" => Command::Remove(parse_index("remove", arg)?),
            "ticket" | "show" => Command::Ticket,
            "json" => Command::Json,
            "print" => Command::Print,
            "config" => Command::Config,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(AppError::invalid_command(format!(
                    "Unknown command '{}'. Type 'help' for the list.",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn parse_index(command: &str, arg: Option<&str>) -> Result<usize, AppError> {
    let arg = arg.ok_or_else(|| {
        AppError::invalid_command(format!("Usage: {} <index>", command))
    })?;

    arg.parse::<usize>().map_err(|_| {
        AppError::invalid_command(format!("'{}' is not a valid index", arg))
    })
}

/// What the session does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and prompt again.
    Text(String),
    /// End the session.
    Quit,
}

/// Runs one command against the counter state.
pub fn execute(
    manager: &mut TicketManager,
    config: &CounterConfig,
    command: Command,
) -> Result<Reply, AppError> {
    let text = match command {
        Command::Catalog => catalog::list_catalog(manager),
        Command::Select(index) => ticket::select_product(manager, index)?,
        Command::Quantity(quantity) => ticket::set_quantity(manager, quantity),
        Command::Add => ticket::add_line(manager)?,
        Command::Remove(index) => ticket::remove_line(manager, index),
        Command::Ticket => ticket::show_ticket(manager),
        Command::Json => ticket::snapshot_json(manager)?,
        Command::Print => ticket::print_receipt(manager)?,
        Command::Config => config::show_config(config)?,
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Reply::Quit),
    };

    Ok(Reply::Text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_commands() {
        assert_eq!("catalog".parse::<Command>().unwrap(), Command::Catalog);
        assert_eq!("select 2".parse::<Command>().unwrap(), Command::Select(2));
        assert_eq!("  ADD ".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("remove 0".parse::<Command>().unwrap(), Command::Remove(0));
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_quantity_never_fails() {
        assert_eq!("qty 3".parse::<Command>().unwrap(), Command::Quantity(Some(3)));
        assert_eq!("qty -2".parse::<Command>().unwrap(), Command::Quantity(Some(-2)));
        assert_eq!("qty 1.5".parse::<Command>().unwrap(), Command::Quantity(None));
        assert_eq!("qty abc".parse::<Command>().unwrap(), Command::Quantity(None));
        assert_eq!("qty".parse::<Command>().unwrap(), Command::Quantity(None));
    }

    #[test]
    fn test_parse_errors() {
        let err = "select".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
        assert_eq!(err.message, "Usage: select <index>");

        assert!("select x".parse::<Command>().is_err());
        assert!("remove -1".parse::<Command>().is_err());
        assert!("add 2 3".parse::<Command>().is_err());
        assert!("bake".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_execute_quit_and_help() {
        let mut manager = TicketManager::default();
        let config = CounterConfig::default();

        assert_eq!(execute(&mut manager, &config, Command::Quit).unwrap(), Reply::Quit);
        assert_eq!(
            execute(&mut manager, &config, Command::Help).unwrap(),
            Reply::Text(HELP.to_string())
        );
    }
}
