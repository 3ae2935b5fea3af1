//! # State Module
//!
//! Startup state for the counter.
//!
//! The ticket state itself lives in [`panaderia_core::TicketManager`], owned
//! by the session loop; this module only holds what is read once at startup.

mod config;

pub use config::{ConfigError, CounterConfig, ENV_CATALOG, ENV_CURRENCY_SYMBOL, ENV_STORE_NAME};
