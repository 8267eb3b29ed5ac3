//! listkeeper - terminal to-do list and expense tracker
//!
//! This library provides the core functionality for two small interactive
//! programs that share one shape: an ordered collection, persisted as a
//! whole-file JSON snapshot after every change, driven by a numbered menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Tasks, expenses, and money
//! - `storage`: JSON snapshot storage with atomic writes
//! - `services`: Validation and mutation, saving after each change
//! - `display`: Text formatting for listings
//! - `cli`: Interactive shells and subcommand handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use listkeeper::services::TodoService;
//! use listkeeper::storage::TodoRepository;
//!
//! let mut repo = TodoRepository::new("todo.json".into());
//! let _ = repo.load();
//! TodoService::new(&mut repo).add("Buy milk")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{KeeperError, KeeperResult};
