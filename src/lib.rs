//! Cras: a daily task list manager for the command line.
//!
//! Each invocation loads one task file, applies at most one operation and
//! writes the file back. A list is only usable on its due date, which keeps
//! the list focused on what has to happen today.
//!
//! # Architecture
//!
//! Cras follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task list logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: The task file codec and repositories
//! - **Services**: One load, check, mutate and save cycle per operation
//!
//! # Modules
//!
//! - [`tasklist`]: Task list model, persistence and services
//! - [`config`]: Settings resolved from flags and environment
//! - [`render`]: Text and JSON output
//! - [`cli`]: Argument parsing and dispatch

pub mod cli;
pub mod config;
pub mod render;
pub mod tasklist;
