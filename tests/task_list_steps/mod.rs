//! Step definitions for task list behaviour scenarios.

mod given;
mod then;
mod when;
pub mod world;
