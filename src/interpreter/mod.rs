//! Script interpreter for the shapes album
//!
//! This module turns script text into album mutations:
//! - [`command`]: Line parsing into typed [`command::Command`] values
//! - [`engine`]: The [`engine::Interpreter`] that applies commands
//! - [`errors`]: Per-line error types
//!
//! # Execution Model
//!
//! Lines are applied one at a time, in order. A line that fails to parse or
//! is rejected by the album is reported and skipped; it never stops the run
//! and never leaves partial changes behind. No state other than the album
//! itself carries over from one line to the next.

pub mod command;
pub mod engine;
pub mod errors;
