//! # Introduction
//!
//! shapes-album runs a line-based script of shape commands against a scene,
//! capturing a deep copy of every shape each time the script asks for a
//! snapshot. The resulting album is then browsed in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), exported as an HTML page, or printed
//! as a text report.
//!
//! ## Pipeline
//!
//! ```text
//! Script → Interpreter → Scene → Snapshots → TUI / HTML / text
//! ```
//!
//! 1. [`interpreter`]: parses each script line into a command and applies it,
//!    continuing past failed lines.
//! 2. [`model`]: validated [`model::color::Color`]s, rectangle and oval
//!    [`model::shape::Shape`]s, and the [`model::scene::Scene`] that owns them.
//! 3. [`snapshot`]: immutable snapshots with clock-based ids, kept in
//!    creation order by a [`snapshot::SnapshotArchive`].
//! 4. [`export`]: HTML/SVG and plain-text renderings of an archive.
//! 5. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! ## Script commands
//!
//! `shape`, `move`, `color`, `resize`, `remove`, `snapshot` and `clear`,
//! one per line. Blank lines and lines starting with `#` are skipped.

pub mod config;
pub mod export;
pub mod interpreter;
pub mod logging;
pub mod model;
pub mod snapshot;
pub mod ui;
