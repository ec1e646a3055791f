//! Terminal snapshot viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these modules:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, slideshow
//! - **[`panes`]**: stateless render functions for each visible pane (canvas,
//!   snapshot list, details, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//! - **[`terminal`]**: raw mode and alternate screen setup, undone on drop
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`SnapshotArchive`] and call [`App::run`] to start the event loop. The
//! viewer only reads the archive.
//!
//! [`SnapshotArchive`]: crate::snapshot::SnapshotArchive
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
