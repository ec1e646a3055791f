//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`canvas`]: Filled drawing of the current snapshot's shapes
//! - [`snapshots`]: List of every snapshot with the cursor highlighted
//! - [`details`]: Id, timestamp, description and shape summaries
//! - [`status`]: Status bar with keybindings and position
//!
//! Each pane module exports a primary `render_*` function. Panes are
//! stateless apart from the scroll offsets the app passes in.

pub mod canvas;
pub mod details;
pub mod snapshots;
pub mod status;

// Re-export render functions for convenience
pub use canvas::render_canvas_pane;
pub use details::render_details_pane;
pub use snapshots::render_snapshot_list;
pub use status::render_status_bar;
