//! Static renderings of a snapshot archive
//!
//! - [`web`]: HTML page with one SVG drawing per snapshot
//! - [`render_text`]: plain-text report of every snapshot

pub mod web;

use crate::snapshot::SnapshotArchive;

/// Text report of every snapshot, separated by blank lines
pub fn render_text(archive: &SnapshotArchive) -> String {
    archive
        .snapshots()
        .iter()
        .map(|snapshot| snapshot.describe())
        .collect::<Vec<_>>()
        .join("\n")
}
