// Snapshot capture and history for the renderers

use crate::model::errors::AlbumError;
use crate::model::shape::Shape;
use chrono::{DateTime, Local};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Format of the human-readable timestamp shown next to each snapshot
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Format of the clock part of a snapshot id
const ID_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Source of capture times
pub trait Clock: Send {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Snapshot identifier: capture time plus a sequence number
///
/// Two captures within the same clock tick still get distinct ids, and ids
/// order by sequence number regardless of wall-clock adjustments.
#[derive(Debug, Clone)]
pub struct SnapshotId {
    seq: u64,
    text: String,
}

impl SnapshotId {
    fn new(seq: u64, captured_at: &DateTime<Local>) -> Self {
        SnapshotId {
            seq,
            text: format!("{}#{:04}", captured_at.format(ID_CLOCK_FORMAT), seq),
        }
    }

    /// Position in the capture sequence (starts at 1)
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

// Equality and hashing go through the text so that the archive index can be
// queried with a plain `&str`.
impl PartialEq for SnapshotId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for SnapshotId {}

impl Hash for SnapshotId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for SnapshotId {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl PartialOrd for SnapshotId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SnapshotId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seq
            .cmp(&other.seq)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Immutable point-in-time copy of the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    id: SnapshotId,
    timestamp: String,
    description: String,
    shapes: Vec<Shape>,
}

impl Snapshot {
    /// Capture `shapes` by value; later edits to the originals never reach
    /// this snapshot.
    pub fn capture(
        id: SnapshotId,
        timestamp: String,
        description: &str,
        shapes: &[Shape],
    ) -> Self {
        Snapshot {
            id,
            timestamp,
            description: description.to_string(),
            shapes: shapes.to_vec(),
        }
    }

    pub fn id(&self) -> &SnapshotId {
        &self.id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Text report of the snapshot and every shape it holds
    pub fn describe(&self) -> String {
        let mut out = format!(
            "Snapshot ID: {}\nTimestamp: {}\nDescription: {}\nShape Information:\n",
            self.id, self.timestamp, self.description
        );
        for shape in &self.shapes {
            out.push_str(&shape.describe());
            out.push('\n');
        }
        out
    }
}

/// Ordered history of snapshots with lookup by id
pub struct SnapshotArchive {
    snapshots: Vec<Arc<Snapshot>>,
    ids: Vec<SnapshotId>,
    index: FxHashMap<SnapshotId, usize>,
    clock: Box<dyn Clock>,
    next_seq: u64,
}

impl SnapshotArchive {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        SnapshotArchive {
            snapshots: Vec::new(),
            ids: Vec::new(),
            index: FxHashMap::default(),
            clock,
            next_seq: 1,
        }
    }

    /// Allocate a fresh id and formatted timestamp for a capture
    ///
    /// The sequence keeps counting across [`clear`](Self::clear), so an id is
    /// never handed out twice by the same archive.
    pub fn issue_id(&mut self) -> (SnapshotId, String) {
        let now = self.clock.now();
        let id = SnapshotId::new(self.next_seq, &now);
        self.next_seq += 1;
        (id, now.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Deep-copy `shapes` into a new snapshot under a fresh id
    pub fn capture(&mut self, description: &str, shapes: &[Shape]) -> SnapshotId {
        let (id, timestamp) = loop {
            let (id, timestamp) = self.issue_id();
            // An appended snapshot may already hold the next id
            if !self.index.contains_key(&id) {
                break (id, timestamp);
            }
        };
        self.push(Snapshot::capture(id.clone(), timestamp, description, shapes));
        id
    }

    /// Add a snapshot built elsewhere to the end of the history
    ///
    /// Fails with [`AlbumError::DuplicateId`] if the id is already present,
    /// e.g. a snapshot copied from another archive with the same clock.
    pub fn append(&mut self, snapshot: Snapshot) -> Result<(), AlbumError> {
        if self.index.contains_key(snapshot.id()) {
            return Err(AlbumError::DuplicateId {
                id: snapshot.id().to_string(),
            });
        }
        self.push(snapshot);
        Ok(())
    }

    fn push(&mut self, snapshot: Snapshot) {
        let id = snapshot.id().clone();
        self.index.insert(id.clone(), self.snapshots.len());
        self.ids.push(id);
        self.snapshots.push(Arc::new(snapshot));
    }

    /// Look up a snapshot by id (accepts `&SnapshotId` or `&str`)
    pub fn by_id<Q>(&self, id: &Q) -> Option<&Arc<Snapshot>>
    where
        SnapshotId: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(id).and_then(|&i| self.snapshots.get(i))
    }

    /// Like [`by_id`](Self::by_id), but a missing id is an error
    pub fn require(&self, id: &str) -> Result<&Arc<Snapshot>, AlbumError> {
        self.by_id(id).ok_or_else(|| AlbumError::NotFound {
            what: "snapshot",
            key: id.to_string(),
        })
    }

    /// Get a snapshot by position in capture order
    pub fn get(&self, index: usize) -> Option<&Arc<Snapshot>> {
        self.snapshots.get(index)
    }

    /// All ids, in capture order
    pub fn ids(&self) -> &[SnapshotId] {
        &self.ids
    }

    pub fn snapshots(&self) -> &[Arc<Snapshot>] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Drop every snapshot and id
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.ids.clear();
        self.index.clear();
    }
}

impl Default for SnapshotArchive {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SnapshotArchive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotArchive")
            .field("ids", &self.ids)
            .field("next_seq", &self.next_seq)
            .finish()
    }
}

/// Externally tracked position in an archive, used by the paginated viewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotCursor {
    position: usize,
}

impl SnapshotCursor {
    pub fn new() -> Self {
        SnapshotCursor { position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Snapshot under the cursor, or `None` for an empty archive
    pub fn current<'a>(&self, archive: &'a SnapshotArchive) -> Option<&'a Arc<Snapshot>> {
        archive.get(self.position)
    }

    /// Move by `direction` steps; returns `false` and stays put if that would
    /// leave the archive.
    pub fn step(&mut self, archive: &SnapshotArchive, direction: isize) -> bool {
        match self.position.checked_add_signed(direction) {
            Some(target) if target < archive.len() => {
                self.position = target;
                true
            }
            _ => false,
        }
    }

    pub fn first(&mut self) {
        self.position = 0;
    }

    pub fn last(&mut self, archive: &SnapshotArchive) {
        self.position = archive.len().saturating_sub(1);
    }

    /// Jump to the snapshot with the given id; returns whether it exists
    pub fn jump_to(&mut self, archive: &SnapshotArchive, id: &str) -> bool {
        match archive.ids().iter().position(|candidate| candidate.as_str() == id) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}
