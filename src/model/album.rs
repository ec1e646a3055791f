//! The album: a live scene plus its snapshot history

use super::scene::Scene;
use crate::snapshot::{Clock, SnapshotArchive, SnapshotId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Everything a script edits: the scene and the snapshots taken of it
#[derive(Debug, Default)]
pub struct Album {
    scene: Scene,
    archive: SnapshotArchive,
}

impl Album {
    pub fn new() -> Self {
        Self::default()
    }

    /// Album whose snapshots are stamped by `clock`
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Album {
            scene: Scene::new(),
            archive: SnapshotArchive::with_clock(clock),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn archive(&self) -> &SnapshotArchive {
        &self.archive
    }

    pub fn archive_mut(&mut self) -> &mut SnapshotArchive {
        &mut self.archive
    }

    /// Capture the current scene into the archive
    pub fn snapshot(&mut self, description: &str) -> SnapshotId {
        self.scene.snapshot(description, &mut self.archive)
    }

    /// Give up the archive, e.g. to hand it to a renderer
    pub fn into_archive(self) -> SnapshotArchive {
        self.archive
    }
}

/// An [`Album`] behind one lock, for callers that share it across threads
///
/// Each call to [`with`](Self::with) holds the lock for the whole closure, so
/// lookup-then-mutate sequences and snapshot captures are never interleaved.
#[derive(Debug, Clone, Default)]
pub struct SharedAlbum {
    inner: Arc<Mutex<Album>>,
}

impl SharedAlbum {
    pub fn new(album: Album) -> Self {
        SharedAlbum {
            inner: Arc::new(Mutex::new(album)),
        }
    }

    /// Run `f` with exclusive access to the album
    pub fn with<R>(&self, f: impl FnOnce(&mut Album) -> R) -> R {
        f(&mut self.lock())
    }

    // A panic inside `with` cannot leave the album half-mutated, since every
    // operation validates before writing, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Album> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
