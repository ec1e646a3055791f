//! Live scene: uniquely named shapes in insertion order
//!
//! Mutations addressed at a name that is not in the scene (`move_shape`,
//! `recolor`, `resize`) are silent no-ops. They return `Ok(false)` so callers
//! can tell the difference, but no error is raised.

use super::color::Color;
use super::errors::AlbumError;
use super::shape::{Shape, ShapeKind};
use crate::snapshot::{SnapshotArchive, SnapshotId};
use rustc_hash::FxHashSet;

/// The mutable collection of shapes being edited
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    names: FxHashSet<String>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and insert a shape; fails if the name is taken
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        kind: ShapeKind,
        name: &str,
        x: f64,
        y: f64,
        p1: f64,
        p2: f64,
        color: Color,
    ) -> Result<&Shape, AlbumError> {
        if self.names.contains(name) {
            return Err(AlbumError::DuplicateName {
                name: name.to_string(),
            });
        }
        let shape = Shape::create(kind, name, x, y, p1, p2, color)?;
        self.names.insert(name.to_string());
        self.shapes.push(shape);
        Ok(&self.shapes[self.shapes.len() - 1])
    }

    pub fn create_rectangle(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<&Shape, AlbumError> {
        self.create(ShapeKind::Rectangle, name, x, y, width, height, color)
    }

    pub fn create_oval(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        x_radius: f64,
        y_radius: f64,
        color: Color,
    ) -> Result<&Shape, AlbumError> {
        self.create(ShapeKind::Oval, name, x, y, x_radius, y_radius, color)
    }

    /// Remove a shape by name; absent names are ignored
    pub fn remove(&mut self, name: &str) -> bool {
        if !self.names.remove(name) {
            return false;
        }
        self.shapes.retain(|shape| shape.name() != name);
        true
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.names.clear();
    }

    pub fn move_shape(&mut self, name: &str, x: f64, y: f64) -> Result<bool, AlbumError> {
        match self.get_mut(name) {
            Some(shape) => {
                shape.move_to(x, y);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn recolor(&mut self, name: &str, r: f64, g: f64, b: f64) -> Result<bool, AlbumError> {
        match self.get_mut(name) {
            Some(shape) => shape.recolor(r, g, b).map(|()| true),
            None => Ok(false),
        }
    }

    /// Resize with the parameter meaning of the named shape's own variant
    pub fn resize(&mut self, name: &str, p1: f64, p2: f64) -> Result<bool, AlbumError> {
        match self.get_mut(name) {
            Some(shape) => shape.resize(p1, p2).map(|()| true),
            None => Ok(false),
        }
    }

    pub fn resize_rectangle(
        &mut self,
        name: &str,
        width: f64,
        height: f64,
    ) -> Result<bool, AlbumError> {
        self.resize_as(ShapeKind::Rectangle, name, width, height)
    }

    pub fn resize_oval(
        &mut self,
        name: &str,
        x_radius: f64,
        y_radius: f64,
    ) -> Result<bool, AlbumError> {
        self.resize_as(ShapeKind::Oval, name, x_radius, y_radius)
    }

    fn resize_as(
        &mut self,
        kind: ShapeKind,
        name: &str,
        p1: f64,
        p2: f64,
    ) -> Result<bool, AlbumError> {
        match self.get_mut(name) {
            Some(shape) => shape.resize_as(kind, p1, p2).map(|()| true),
            None => Ok(false),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.name() == name)
    }

    /// Like [`get`](Self::get), but a missing name is an error
    pub fn require(&self, name: &str) -> Result<&Shape, AlbumError> {
        self.get(name).ok_or_else(|| AlbumError::NotFound {
            what: "shape",
            key: name.to_string(),
        })
    }

    // Kept private: outside code mutates only through the validated operations
    fn get_mut(&mut self, name: &str) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.name() == name)
    }

    /// All shapes in insertion order
    pub fn list(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Deep-copy the scene into a new snapshot appended to `archive`
    pub fn snapshot(&self, description: &str, archive: &mut SnapshotArchive) -> SnapshotId {
        archive.capture(description, &self.shapes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shape::{Geometry, Point};

    fn color(r: f64, g: f64, b: f64) -> Color {
        Color::new(r, g, b).unwrap()
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut scene = Scene::new();
        scene
            .create_rectangle("A", 0.0, 0.0, 1.0, 1.0, color(0.0, 0.0, 0.0))
            .unwrap();
        let err = scene
            .create_oval("A", 0.0, 0.0, 1.0, 1.0, color(0.0, 0.0, 0.0))
            .unwrap_err();
        assert_eq!(
            err,
            AlbumError::DuplicateName {
                name: "A".to_string()
            }
        );
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get("A").unwrap().kind(), ShapeKind::Rectangle);
    }

    #[test]
    fn test_name_reusable_after_remove() {
        let mut scene = Scene::new();
        scene
            .create_rectangle("A", 0.0, 0.0, 1.0, 1.0, color(0.0, 0.0, 0.0))
            .unwrap();
        assert!(scene.remove("A"));
        assert!(!scene.remove("A"));
        assert!(scene
            .create_oval("A", 0.0, 0.0, 1.0, 1.0, color(0.0, 0.0, 0.0))
            .is_ok());
    }

    #[test]
    fn test_invalid_create_does_not_reserve_name() {
        let mut scene = Scene::new();
        assert!(scene
            .create_rectangle("A", 0.0, 0.0, -1.0, 1.0, color(0.0, 0.0, 0.0))
            .is_err());
        assert!(scene.get("A").is_none());
        assert!(scene
            .create_rectangle("A", 0.0, 0.0, 1.0, 1.0, color(0.0, 0.0, 0.0))
            .is_ok());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut scene = Scene::new();
        for name in ["c", "a", "b"] {
            scene
                .create_rectangle(name, 0.0, 0.0, 1.0, 1.0, color(0.0, 0.0, 0.0))
                .unwrap();
        }
        scene.remove("a");
        let names: Vec<&str> = scene.list().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[test]
    fn test_mutating_missing_shape_is_noop() {
        let mut scene = Scene::new();
        assert_eq!(scene.move_shape("ghost", 1.0, 1.0), Ok(false));
        assert_eq!(scene.recolor("ghost", 1.0, 1.0, 1.0), Ok(false));
        assert_eq!(scene.resize("ghost", 1.0, 1.0), Ok(false));
        assert!(scene.is_empty());
        assert!(matches!(
            scene.require("ghost"),
            Err(AlbumError::NotFound { what: "shape", .. })
        ));
    }

    #[test]
    fn test_mutations_apply_to_named_shape() {
        let mut scene = Scene::new();
        scene
            .create_oval("O", 0.0, 0.0, 5.0, 5.0, color(0.0, 0.0, 0.0))
            .unwrap();

        assert_eq!(scene.move_shape("O", 3.0, 4.0), Ok(true));
        assert_eq!(scene.resize("O", 7.0, 8.0), Ok(true));
        assert_eq!(scene.recolor("O", 1.0, 2.0, 3.0), Ok(true));

        let shape = scene.get("O").unwrap();
        assert_eq!(shape.position(), Point::new(3.0, 4.0));
        assert_eq!(
            *shape.geometry(),
            Geometry::Oval {
                x_radius: 7.0,
                y_radius: 8.0
            }
        );
        assert_eq!(shape.color().to_rgb8(), (1, 2, 3));
    }

    #[test]
    fn test_variant_specific_resize() {
        let mut scene = Scene::new();
        scene
            .create_oval("O", 0.0, 0.0, 5.0, 5.0, color(0.0, 0.0, 0.0))
            .unwrap();

        assert!(matches!(
            scene.resize_rectangle("O", 1.0, 1.0),
            Err(AlbumError::UnsupportedOperation { .. })
        ));
        assert_eq!(scene.resize_oval("O", 2.0, 3.0), Ok(true));
        assert_eq!(scene.resize_rectangle("missing", 1.0, 1.0), Ok(false));
    }

    #[test]
    fn test_snapshot_is_isolated_from_live_scene() {
        let mut scene = Scene::new();
        let mut archive = SnapshotArchive::new();
        scene
            .create_rectangle("R", 10.0, 10.0, 50.0, 50.0, color(255.0, 0.0, 0.0))
            .unwrap();

        let id = scene.snapshot("before", &mut archive);

        scene.move_shape("R", 99.0, 99.0).unwrap();
        scene.resize("R", 1.0, 1.0).unwrap();
        scene.recolor("R", 0.0, 0.0, 255.0).unwrap();
        scene.remove("R");

        let snapshot = archive.by_id(&id).unwrap();
        let copy = &snapshot.shapes()[0];
        assert_eq!(copy.position(), Point::new(10.0, 10.0));
        assert_eq!(copy.geometry().params(), (50.0, 50.0));
        assert_eq!(copy.color().to_rgb8(), (255, 0, 0));
    }
}
