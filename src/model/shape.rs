//! Named shapes: rectangles and ovals
//!
//! A [`Shape`] carries the fields every variant shares (name, position,
//! color) plus a [`Geometry`] payload holding the variant-specific size
//! parameters. Operations dispatch on the payload with `match`.
//!
//! # Coordinates
//!
//! - Rectangle: `position` is the bottom-left corner
//! - Oval: `position` is the center
//!
//! Positions are unconstrained; every size parameter is strictly positive.

use super::color::Color;
use super::errors::AlbumError;
use std::fmt;
use std::str::FromStr;

/// Shape variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Oval,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Oval => "oval",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = AlbumError;

    /// Case-insensitive: `RECTANGLE`, `rectangle` and `Oval` are all accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("rectangle") {
            Ok(ShapeKind::Rectangle)
        } else if s.eq_ignore_ascii_case("oval") {
            Ok(ShapeKind::Oval)
        } else {
            Err(AlbumError::unsupported(format!("unknown shape type '{}'", s)))
        }
    }
}

/// A point in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Variant-specific size parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Rectangle { width: f64, height: f64 },
    Oval { x_radius: f64, y_radius: f64 },
}

impl Geometry {
    /// Build the payload for `kind` from the two generic size parameters
    pub fn new(kind: ShapeKind, p1: f64, p2: f64) -> Result<Self, AlbumError> {
        let geometry = match kind {
            ShapeKind::Rectangle => Geometry::Rectangle {
                width: p1,
                height: p2,
            },
            ShapeKind::Oval => Geometry::Oval {
                x_radius: p1,
                y_radius: p2,
            },
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Oval { .. } => ShapeKind::Oval,
        }
    }

    /// The two size parameters in declaration order
    pub fn params(&self) -> (f64, f64) {
        match *self {
            Geometry::Rectangle { width, height } => (width, height),
            Geometry::Oval { x_radius, y_radius } => (x_radius, y_radius),
        }
    }

    fn validate(&self) -> Result<(), AlbumError> {
        let (labels, (a, b)) = match self {
            Geometry::Rectangle { .. } => (["Width", "Height"], self.params()),
            Geometry::Oval { .. } => (["X radius", "Y radius"], self.params()),
        };
        validate_positive(labels[0], a)?;
        validate_positive(labels[1], b)
    }
}

fn validate_positive(label: &str, value: f64) -> Result<(), AlbumError> {
    // Written so that NaN is rejected as well
    if value > 0.0 {
        Ok(())
    } else {
        Err(AlbumError::validation(format!(
            "{} must be positive, got {}",
            label, value
        )))
    }
}

/// A named rectangle or oval
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    name: String,
    position: Point,
    color: Color,
    geometry: Geometry,
}

impl Shape {
    /// Create a shape of the given kind
    ///
    /// `p1`/`p2` are width/height for rectangles and x/y radius for ovals.
    /// Name uniqueness is the scene's concern and is not checked here.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        kind: ShapeKind,
        name: &str,
        x: f64,
        y: f64,
        p1: f64,
        p2: f64,
        color: Color,
    ) -> Result<Self, AlbumError> {
        if name.trim().is_empty() {
            return Err(AlbumError::validation("shape name must not be blank"));
        }
        let geometry = Geometry::new(kind, p1, p2)?;
        Ok(Shape {
            name: name.to_string(),
            position: Point::new(x, y),
            color,
            geometry,
        })
    }

    pub fn rectangle(
        name: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    ) -> Result<Self, AlbumError> {
        Self::create(ShapeKind::Rectangle, name, x, y, width, height, color)
    }

    pub fn oval(
        name: &str,
        x: f64,
        y: f64,
        x_radius: f64,
        y_radius: f64,
        color: Color,
    ) -> Result<Self, AlbumError> {
        Self::create(ShapeKind::Oval, name, x, y, x_radius, y_radius, color)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Move to new coordinates; positions are unconstrained
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    /// Resize using this shape's own parameter meaning
    pub fn resize(&mut self, a: f64, b: f64) -> Result<(), AlbumError> {
        let resized = Geometry::new(self.kind(), a, b)?;
        self.geometry = resized;
        Ok(())
    }

    /// Resize, but only if this shape is of the expected kind
    pub fn resize_as(&mut self, kind: ShapeKind, a: f64, b: f64) -> Result<(), AlbumError> {
        if kind != self.kind() {
            return Err(AlbumError::unsupported(format!(
                "cannot resize {} '{}' as a {}",
                self.kind(),
                self.name,
                kind
            )));
        }
        self.resize(a, b)
    }

    pub fn recolor(&mut self, r: f64, g: f64, b: f64) -> Result<(), AlbumError> {
        self.color.set(r, g, b)
    }

    /// Multi-line summary: name, kind, position, size, color
    pub fn describe(&self) -> String {
        let Point { x, y } = self.position;
        let geometry = match self.geometry {
            Geometry::Rectangle { width, height } => format!(
                "Min corner: ({:.1}, {:.1}), Width: {:.1}, Height: {:.1}",
                x, y, width, height
            ),
            Geometry::Oval { x_radius, y_radius } => format!(
                "Center: ({:.1}, {:.1}), X radius: {:.1}, Y radius: {:.1}",
                x, y, x_radius, y_radius
            ),
        };
        format!(
            "Name: {}\nType: {}\n{}, Color: {}",
            self.name,
            self.kind(),
            geometry,
            self.color
        )
    }
}
