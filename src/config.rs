// Settings shared by the renderers

/// Default drawing width in scene units
pub const DEFAULT_CANVAS_WIDTH: u32 = 1000;

/// Default drawing height in scene units
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1000;

/// Size of the drawing area every renderer maps the scene onto
///
/// Scene coordinates run from `(0, 0)` at the bottom-left to
/// `(width, height)` at the top-right. Shapes outside are clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
}

impl ViewConfig {
    pub fn new(width: u32, height: u32) -> Self {
        ViewConfig { width, height }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
