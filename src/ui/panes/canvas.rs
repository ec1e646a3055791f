//! Drawing pane: the shapes of the current snapshot, filled

use crate::config::ViewConfig;
use crate::model::shape::{Geometry, Shape};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Braille cells hold 2x4 dots
const DOTS_PER_CELL_X: f64 = 2.0;
const DOTS_PER_CELL_Y: f64 = 4.0;

/// Render the drawing pane for `snapshot` (or a placeholder if there is none)
pub fn render_canvas_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    view: &ViewConfig,
) {
    let title = match snapshot {
        Some(snapshot) => format!(" {} ", snapshot.id()),
        None => " Snapshot ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_normal)
                .add_modifier(Modifier::BOLD),
        );

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no snapshots)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let width = f64::from(view.width);
    let height = f64::from(view.height);

    // Scene units covered by one braille dot
    let inner_width = f64::from(area.width.saturating_sub(2).max(1));
    let inner_height = f64::from(area.height.saturating_sub(2).max(1));
    let step = (
        width / (inner_width * DOTS_PER_CELL_X),
        height / (inner_height * DOTS_PER_CELL_Y),
    );

    let layers: Vec<(Vec<(f64, f64)>, Color)> = snapshot
        .shapes()
        .iter()
        .map(|shape| {
            let (r, g, b) = shape.color().to_rgb8();
            (fill_points(shape, view, step), Color::Rgb(r, g, b))
        })
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(DEFAULT_THEME.canvas_bg)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            // Later shapes are drawn over earlier ones
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
                ctx.layer();
            }
        });

    frame.render_widget(canvas, area);
}

/// Sample points covering the visible part of `shape`
///
/// `step` is the scene distance between neighbouring dots on each axis.
/// A shape smaller than one dot still yields a single point so it stays
/// visible.
pub fn fill_points(shape: &Shape, view: &ViewConfig, step: (f64, f64)) -> Vec<(f64, f64)> {
    let position = shape.position();
    let (min_x, min_y, max_x, max_y) = match *shape.geometry() {
        Geometry::Rectangle { width, height } => (
            position.x,
            position.y,
            position.x + width,
            position.y + height,
        ),
        Geometry::Oval { x_radius, y_radius } => (
            position.x - x_radius,
            position.y - y_radius,
            position.x + x_radius,
            position.y + y_radius,
        ),
    };

    // Clip to the view so off-screen area is never sampled
    let x0 = min_x.max(0.0);
    let y0 = min_y.max(0.0);
    let x1 = max_x.min(f64::from(view.width));
    let y1 = max_y.min(f64::from(view.height));
    if x0 > x1 || y0 > y1 {
        return Vec::new();
    }

    let (step_x, step_y) = (step.0.max(f64::EPSILON), step.1.max(f64::EPSILON));
    let mut points = Vec::new();
    let mut y = y0;
    while y <= y1 {
        let mut x = x0;
        while x <= x1 {
            if contains(shape, x, y) {
                points.push((x, y));
            }
            x += step_x;
        }
        y += step_y;
    }

    if points.is_empty() {
        let center = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        if contains(shape, center.0, center.1) {
            points.push(center);
        }
    }
    points
}

fn contains(shape: &Shape, x: f64, y: f64) -> bool {
    let position = shape.position();
    match *shape.geometry() {
        Geometry::Rectangle { width, height } => {
            x >= position.x
                && x <= position.x + width
                && y >= position.y
                && y <= position.y + height
        }
        Geometry::Oval { x_radius, y_radius } => {
            let dx = (x - position.x) / x_radius;
            let dy = (y - position.y) / y_radius;
            dx * dx + dy * dy <= 1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::color::Color as ShapeColor;

    fn black() -> ShapeColor {
        ShapeColor::new(0.0, 0.0, 0.0).unwrap()
    }

    #[test]
    fn test_rectangle_fill_stays_inside() {
        let shape = Shape::rectangle("R", 10.0, 10.0, 4.0, 2.0, black()).unwrap();
        let points = fill_points(&shape, &ViewConfig::new(100, 100), (1.0, 1.0));
        assert_eq!(points.len(), 5 * 3);
        assert!(points
            .iter()
            .all(|&(x, y)| (10.0..=14.0).contains(&x) && (10.0..=12.0).contains(&y)));
    }

    #[test]
    fn test_oval_fill_excludes_corners() {
        let shape = Shape::oval("O", 50.0, 50.0, 10.0, 10.0, black()).unwrap();
        let points = fill_points(&shape, &ViewConfig::new(100, 100), (1.0, 1.0));
        assert!(points.contains(&(50.0, 50.0)));
        assert!(!points.contains(&(40.0, 40.0)));
    }

    #[test]
    fn test_tiny_shape_still_visible() {
        let shape = Shape::oval("O", 50.0, 50.0, 0.1, 0.1, black()).unwrap();
        let points = fill_points(&shape, &ViewConfig::new(100, 100), (5.0, 5.0));
        assert_eq!(points.len(), 1);
        let (x, y) = points[0];
        assert!((x - 50.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_off_view_shape_has_no_points() {
        let shape = Shape::rectangle("R", -50.0, -50.0, 10.0, 10.0, black()).unwrap();
        assert!(fill_points(&shape, &ViewConfig::new(100, 100), (1.0, 1.0)).is_empty());
    }
}
