//! HTML document with one SVG drawing per snapshot

use crate::config::ViewConfig;
use crate::model::color::Color;
use crate::model::shape::{Geometry, Shape};
use crate::snapshot::{Snapshot, SnapshotArchive};
use std::fs;
use std::io;
use std::path::Path;

/// Render every snapshot of `archive`, in capture order
pub fn render_html(archive: &SnapshotArchive, view: &ViewConfig) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Shapes Photo Album</title>\n</head>\n<body>\n",
    );
    if archive.is_empty() {
        html.push_str("<p>No snapshots were taken.</p>\n");
    }
    for snapshot in archive.snapshots() {
        render_snapshot(&mut html, snapshot, view);
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Render and write the document to `path`
pub fn write_html(archive: &SnapshotArchive, view: &ViewConfig, path: &Path) -> io::Result<()> {
    fs::write(path, render_html(archive, view))
}

fn render_snapshot(html: &mut String, snapshot: &Snapshot, view: &ViewConfig) {
    html.push_str(&format!(
        "<div class=\"snapshot\" style=\"background-color:lightgrey;\">\n\
         <h2>{}</h2>\n<p>Timestamp: {}</p>\n<p>Description: {}</p>\n\
         <svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        escape(snapshot.id().as_str()),
        escape(snapshot.timestamp()),
        escape(snapshot.description()),
        view.width,
        view.height
    ));
    for shape in snapshot.shapes() {
        html.push_str(&shape_svg(shape, view));
        html.push('\n');
    }
    html.push_str("</svg>\n</div>\n");
}

/// SVG element for one shape
///
/// SVG's y axis points down, so positions are flipped against the view
/// height to keep rectangles anchored at their bottom-left corner.
pub fn shape_svg(shape: &Shape, view: &ViewConfig) -> String {
    let fill = fill(shape.color());
    let position = shape.position();
    let height = f64::from(view.height);
    match *shape.geometry() {
        Geometry::Rectangle {
            width,
            height: rect_height,
        } => format!(
            "<rect id=\"{}\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" />",
            escape(shape.name()),
            position.x,
            height - position.y - rect_height,
            width,
            rect_height,
            fill
        ),
        Geometry::Oval { x_radius, y_radius } => format!(
            "<ellipse id=\"{}\" cx=\"{:.1}\" cy=\"{:.1}\" rx=\"{:.1}\" ry=\"{:.1}\" fill=\"{}\" />",
            escape(shape.name()),
            position.x,
            height - position.y,
            x_radius,
            y_radius,
            fill
        ),
    }
}

fn fill(color: &Color) -> String {
    let (r, g, b) = color.to_rgb8();
    format!("rgb({},{},{})", r, g, b)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewConfig {
        ViewConfig::new(800, 600)
    }

    #[test]
    fn test_rectangle_is_anchored_bottom_left() {
        let shape = Shape::rectangle(
            "R1",
            10.0,
            20.0,
            50.0,
            30.0,
            Color::new(255.0, 0.0, 0.0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            shape_svg(&shape, &view()),
            "<rect id=\"R1\" x=\"10.0\" y=\"550.0\" width=\"50.0\" height=\"30.0\" fill=\"rgb(255,0,0)\" />"
        );
    }

    #[test]
    fn test_oval_uses_center() {
        let shape = Shape::oval(
            "O1",
            30.0,
            30.0,
            20.0,
            10.0,
            Color::new(0.0, 255.0, 0.0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            shape_svg(&shape, &view()),
            "<ellipse id=\"O1\" cx=\"30.0\" cy=\"570.0\" rx=\"20.0\" ry=\"10.0\" fill=\"rgb(0,255,0)\" />"
        );
    }

    #[test]
    fn test_escapes_markup() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_document_has_one_drawing_per_snapshot() {
        let square = Shape::rectangle(
            "Sq",
            0.0,
            0.0,
            100.0,
            100.0,
            Color::new(0.0, 0.0, 255.0).unwrap(),
        )
        .unwrap();
        let mut archive = SnapshotArchive::new();
        let first = archive.capture("Fish & <chips>", &[square.clone()]);
        let second = archive.capture("plain", &[]);

        let html = render_html(&archive, &view());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(html.matches("<div class=\"snapshot\"").count(), 2);
        assert_eq!(html.matches("</svg>").count(), 2);
        assert_eq!(html.matches("width=\"800\" height=\"600\"").count(), 2);

        assert!(html.contains(&format!("<h2>{}</h2>", first)));
        assert!(html.contains(&format!("<h2>{}</h2>", second)));
        assert!(html.contains("<p>Description: Fish &amp; &lt;chips&gt;</p>"));
        assert!(!html.contains("<chips>"));
        assert!(html.find(first.as_str()) < html.find(second.as_str()));

        // The square only appears in the first drawing
        assert_eq!(html.matches(&shape_svg(&square, &view())).count(), 1);
    }

    #[test]
    fn test_empty_archive() {
        let html = render_html(&SnapshotArchive::new(), &view());
        assert!(html.contains("No snapshots were taken."));
        assert!(!html.contains("<svg"));
    }
}
