// Integration tests for the album script interpreter

use shapes_album::interpreter::engine::{Interpreter, Outcome};
use shapes_album::model::errors::AlbumError;
use shapes_album::model::shape::{Geometry, Point, ShapeKind};

fn run(source: &str) -> (Interpreter, shapes_album::interpreter::engine::RunReport) {
    let mut interpreter = Interpreter::default();
    let report = interpreter.run_source(source);
    (interpreter, report)
}

#[test]
fn test_two_shapes_in_one_snapshot() {
    let source = r#"
        shape R1 RECTANGLE 10 10 50 50 255 0 0
        shape O1 OVAL 30 30 20 20 0 255 0
        snapshot First
    "#;

    let (interpreter, report) = run(source);
    assert!(report.is_clean(), "Unexpected errors: {:?}", report.errors);

    let archive = interpreter.album().archive();
    assert_eq!(archive.len(), 1);

    let snapshot = archive.get(0).expect("snapshot missing");
    assert_eq!(snapshot.description(), "First");
    assert_eq!(snapshot.shapes().len(), 2);

    let rect = &snapshot.shapes()[0];
    assert_eq!(rect.name(), "R1");
    assert_eq!(rect.kind(), ShapeKind::Rectangle);
    assert_eq!(rect.position(), Point::new(10.0, 10.0));
    assert_eq!(
        *rect.geometry(),
        Geometry::Rectangle {
            width: 50.0,
            height: 50.0
        }
    );
    assert_eq!(rect.color().to_rgb8(), (255, 0, 0));

    let oval = &snapshot.shapes()[1];
    assert_eq!(oval.name(), "O1");
    assert_eq!(oval.position(), Point::new(30.0, 30.0));
    assert_eq!(
        *oval.geometry(),
        Geometry::Oval {
            x_radius: 20.0,
            y_radius: 20.0
        }
    );
    assert_eq!(oval.color().to_rgb8(), (0, 255, 0));
}

#[test]
fn test_clear_empties_archive() {
    let source = "shape R1 RECTANGLE 10 10 30 30 255 255 0\nsnapshot s1\nclear\n";

    let (interpreter, report) = run(source);
    assert!(report.is_clean());

    let archive = interpreter.album().archive();
    assert_eq!(archive.len(), 0);
    assert!(archive.ids().is_empty());
    // Archive clear leaves the live scene alone
    assert!(interpreter.album().scene().get("R1").is_some());
}

#[test]
fn test_invalid_line_does_not_stop_run() {
    let source = "shape R1 RECTANGLE -10 -10 -20 -20 255 0 0\n\
                  shape R2 RECTANGLE 0 0 5 5 0 0 255\n\
                  snapshot after\n";

    let (interpreter, report) = run(source);
    assert_eq!(report.errors.len(), 1);

    let error = &report.errors[0];
    assert_eq!(error.line(), 1);
    assert!(matches!(
        error.album_error(),
        Some(AlbumError::Validation { .. })
    ));

    let scene = interpreter.album().scene();
    assert!(scene.get("R1").is_none());
    assert!(scene.get("R2").is_some());
    assert_eq!(interpreter.album().archive().len(), 1);
}

#[test]
fn test_snapshot_unaffected_by_later_commands() {
    let source = r#"
        shape R1 RECTANGLE 0 0 10 10 255 0 0
        snapshot before
        move R1 100 100
        resize R1 1 1
        color R1 0 0 0
        remove R1
        snapshot after
    "#;

    let (interpreter, report) = run(source);
    assert!(report.is_clean());

    let archive = interpreter.album().archive();
    let before = archive.get(0).expect("first snapshot");
    let shape = &before.shapes()[0];
    assert_eq!(shape.position(), Point::new(0.0, 0.0));
    assert_eq!(
        *shape.geometry(),
        Geometry::Rectangle {
            width: 10.0,
            height: 10.0
        }
    );
    assert_eq!(shape.color().to_rgb8(), (255, 0, 0));

    let after = archive.get(1).expect("second snapshot");
    assert!(after.shapes().is_empty());
}

#[test]
fn test_duplicate_name_keeps_first_shape() {
    let source = "shape A OVAL 1 1 2 2 0 0 0\nshape A RECTANGLE 9 9 3 3 0 0 0\n";

    let (interpreter, report) = run(source);
    assert_eq!(report.errors.len(), 1);
    assert!(matches!(
        report.errors[0].album_error(),
        Some(AlbumError::DuplicateName { .. })
    ));

    let scene = interpreter.album().scene();
    assert_eq!(scene.len(), 1);
    assert_eq!(scene.require("A").map(|s| s.kind()), Ok(ShapeKind::Oval));
}

#[test]
fn test_remove_twice_is_harmless() {
    let mut interpreter = Interpreter::default();
    interpreter
        .execute_line(1, "shape X RECTANGLE 0 0 1 1 0 0 0")
        .expect("create failed");

    assert_eq!(interpreter.execute_line(2, "remove X"), Ok(Outcome::Applied));
    assert_eq!(interpreter.execute_line(3, "remove X"), Ok(Outcome::NoTarget));
    assert!(interpreter.album().scene().is_empty());
}

#[test]
fn test_archive_ids_follow_snapshot_order() {
    let source = "snapshot one\nsnapshot two\nsnapshot three\n";

    let (interpreter, report) = run(source);
    assert_eq!(report.applied, 3);

    let archive = interpreter.album().archive();
    assert_eq!(archive.ids().len(), archive.len());
    for (id, snapshot) in archive.ids().iter().zip(archive.snapshots()) {
        assert_eq!(id, snapshot.id());
        let found = archive.by_id(id.as_str()).expect("lookup by id");
        assert_eq!(found.description(), snapshot.description());
    }

    let ids = archive.ids();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_report_counts_every_line() {
    let source = "# setup\n\nshape A OVAL 1 1 2 2 0 0 0\nmove ghost 3 3\nfrobnicate\nsnapshot done";

    let (_, report) = run(source);
    assert_eq!(report.lines, 6);
    assert_eq!(report.applied, 2);
    assert_eq!(report.no_ops, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line(), 5);
}
