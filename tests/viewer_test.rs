// Tests for the terminal snapshot viewer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use shapes_album::config::ViewConfig;
use shapes_album::interpreter::engine::Interpreter;
use shapes_album::snapshot::SnapshotArchive;
use shapes_album::ui::app::{App, FocusedPane};

fn archive_from(source: &str) -> SnapshotArchive {
    let mut interpreter = Interpreter::default();
    let report = interpreter.run_source(source);
    assert!(report.is_clean(), "Script failed: {:?}", report.errors);
    interpreter.into_album().into_archive()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn screen_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>()
}

#[test]
fn test_arrow_keys_walk_snapshots() {
    let archive = archive_from("snapshot a\nsnapshot b\nsnapshot c\n");
    let mut app = App::new(archive, ViewConfig::default());
    assert_eq!(app.cursor.position(), 0);

    press(&mut app, KeyCode::Left);
    assert_eq!(app.cursor.position(), 0);
    assert_eq!(app.status_message, "Already at the first snapshot");

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.cursor.position(), 2);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.cursor.position(), 2);
    assert_eq!(app.status_message, "Already at the last snapshot");

    press(&mut app, KeyCode::Home);
    assert_eq!(app.cursor.position(), 0);
    press(&mut app, KeyCode::End);
    assert_eq!(app.cursor.position(), 2);
}

#[test]
fn test_tab_moves_arrows_to_details_scroll() {
    let archive = archive_from("snapshot a\nsnapshot b\n");
    let mut app = App::new(archive, ViewConfig::default());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused_pane, FocusedPane::Details);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.cursor.position(), 0);
    assert_eq!(app.details_scroll, 1);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.cursor.position(), 1);
    assert_eq!(app.details_scroll, 0);
}

#[test]
fn test_space_toggles_play_and_q_quits() {
    let archive = archive_from("snapshot a\nsnapshot b\n");
    let mut app = App::new(archive, ViewConfig::default());

    press(&mut app, KeyCode::Char(' '));
    assert!(app.is_playing);

    press(&mut app, KeyCode::Right);
    assert!(!app.is_playing);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_render_shows_current_snapshot() {
    let archive = archive_from(
        "shape Sun OVAL 500 500 100 100 255 200 0\nsnapshot Morning sky\n",
    );
    let mut app = App::new(archive, ViewConfig::default());

    let text = screen_text(&mut app);
    assert!(text.contains("Snapshots"));
    assert!(text.contains("Morning sky"));
    assert!(text.contains("Name: Sun"));
    assert!(text.contains("Snapshot 1/1"));
}

#[test]
fn test_render_empty_archive() {
    let mut app = App::new(SnapshotArchive::new(), ViewConfig::default());

    press(&mut app, KeyCode::Right);
    assert_eq!(app.status_message, "No snapshots to show");

    let text = screen_text(&mut app);
    assert!(text.contains("Snapshot 0/0"));
    assert!(text.contains("(nothing selected)"));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_select_prompt_jumps_to_id() {
    let archive = archive_from("snapshot a\nsnapshot b\nsnapshot c\n");
    let third = archive.ids()[2].to_string();
    let mut app = App::new(archive, ViewConfig::default());

    press(&mut app, KeyCode::Char('g'));
    assert!(app.select_input.is_some());
    type_text(&mut app, &third);
    assert_eq!(app.status_message, format!("Select id: {}", third));
    press(&mut app, KeyCode::Enter);

    assert!(app.select_input.is_none());
    assert_eq!(app.cursor.position(), 2);
    assert_eq!(app.status_message, format!("Selected snapshot {}", third));
}

#[test]
fn test_select_by_sequence_number() {
    let archive = archive_from("snapshot a\nsnapshot b\nsnapshot c\n");
    let mut app = App::new(archive, ViewConfig::default());

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "#0002");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.cursor.position(), 1);

    press(&mut app, KeyCode::Char('g'));
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.cursor.position(), 2);
}

#[test]
fn test_select_unknown_id_keeps_position() {
    let archive = archive_from("snapshot a\nsnapshot b\n");
    let mut app = App::new(archive, ViewConfig::default());
    press(&mut app, KeyCode::Right);

    press(&mut app, KeyCode::Char('g'));
    type_text(&mut app, "nope");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.status_message, "Select id: nop");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.cursor.position(), 1);
    assert_eq!(app.status_message, "No snapshot with id 'nop'");
}

#[test]
fn test_select_prompt_swallows_quit_and_cancels_on_esc() {
    let archive = archive_from("snapshot a\nsnapshot b\n");
    let mut app = App::new(archive, ViewConfig::default());

    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);

    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);
    assert!(app.select_input.is_none());
    assert_eq!(app.status_message, "Selection cancelled");
    assert_eq!(app.cursor.position(), 0);
}
