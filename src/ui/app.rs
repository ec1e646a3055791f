//! Main TUI application state and logic

use crate::config::ViewConfig;
use crate::snapshot::{SnapshotArchive, SnapshotCursor};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which side pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Snapshots,
    Details,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Snapshots => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Snapshots,
        }
    }
}

/// The main application state
pub struct App {
    /// Snapshots being browsed; never modified by the viewer
    pub archive: SnapshotArchive,

    /// Drawing bounds in scene units
    pub view: ViewConfig,

    /// Which snapshot is on screen
    pub cursor: SnapshotCursor,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub list_scroll: usize,
    pub details_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether slideshow mode is active
    pub is_playing: bool,

    /// Last time the slideshow advanced
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,

    /// Text typed at the select prompt, while it is open
    pub select_input: Option<String>,
}

impl App {
    pub fn new(archive: SnapshotArchive, view: ViewConfig) -> Self {
        let status_message = if archive.is_empty() {
            String::from("No snapshots to show")
        } else {
            String::from("Ready!")
        };
        App {
            archive,
            view,
            cursor: SnapshotCursor::new(),
            focused_pane: FocusedPane::Snapshots,
            list_scroll: 0,
            details_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
            select_input: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Slideshow: advance once a second until the last snapshot
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.cursor.step(&self.archive, 1) {
                    self.details_scroll = 0;
                    self.status_message = "Playing...".to_string();
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Drawing on the left, list and details on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        let current = self.cursor.current(&self.archive).map(|s| &**s);

        super::panes::render_canvas_pane(frame, columns[0], current, &self.view);

        super::panes::render_snapshot_list(
            frame,
            right_rows[0],
            &self.archive,
            self.cursor.position(),
            self.focused_pane == FocusedPane::Snapshots,
            &mut self.list_scroll,
        );

        super::panes::render_details_pane(
            frame,
            right_rows[1],
            current,
            self.focused_pane == FocusedPane::Details,
            &mut self.details_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.cursor.position(),
            self.archive.len(),
            self.is_playing,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.select_input.is_some() {
            self.handle_select_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step(-1);
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step(1);
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Snapshots => {
                    self.is_playing = false;
                    self.step(-1);
                }
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Snapshots => {
                    self.is_playing = false;
                    self.step(1);
                }
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle slideshow (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now();
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter | KeyCode::End => {
                self.is_playing = false;
                self.cursor.last(&self.archive);
                self.details_scroll = 0;
                self.status_message = "Jumped to last snapshot".to_string();
            }
            KeyCode::Backspace | KeyCode::Home => {
                self.is_playing = false;
                self.cursor.first();
                self.details_scroll = 0;
                self.status_message = "Jumped to first snapshot".to_string();
            }
            KeyCode::Char('g') | KeyCode::Char('/') => {
                self.is_playing = false;
                self.select_input = Some(String::new());
                self.status_message = "Select id: ".to_string();
            }
            _ => {}
        }
    }

    /// Keys typed while the select prompt is open
    fn handle_select_key(&mut self, key: KeyEvent) {
        let Some(input) = self.select_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.select_input = None;
                self.status_message = "Selection cancelled".to_string();
            }
            KeyCode::Enter => {
                let wanted = input.trim().to_string();
                self.select_input = None;
                self.select(&wanted);
            }
            KeyCode::Backspace => {
                input.pop();
                self.status_message = format!("Select id: {}", input);
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.status_message = format!("Select id: {}", input);
            }
            _ => {}
        }
    }

    /// Show the snapshot with id `wanted`
    ///
    /// Besides the full id, the sequence number alone is accepted, with or
    /// without its `#` (e.g. `#0003` or `3`).
    fn select(&mut self, wanted: &str) {
        if wanted.is_empty() {
            self.status_message = "Selection cancelled".to_string();
            return;
        }

        let mut found = self.cursor.jump_to(&self.archive, wanted);
        if !found {
            if let Ok(seq) = wanted.trim_start_matches('#').parse::<u64>() {
                if let Some(id) = self.archive.ids().iter().find(|id| id.seq() == seq) {
                    found = self.cursor.jump_to(&self.archive, id.as_str());
                }
            }
        }

        if found {
            self.details_scroll = 0;
            self.status_message = match self.cursor.current(&self.archive) {
                Some(snapshot) => format!("Selected snapshot {}", snapshot.id()),
                None => "Selected snapshot".to_string(),
            };
        } else {
            self.status_message = format!("No snapshot with id '{}'", wanted);
        }
    }

    /// Move the cursor, reporting when an end of the album is reached
    fn step(&mut self, direction: isize) {
        if self.cursor.step(&self.archive, direction) {
            self.details_scroll = 0;
            self.status_message = if direction < 0 {
                "Previous snapshot".to_string()
            } else {
                "Next snapshot".to_string()
            };
        } else if self.archive.is_empty() {
            self.status_message = "No snapshots to show".to_string();
        } else if direction < 0 {
            self.status_message = "Already at the first snapshot".to_string();
        } else {
            self.status_message = "Already at the last snapshot".to_string();
        }
    }
}
