// Execution engine for album scripts

use super::command::{ClearTarget, Command};
use super::errors::{CommandError, SourceLine};
use crate::model::album::Album;
use crate::model::color::Color;
use crate::model::errors::AlbumError;
use crate::snapshot::SnapshotId;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// What happened to one script line
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Blank or comment line
    Skipped,
    /// The command changed the album
    Applied,
    /// The command named a shape that does not exist; nothing changed
    NoTarget,
    /// A snapshot was taken
    Captured(SnapshotId),
}

/// Summary of a whole script run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Lines read, including blank and comment lines
    pub lines: usize,
    /// Lines whose command changed the album
    pub applied: usize,
    /// Mutations addressed at a missing shape
    pub no_ops: usize,
    /// Failed lines, in script order
    pub errors: Vec<CommandError>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Applies script lines to an [`Album`], one line at a time
#[derive(Debug, Default)]
pub struct Interpreter {
    album: Album,
}

impl Interpreter {
    pub fn new(album: Album) -> Self {
        Interpreter { album }
    }

    /// Run every line of `source`, continuing past failed lines
    pub fn run_source(&mut self, source: &str) -> RunReport {
        let mut report = RunReport::default();

        for (index, text) in source.lines().enumerate() {
            report.lines += 1;
            match self.execute_line(index + 1, text) {
                Ok(Outcome::Skipped) => {}
                Ok(Outcome::NoTarget) => report.no_ops += 1,
                Ok(Outcome::Applied) | Ok(Outcome::Captured(_)) => report.applied += 1,
                Err(e) => {
                    warn!("{}", e);
                    report.errors.push(e);
                }
            }
        }

        info!(
            "Processed {} line(s): {} applied, {} no-op, {} failed",
            report.lines,
            report.applied,
            report.no_ops,
            report.errors.len()
        );
        report
    }

    /// Read a script file and run it
    pub fn run_file(&mut self, path: &Path) -> io::Result<RunReport> {
        let source = fs::read_to_string(path)?;
        debug!("Loaded script {} ({} bytes)", path.display(), source.len());
        Ok(self.run_source(&source))
    }

    /// Parse and apply a single line
    pub fn execute_line(&mut self, line: usize, text: &str) -> Result<Outcome, CommandError> {
        match Command::parse(line, text)? {
            None => Ok(Outcome::Skipped),
            Some(command) => {
                let outcome = self.execute_command(&command).map_err(|error| {
                    CommandError::Rejected {
                        error,
                        source: SourceLine::new(line, text),
                    }
                })?;
                if outcome == Outcome::NoTarget {
                    debug!(
                        "Line {}: '{}' names a shape that does not exist, ignored",
                        line,
                        command.keyword()
                    );
                }
                Ok(outcome)
            }
        }
    }

    /// Apply an already parsed command
    pub fn execute_command(
        &mut self,
        command: &Command,
    ) -> Result<Outcome, AlbumError> {
        let touched = |hit: bool| if hit { Outcome::Applied } else { Outcome::NoTarget };

        match command {
            Command::CreateShape {
                name,
                kind,
                x,
                y,
                p1,
                p2,
                rgb,
            } => {
                let color = Color::new(rgb[0], rgb[1], rgb[2])?;
                self.album
                    .scene_mut()
                    .create(*kind, name, *x, *y, *p1, *p2, color)?;
                Ok(Outcome::Applied)
            }
            Command::Move { name, x, y } => {
                let hit = self.album.scene_mut().move_shape(name, *x, *y)?;
                Ok(touched(hit))
            }
            Command::Recolor { name, rgb } => {
                let hit = self
                    .album
                    .scene_mut()
                    .recolor(name, rgb[0], rgb[1], rgb[2])?;
                Ok(touched(hit))
            }
            Command::Resize { name, p1, p2 } => {
                let hit = self.album.scene_mut().resize(name, *p1, *p2)?;
                Ok(touched(hit))
            }
            Command::Remove { name } => Ok(touched(self.album.scene_mut().remove(name))),
            Command::Snapshot { description } => {
                let id = self.album.snapshot(description);
                debug!("Captured snapshot {} ({:?})", id, description);
                Ok(Outcome::Captured(id))
            }
            Command::Clear { target } => {
                if matches!(target, ClearTarget::Shapes | ClearTarget::All) {
                    self.album.scene_mut().clear();
                }
                if matches!(target, ClearTarget::Snapshots | ClearTarget::All) {
                    self.album.archive_mut().clear();
                }
                Ok(Outcome::Applied)
            }
        }
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn album_mut(&mut self) -> &mut Album {
        &mut self.album
    }

    pub fn into_album(self) -> Album {
        self.album
    }
}
