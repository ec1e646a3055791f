//! Command parsing
//!
//! Turns one script line into a typed [`Command`]. The grammar is
//! whitespace-delimited with a case-insensitive keyword:
//!
//! ```text
//! shape <name> <RECTANGLE|OVAL> <x> <y> <p1> <p2> <r> <g> <b>
//! move <name> <x> <y>
//! color <name> <r> <g> <b>
//! resize <name> <p1> <p2>
//! remove <name>
//! snapshot [description...]
//! clear [snapshots|shapes|all]
//! ```
//!
//! Blank lines and lines starting with `#` carry no command.

use super::errors::{CommandError, SourceLine};
use crate::model::shape::ShapeKind;

/// What a `clear` command empties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Snapshots,
    Shapes,
    All,
}

/// A parsed script command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateShape {
        name: String,
        kind: ShapeKind,
        x: f64,
        y: f64,
        p1: f64,
        p2: f64,
        rgb: [f64; 3],
    },
    Move {
        name: String,
        x: f64,
        y: f64,
    },
    Recolor {
        name: String,
        rgb: [f64; 3],
    },
    Resize {
        name: String,
        p1: f64,
        p2: f64,
    },
    Remove {
        name: String,
    },
    Snapshot {
        description: String,
    },
    Clear {
        target: ClearTarget,
    },
}

impl Command {
    /// Parse one line; `Ok(None)` for blank and comment lines
    pub fn parse(line: usize, text: &str) -> Result<Option<Command>, CommandError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let source = SourceLine::new(line, text);
        CommandParser::new(trimmed, &source).parse().map(Some)
    }

    /// Keyword as written in scripts
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::CreateShape { .. } => "shape",
            Command::Move { .. } => "move",
            Command::Recolor { .. } => "color",
            Command::Resize { .. } => "resize",
            Command::Remove { .. } => "remove",
            Command::Snapshot { .. } => "snapshot",
            Command::Clear { .. } => "clear",
        }
    }
}

/// Token cursor over a single non-blank line
struct CommandParser<'a> {
    line: &'a str,
    tokens: Vec<&'a str>,
    position: usize,
    source: &'a SourceLine,
    command: &'static str,
}

impl<'a> CommandParser<'a> {
    fn new(line: &'a str, source: &'a SourceLine) -> Self {
        CommandParser {
            line,
            tokens: line.split_whitespace().collect(),
            position: 0,
            source,
            command: "",
        }
    }

    fn parse(mut self) -> Result<Command, CommandError> {
        let keyword = self.advance().unwrap_or_default();
        let command = match keyword.to_ascii_lowercase().as_str() {
            "shape" => {
                self.command = "shape";
                let name = self.expect_word("name")?;
                let kind = self.expect_kind()?;
                let x = self.expect_number("x")?;
                let y = self.expect_number("y")?;
                let p1 = self.expect_number("first size parameter")?;
                let p2 = self.expect_number("second size parameter")?;
                let rgb = self.expect_rgb()?;
                Command::CreateShape {
                    name,
                    kind,
                    x,
                    y,
                    p1,
                    p2,
                    rgb,
                }
            }
            "move" => {
                self.command = "move";
                let name = self.expect_word("name")?;
                let x = self.expect_number("x")?;
                let y = self.expect_number("y")?;
                Command::Move { name, x, y }
            }
            "color" => {
                self.command = "color";
                let name = self.expect_word("name")?;
                let rgb = self.expect_rgb()?;
                Command::Recolor { name, rgb }
            }
            "resize" => {
                self.command = "resize";
                let name = self.expect_word("name")?;
                let p1 = self.expect_number("first size parameter")?;
                let p2 = self.expect_number("second size parameter")?;
                Command::Resize { name, p1, p2 }
            }
            "remove" => {
                self.command = "remove";
                let name = self.expect_word("name")?;
                Command::Remove { name }
            }
            "snapshot" => {
                // Free text: everything after the keyword, inner spacing kept
                let description = self.line[keyword.len()..].trim().to_string();
                return Ok(Command::Snapshot { description });
            }
            "clear" => {
                self.command = "clear";
                let target = match self.advance() {
                    None => ClearTarget::Snapshots,
                    Some(token) => match token.to_ascii_lowercase().as_str() {
                        "snapshots" => ClearTarget::Snapshots,
                        "shapes" => ClearTarget::Shapes,
                        "all" => ClearTarget::All,
                        _ => {
                            return Err(CommandError::UnknownClearTarget {
                                token: token.to_string(),
                                source: self.source.clone(),
                            })
                        }
                    },
                };
                Command::Clear { target }
            }
            _ => {
                return Err(CommandError::UnknownCommand {
                    keyword: keyword.to_string(),
                    source: self.source.clone(),
                })
            }
        };
        self.expect_end()?;
        Ok(command)
    }

    fn advance(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position).copied();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn expect_word(&mut self, expected: &'static str) -> Result<String, CommandError> {
        self.advance()
            .map(str::to_string)
            .ok_or_else(|| self.missing(expected))
    }

    fn expect_kind(&mut self) -> Result<ShapeKind, CommandError> {
        let token = self.advance().ok_or_else(|| self.missing("shape type"))?;
        token
            .parse::<ShapeKind>()
            .map_err(|_| CommandError::UnknownShapeKind {
                token: token.to_string(),
                source: self.source.clone(),
            })
    }

    fn expect_number(&mut self, expected: &'static str) -> Result<f64, CommandError> {
        let token = self.advance().ok_or_else(|| self.missing(expected))?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CommandError::InvalidNumber {
                expected,
                token: token.to_string(),
                source: self.source.clone(),
            }),
        }
    }

    fn expect_rgb(&mut self) -> Result<[f64; 3], CommandError> {
        Ok([
            self.expect_number("red")?,
            self.expect_number("green")?,
            self.expect_number("blue")?,
        ])
    }

    fn expect_end(&mut self) -> Result<(), CommandError> {
        match self.advance() {
            None => Ok(()),
            Some(token) => Err(CommandError::UnexpectedArgument {
                command: self.command,
                token: token.to_string(),
                source: self.source.clone(),
            }),
        }
    }

    fn missing(&self, expected: &'static str) -> CommandError {
        CommandError::MissingArgument {
            command: self.command,
            expected,
            source: self.source.clone(),
        }
    }
}
