//! Per-line error types for the command interpreter
//!
//! This module defines [`CommandError`], which represents every way a single
//! script line can fail: it could not be parsed, or it parsed but the album
//! rejected it.
//!
//! No command error is fatal. The interpreter reports it and moves on to the
//! next line.

use crate::model::errors::AlbumError;
use std::fmt;

/// Where in the script a command came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number
    pub line: usize,
    /// The line as written, without the trailing newline
    pub text: String,
}

impl SourceLine {
    pub fn new(line: usize, text: &str) -> Self {
        SourceLine {
            line,
            text: text.to_string(),
        }
    }
}

/// Errors that can occur while interpreting one script line
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// First token is not a known command keyword
    UnknownCommand { keyword: String, source: SourceLine },

    /// Line ended before a required argument
    MissingArgument {
        command: &'static str,
        expected: &'static str,
        source: SourceLine,
    },

    /// Tokens left over after a fixed-arity command
    UnexpectedArgument {
        command: &'static str,
        token: String,
        source: SourceLine,
    },

    /// Argument that should be a finite number is not
    InvalidNumber {
        expected: &'static str,
        token: String,
        source: SourceLine,
    },

    /// Shape type other than `rectangle` or `oval`
    UnknownShapeKind { token: String, source: SourceLine },

    /// `clear` with a target other than `snapshots`, `shapes` or `all`
    UnknownClearTarget { token: String, source: SourceLine },

    /// The command parsed, but the album refused it
    Rejected { error: AlbumError, source: SourceLine },
}

impl CommandError {
    pub fn source_line(&self) -> &SourceLine {
        match self {
            CommandError::UnknownCommand { source, .. } => source,
            CommandError::MissingArgument { source, .. } => source,
            CommandError::UnexpectedArgument { source, .. } => source,
            CommandError::InvalidNumber { source, .. } => source,
            CommandError::UnknownShapeKind { source, .. } => source,
            CommandError::UnknownClearTarget { source, .. } => source,
            CommandError::Rejected { source, .. } => source,
        }
    }

    /// 1-based line number of the offending line
    pub fn line(&self) -> usize {
        self.source_line().line
    }

    /// The album error behind a rejected command, if that is what this is
    pub fn album_error(&self) -> Option<&AlbumError> {
        match self {
            CommandError::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self.source_line();
        write!(f, "Line {}: ", source.line)?;
        match self {
            CommandError::UnknownCommand { keyword, .. } => {
                write!(f, "Unknown command '{}'", keyword)?
            }
            CommandError::MissingArgument {
                command, expected, ..
            } => write!(f, "'{}' is missing its {} argument", command, expected)?,
            CommandError::UnexpectedArgument { command, token, .. } => {
                write!(f, "Unexpected argument '{}' after '{}'", token, command)?
            }
            CommandError::InvalidNumber {
                expected, token, ..
            } => write!(f, "Expected a number for {}, got '{}'", expected, token)?,
            CommandError::UnknownShapeKind { token, .. } => write!(
                f,
                "Unknown shape type '{}' (expected RECTANGLE or OVAL)",
                token
            )?,
            CommandError::UnknownClearTarget { token, .. } => write!(
                f,
                "Unknown clear target '{}' (expected snapshots, shapes or all)",
                token
            )?,
            CommandError::Rejected { error, .. } => write!(f, "{}", error)?,
        }
        write!(f, " in `{}`", source.text.trim())
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.album_error()
            .map(|error| error as &(dyn std::error::Error + 'static))
    }
}
