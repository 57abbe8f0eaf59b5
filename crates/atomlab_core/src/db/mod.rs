//! Snapshot database bootstrap.
//!
//! # Responsibility
//! - Open the SQLite file (or in-memory database) that stores atom snapshots.
//! - Bring its schema up to date before any repository touches it.
//!
//! # Invariants
//! - Schema version lives in `PRAGMA user_version`.
//! - Errors raised while opening carry the `DbTarget` they were raised for.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Where a snapshot connection points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbTarget {
    Memory,
    File(PathBuf),
}

impl DbTarget {
    /// `memory` or `file`, as used in `db_open` log events.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::File(_) => "file",
        }
    }
}

impl Display for DbTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => f.write_str("in-memory database"),
            Self::File(path) => write!(f, "`{}`", path.display()),
        }
    }
}

#[derive(Debug)]
pub enum DbErrorKind {
    Sqlite(rusqlite::Error),
    /// The stored schema was written by a newer build.
    SchemaTooNew { db_version: u32, latest_supported: u32 },
}

impl Display for DbErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew {
                db_version,
                latest_supported,
            } => write!(
                f,
                "schema version {db_version} is newer than this build supports ({latest_supported})"
            ),
        }
    }
}

/// Snapshot storage error, tagged with its target when raised during open.
#[derive(Debug)]
pub struct DbError {
    target: Option<DbTarget>,
    kind: DbErrorKind,
}

impl DbError {
    pub fn schema_too_new(db_version: u32, latest_supported: u32) -> Self {
        Self {
            target: None,
            kind: DbErrorKind::SchemaTooNew {
                db_version,
                latest_supported,
            },
        }
    }

    pub(crate) fn at(mut self, target: DbTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn kind(&self) -> &DbErrorKind {
        &self.kind
    }

    /// `None` for errors raised after the connection was handed out.
    pub fn target(&self) -> Option<&DbTarget> {
        self.target.as_ref()
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.target {
            Some(target) => write!(f, "snapshot database {target}: {}", self.kind),
            None => write!(f, "snapshot database: {}", self.kind),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            DbErrorKind::Sqlite(err) => Some(err),
            DbErrorKind::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self {
            target: None,
            kind: DbErrorKind::Sqlite(value),
        }
    }
}
