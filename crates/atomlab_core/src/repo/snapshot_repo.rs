//! Atom snapshot repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Save and load the four `AtomConfiguration` fields under a named slot.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - History is never persisted; only the current configuration is.
//! - Write paths call `AtomConfiguration::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state as `RepoError::InvalidData`.

use crate::db::DbError;
use crate::model::atom::{AtomConfiguration, AtomValidationError};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot used when callers keep a single saved atom.
pub const DEFAULT_SNAPSHOT_SLOT: &str = "current";

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot persistence errors.
#[derive(Debug)]
pub enum RepoError {
    Validation(AtomValidationError),
    Db(DbError),
    EmptySlot,
    NotFound(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::EmptySlot => write!(f, "snapshot slot must not be empty"),
            Self::NotFound(slot) => write!(f, "snapshot not found: {slot}"),
            Self::InvalidData(message) => write!(f, "invalid persisted snapshot: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::EmptySlot | Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<AtomValidationError> for RepoError {
    fn from(value: AtomValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::from(value))
    }
}

/// Repository interface for atom snapshots.
pub trait SnapshotRepository {
    /// Inserts or replaces the snapshot stored under `slot`.
    fn save_snapshot(&self, slot: &str, config: &AtomConfiguration) -> RepoResult<()>;
    fn load_snapshot(&self, slot: &str) -> RepoResult<Option<AtomConfiguration>>;
    fn delete_snapshot(&self, slot: &str) -> RepoResult<()>;
    /// Slot names in ascending order.
    fn list_slots(&self) -> RepoResult<Vec<String>>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn save_snapshot(&self, slot: &str, config: &AtomConfiguration) -> RepoResult<()> {
        let slot = normalize_slot(slot)?;
        config.validate()?;

        self.conn.execute(
            "INSERT INTO atom_snapshots (slot, protons, neutrons, electrons, ion_mode)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(slot) DO UPDATE SET
                protons = excluded.protons,
                neutrons = excluded.neutrons,
                electrons = excluded.electrons,
                ion_mode = excluded.ion_mode,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                slot,
                config.protons,
                config.neutrons,
                config.electrons,
                bool_to_int(config.ion_mode),
            ],
        )?;
        debug!("event=snapshot_save module=repo status=ok slot={slot}");
        Ok(())
    }

    fn load_snapshot(&self, slot: &str) -> RepoResult<Option<AtomConfiguration>> {
        let slot = normalize_slot(slot)?;
        let row = self
            .conn
            .query_row(
                "SELECT protons, neutrons, electrons, ion_mode
                 FROM atom_snapshots
                 WHERE slot = ?1;",
                [slot],
                RawSnapshot::from_row,
            )
            .optional()?;

        row.map(RawSnapshot::into_configuration).transpose()
    }

    fn delete_snapshot(&self, slot: &str) -> RepoResult<()> {
        let slot = normalize_slot(slot)?;
        let changed = self
            .conn
            .execute("DELETE FROM atom_snapshots WHERE slot = ?1;", [slot])?;
        if changed == 0 {
            return Err(RepoError::NotFound(slot.to_string()));
        }
        Ok(())
    }

    fn list_slots(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT slot FROM atom_snapshots ORDER BY slot ASC;")?;
        let slots = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(slots)
    }
}

/// Column values as stored, before range checks.
struct RawSnapshot {
    protons: i64,
    neutrons: i64,
    electrons: i64,
    ion_mode: i64,
}

impl RawSnapshot {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            protons: row.get("protons")?,
            neutrons: row.get("neutrons")?,
            electrons: row.get("electrons")?,
            ion_mode: row.get("ion_mode")?,
        })
    }

    fn into_configuration(self) -> RepoResult<AtomConfiguration> {
        let ion_mode = match self.ion_mode {
            0 => false,
            1 => true,
            other => {
                return Err(RepoError::InvalidData(format!(
                    "invalid ion_mode value `{other}` in atom_snapshots.ion_mode"
                )));
            }
        };
        let config = AtomConfiguration {
            protons: column_to_u32("protons", self.protons)?,
            neutrons: column_to_u32("neutrons", self.neutrons)?,
            electrons: column_to_u32("electrons", self.electrons)?,
            ion_mode,
        };
        config
            .validate()
            .map_err(|err| RepoError::InvalidData(format!("{err} in atom_snapshots")))?;
        Ok(config)
    }
}

fn column_to_u32(column: &str, value: i64) -> RepoResult<u32> {
    u32::try_from(value).map_err(|_| {
        RepoError::InvalidData(format!(
            "value `{value}` out of range in atom_snapshots.{column}"
        ))
    })
}

fn normalize_slot(slot: &str) -> RepoResult<&str> {
    let trimmed = slot.trim();
    if trimmed.is_empty() {
        return Err(RepoError::EmptySlot);
    }
    Ok(trimmed)
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}
