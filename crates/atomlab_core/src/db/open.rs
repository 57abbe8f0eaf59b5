//! Connection bootstrap for the snapshot database.
//!
//! # Invariants
//! - Returned connections have every migration applied.
//! - Each open emits exactly one `db_open` start event and one result event.

use super::migrations::apply_migrations;
use super::{DbError, DbResult, DbTarget};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a snapshot database file and migrates it.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    open_with(DbTarget::File(path.to_path_buf()), || Connection::open(path))
}

/// Opens a private in-memory snapshot database, used by tests and previews.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_with(DbTarget::Memory, Connection::open_in_memory)
}

fn open_with(
    target: DbTarget,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = target.mode();
    info!("event=db_open module=db status=start mode={mode} target={target}");

    let result = connect()
        .map_err(DbError::from)
        .and_then(|mut conn| bootstrap_connection(&mut conn).map(|()| conn))
        .map_err(|err| err.at(target));

    match &result {
        Ok(_) => info!(
            "event=db_open module=db status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    apply_migrations(conn)
}
