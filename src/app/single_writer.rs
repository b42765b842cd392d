//! Single-writer advisory lock for SQLite. A second process pointed at the
//! same database file exits with a clear error instead of corrupting WAL state.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc;
use std::thread;

const BUSY_MSG: &str = "Another stackpad instance is already using this database. \
Stop it first or point DATABASE_URL elsewhere.";

/// Lock file path next to the database file. In-memory databases need no lock.
fn lock_path(url: &str) -> Result<Option<PathBuf>, String> {
    if url.contains(":memory:") {
        return Ok(None);
    }
    let db_path = sqlx::sqlite::SqliteConnectOptions::from_str(url)
        .map_err(|e| format!("DATABASE_URL: {}", e))?
        .get_filename()
        .to_path_buf();
    let display = db_path.to_string_lossy();
    if display.is_empty() || display.contains(":memory:") {
        return Ok(None);
    }

    let file_name = db_path
        .file_name()
        .map(|n| format!("{}.lock", n.to_string_lossy()))
        .unwrap_or_else(|| "db.lock".into());
    Ok(Some(match db_path.parent() {
        Some(dir) => dir.join(&file_name),
        None => PathBuf::from(file_name),
    }))
}

/// Holds the advisory lock for the lifetime of the process. Dropping the
/// guard releases the lock.
pub struct SingleWriterGuard {
    release_tx: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl Drop for SingleWriterGuard {
    fn drop(&mut self) {
        let _ = self.release_tx.send(());
        if let Some(handle) = self.join.take() {
            let _ = handle.join();
        }
    }
}

/// Try to take the write lock for the database behind `url`.
/// Returns `Ok(None)` for in-memory databases, `Err` if another process holds it.
pub fn acquire(url: &str) -> Result<Option<SingleWriterGuard>, String> {
    let path = match lock_path(url)? {
        Some(p) => p,
        None => return Ok(None),
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .open(&path)
        .map_err(|e| format!("Lock file {}: {}", path.display(), e))?;

    // fd_lock guards borrow the lock they came from, so the lock must live on
    // a dedicated thread that parks until the guard asks it to release.
    let (result_tx, result_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let join = thread::spawn(move || {
        let mut lock = fd_lock::RwLock::new(file);
        match lock.try_write() {
            Ok(_guard) => {
                let _ = result_tx.send(Ok(()));
                let _ = release_rx.recv();
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                let _ = result_tx.send(Err(BUSY_MSG.to_string()));
            }
            Err(e) => {
                let _ = result_tx.send(Err(e.to_string()));
            }
        };
    });

    match result_rx
        .recv()
        .map_err(|_| "Lock thread exited without reporting".to_string())?
    {
        Ok(()) => Ok(Some(SingleWriterGuard {
            release_tx,
            join: Some(join),
        })),
        Err(msg) => Err(msg),
    }
}
