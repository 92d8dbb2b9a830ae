use std::{
    collections::HashMap,
    fmt, fs, io,
    path::PathBuf,
    sync::Mutex,
};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::snapshot::AssetSnapshot;

pub const STORAGE_KEY: &str = "lol-assets-cache";

/// Persistent string storage the snapshot cache is written to.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Stores every key as `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        fs::write(self.path(key), value)
    }
}

/// Process-local store, used when caching to disk is disabled.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, like a browser store over quota.
    pub fn read_only() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            read_only: true,
        }
    }

    fn entries(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory store poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"));
        }
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct CacheEntry {
    pub data: AssetSnapshot,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct CacheEntryRef<'a> {
    data: &'a AssetSnapshot,
    timestamp: DateTime<Utc>,
}

/// The single cached snapshot record.
///
/// Entries older than the retention window are ignored. Freshness against the
/// feed is decided by the caller comparing versions; age is only a fallback.
pub struct SnapshotCache {
    store: Box<dyn KeyValueStore>,
    retention: Duration,
}

impl SnapshotCache {
    pub fn new(store: Box<dyn KeyValueStore>, retention: Duration) -> Self {
        Self { store, retention }
    }

    pub fn read(&self) -> Result<Option<CacheEntry>, CacheError> {
        match self.store.get(STORAGE_KEY)? {
            Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            None => Ok(None),
        }
    }

    /// The cached snapshot if one exists, parses, has every collection populated
    /// and is inside the retention window.
    pub fn load(&self, now: DateTime<Utc>) -> Option<AssetSnapshot> {
        let entry = match self.read() {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                debug!("No cached snapshot");
                return None;
            }
            Err(err) => {
                warn!("Failed to load from cache: {}", err);
                return None;
            }
        };

        let age = now.signed_duration_since(entry.timestamp);
        if age >= self.retention {
            debug!(version = %entry.data.version, "Cached snapshot expired");
            return None;
        }

        if !entry.data.is_complete() {
            debug!(version = %entry.data.version, "Cached snapshot is incomplete");
            return None;
        }

        Some(entry.data)
    }

    pub fn save(&self, snapshot: &AssetSnapshot, now: DateTime<Utc>) -> Result<(), CacheError> {
        let entry = CacheEntryRef {
            data: snapshot,
            timestamp: now,
        };
        let json = serde_json::to_string(&entry)?;
        self.store.set(STORAGE_KEY, &json)?;
        Ok(())
    }
}

#[derive(Debug)]
pub enum CacheError {
    Corrupt(serde_json::Error),
    Storage(io::Error),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CacheError::Corrupt(err) => write!(f, "Cache entry is corrupt: {}", err),
            CacheError::Storage(err) => write!(f, "Cache storage error: {}", err),
        }
    }
}

impl std::error::Error for CacheError {}

impl From<serde_json::Error> for CacheError {
    fn from(error: serde_json::Error) -> Self {
        Self::Corrupt(error)
    }
}

impl From<io::Error> for CacheError {
    fn from(error: io::Error) -> Self {
        Self::Storage(error)
    }
}
