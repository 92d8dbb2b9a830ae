use std::{env, path::PathBuf, time::Duration};

use crate::service::{
    cache::{FileStore, KeyValueStore, MemoryStore, SnapshotCache},
    gameapi::client::FeedEndpoints,
};

pub const DDRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";
pub const DEFAULT_LOCALE: &str = "en_US";
const CACHE_DIR_NAME: &str = "rift-randomizer";
const CACHE_RETENTION_DAYS: i64 = 7;
const REQUEST_TIMEOUT_SECS: u64 = 90;

/// Runtime settings for fetching and caching game data.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub locale: String,
    /// `None` keeps the cache in memory for the lifetime of the process.
    pub cache_dir: Option<PathBuf>,
    pub cache_retention: chrono::Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DDRAGON_BASE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            cache_dir: Some(default_cache_dir()),
            cache_retention: chrono::Duration::days(CACHE_RETENTION_DAYS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

pub fn default_cache_dir() -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push(CACHE_DIR_NAME);
    dir
}

impl Config {
    pub fn endpoints(&self) -> FeedEndpoints {
        FeedEndpoints::new(&self.base_url, &self.locale)
    }

    pub fn snapshot_cache(&self) -> SnapshotCache {
        let store: Box<dyn KeyValueStore> = match &self.cache_dir {
            Some(dir) => Box::new(FileStore::new(dir.clone())),
            None => Box::new(MemoryStore::new()),
        };
        SnapshotCache::new(store, self.cache_retention)
    }
}
