use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, PoisonError},
    thread,
};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::service::{asset_store::AssetStore, gameapi::client::DataFeed};

const PRELOAD_WORKERS: usize = 8;

type LoadCell = Arc<OnceCell<Result<Arc<[u8]>, PreloadError>>>;

/// Downloads icons ahead of time and keeps their bytes in memory.
///
/// Concurrent requests for the same URL share one download. A failed download
/// is forgotten, so asking again retries it.
pub struct ImagePreloader {
    feed: Arc<dyn DataFeed>,
    cells: Mutex<HashMap<String, LoadCell>>,
}

#[derive(Debug, Default)]
pub struct PreloadReport {
    pub loaded: usize,
    pub failed: Vec<PreloadError>,
}

impl ImagePreloader {
    pub fn new(feed: Arc<dyn DataFeed>) -> Self {
        Self {
            feed,
            cells: Mutex::new(HashMap::new()),
        }
    }

    fn cell(&self, url: &str) -> LoadCell {
        let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cells.entry(url.to_string()).or_default())
    }

    /// The icon's bytes, downloading them on first use.
    pub fn ensure_loaded(&self, url: &str) -> Result<Arc<[u8]>, PreloadError> {
        let cell = self.cell(url);
        let result = cell
            .get_or_init(|| {
                debug!(url, "Preloading image");
                self.feed.get_bytes(url).map(Arc::from).map_err(|err| PreloadError {
                    url: url.to_string(),
                    message: err.to_string(),
                })
            })
            .clone();

        if result.is_err() {
            let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
            if cells.get(url).map_or(false, |current| Arc::ptr_eq(current, &cell)) {
                cells.remove(url);
            }
        }
        result
    }

    /// Bytes of an already loaded icon; never starts a download.
    pub fn cached(&self, url: &str) -> Option<Arc<[u8]>> {
        let cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        match cells.get(url).and_then(|cell| cell.get()) {
            Some(Ok(bytes)) => Some(Arc::clone(bytes)),
            _ => None,
        }
    }

    pub fn is_loaded(&self, url: &str) -> bool {
        self.cached(url).is_some()
    }

    pub fn loaded_count(&self) -> usize {
        let cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
        cells
            .values()
            .filter(|cell| matches!(cell.get(), Some(Ok(_))))
            .count()
    }

    /// Loads every URL, spread over a few worker threads. Never fails; the
    /// report lists what could not be loaded.
    pub fn preload_many(&self, urls: &[String]) -> PreloadReport {
        if urls.is_empty() {
            return PreloadReport::default();
        }
        let chunk_size = (urls.len() + PRELOAD_WORKERS - 1) / PRELOAD_WORKERS;

        let results: Vec<Result<Arc<[u8]>, PreloadError>> = thread::scope(|scope| {
            let workers: Vec<_> = urls
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|url| self.ensure_loaded(url))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            workers
                .into_iter()
                .flat_map(|worker| {
                    worker.join().unwrap_or_else(|_| {
                        vec![Err(PreloadError {
                            url: String::new(),
                            message: "preload worker panicked".to_string(),
                        })]
                    })
                })
                .collect()
        });

        let mut report = PreloadReport::default();
        for result in results {
            match result {
                Ok(_) => report.loaded += 1,
                Err(err) => {
                    warn!("Failed to preload image: {}", err);
                    report.failed.push(err);
                }
            }
        }
        report
    }

    pub fn preload_champion_icons(&self, store: &AssetStore) -> PreloadReport {
        let snapshot = store.snapshot();
        let icons = store.icon_urls_for(&snapshot.version);
        let urls: Vec<String> = snapshot
            .champions
            .iter()
            .map(|champion| icons.champion(&champion.image.full))
            .collect();
        self.preload_many(&urls)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadError {
    pub url: String,
    pub message: String,
}

impl fmt::Display for PreloadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Could not load {}: {}", self.url, self.message)
    }
}

impl std::error::Error for PreloadError {}
