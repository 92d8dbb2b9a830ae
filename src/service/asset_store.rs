use std::{
    collections::HashMap,
    fmt,
    sync::{mpsc, Arc, PoisonError, RwLock},
    thread,
};

use chrono::Utc;
use json::JsonValue;
use tracing::{debug, error, info, warn};

use crate::{
    model::{
        champion::Champion, item::Item, rune::RuneTree, snapshot::AssetSnapshot,
        spell::SummonerSpell,
    },
    service::{
        cache::SnapshotCache,
        gameapi::{
            client::{DataFeed, FeedDocument, FeedEndpoints, RequestError},
            parsing::{
                champion::parse_champions, item::parse_items, runes::parse_rune_trees,
                summoner::parse_summoner_spells, versions::parse_versions, ParsingError,
            },
        },
        icons::IconUrls,
    },
};

const VERSION_INDEX: &str = "versions.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Where the current snapshot came from on the last successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetSource {
    Cache,
    Feed,
}

/// Owner of the current game data snapshot.
///
/// The snapshot is only ever replaced as a whole; readers get an `Arc` to an
/// immutable snapshot and never see a partially written one.
pub struct AssetStore {
    endpoints: FeedEndpoints,
    feed: Arc<dyn DataFeed>,
    cache: SnapshotCache,
    snapshot: RwLock<Arc<AssetSnapshot>>,
    state: RwLock<LoadState>,
}

impl AssetStore {
    pub fn new(endpoints: FeedEndpoints, feed: Arc<dyn DataFeed>, cache: SnapshotCache) -> Self {
        Self {
            endpoints,
            feed,
            cache,
            snapshot: RwLock::new(Arc::new(AssetSnapshot::default())),
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Brings the snapshot up to the feed's latest version.
    ///
    /// Never fails from the caller's point of view: errors are logged and
    /// recorded in [`AssetStore::state`], and the previous snapshot stays in place.
    pub fn fetch_assets(&self) {
        self.set_state(LoadState::Loading);

        match self.try_fetch_assets() {
            Ok(source) => {
                let snapshot = self.snapshot();
                info!(
                    version = %snapshot.version,
                    ?source,
                    champions = snapshot.champions.len(),
                    items = snapshot.items.len(),
                    summoner_spells = snapshot.summoner_spells.len(),
                    runes = snapshot.runes.len(),
                    "Game data loaded"
                );
                self.set_state(LoadState::Loaded);
            }
            Err(err) => {
                error!("Failed to fetch assets: {}", err);
                self.set_state(LoadState::Failed(err.to_string()));
            }
        }
    }

    fn try_fetch_assets(&self) -> Result<AssetSource, AssetStoreError> {
        let latest = self.latest_version()?;

        if let Some(cached) = self.cache.load(Utc::now()) {
            if cached.version == latest {
                debug!(version = %latest, "Using cached snapshot");
                self.replace_snapshot(Arc::new(cached));
                return Ok(AssetSource::Cache);
            }
            debug!(cached = %cached.version, latest = %latest, "Cached snapshot is outdated");
        }

        let snapshot = Arc::new(self.fetch_snapshot(&latest)?);
        self.replace_snapshot(Arc::clone(&snapshot));

        if let Err(err) = self.cache.save(&snapshot, Utc::now()) {
            warn!("Failed to save to cache: {}", err);
        }

        Ok(AssetSource::Feed)
    }

    fn latest_version(&self) -> Result<String, AssetStoreError> {
        let text = self
            .feed
            .get_text(&self.endpoints.versions())
            .map_err(|err| AssetStoreError::FeedUnavailable(VERSION_INDEX, err))?;
        let versions = parse_document(VERSION_INDEX, &text, parse_versions)?;
        versions.into_iter().next().ok_or(AssetStoreError::EmptyVersionIndex)
    }

    /// Fetches the four data documents in parallel and waits for all of them.
    /// Any single failure fails the whole snapshot.
    fn fetch_snapshot(&self, version: &str) -> Result<AssetSnapshot, AssetStoreError> {
        let (tx, rx) = mpsc::channel();

        for document in FeedDocument::ALL {
            let feed = Arc::clone(&self.feed);
            let url = self.endpoints.document(version, document);
            let tx = tx.clone();

            thread::spawn(move || {
                let result = feed.get_text(&url);
                let _ = tx.send((document, result));
            });
        }

        // Drop the original sender so rx knows when all threads are done
        drop(tx);
        let mut bodies: HashMap<FeedDocument, Result<String, RequestError>> = rx.into_iter().collect();

        let mut body = |document: FeedDocument| match bodies.remove(&document) {
            Some(Ok(text)) => Ok(text),
            Some(Err(err)) => Err(AssetStoreError::FeedUnavailable(document.file_name(), err)),
            None => Err(AssetStoreError::WorkerLost(document.file_name())),
        };
        let champions = body(FeedDocument::Champions)?;
        let items = body(FeedDocument::Items)?;
        let summoner_spells = body(FeedDocument::SummonerSpells)?;
        let runes = body(FeedDocument::RuneTrees)?;

        let snapshot = AssetSnapshot {
            version: version.to_string(),
            champions: parse_document(FeedDocument::Champions.file_name(), &champions, parse_champions)?,
            items: parse_document(FeedDocument::Items.file_name(), &items, parse_items)?,
            summoner_spells: parse_document(
                FeedDocument::SummonerSpells.file_name(),
                &summoner_spells,
                parse_summoner_spells,
            )?,
            runes: parse_document(FeedDocument::RuneTrees.file_name(), &runes, parse_rune_trees)?,
        };

        match empty_document(&snapshot) {
            Some(document) => Err(AssetStoreError::IncompleteFeed(document.file_name())),
            None => Ok(snapshot),
        }
    }

    fn replace_snapshot(&self, snapshot: Arc<AssetSnapshot>) {
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    fn set_state(&self, state: LoadState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn state(&self) -> LoadState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state() == LoadState::Loading
    }

    pub fn error(&self) -> Option<String> {
        match self.state() {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// All four collections are populated.
    pub fn is_ready(&self) -> bool {
        self.snapshot().is_complete()
    }

    pub fn snapshot(&self) -> Arc<AssetSnapshot> {
        Arc::clone(&self.snapshot.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn version(&self) -> String {
        self.snapshot().version.clone()
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    pub fn champions(&self) -> Vec<Champion> {
        self.snapshot().champions.clone()
    }

    pub fn items(&self) -> Vec<Item> {
        self.snapshot().items.clone()
    }

    pub fn summoner_spells(&self) -> Vec<SummonerSpell> {
        self.snapshot().summoner_spells.clone()
    }

    pub fn runes(&self) -> Vec<RuneTree> {
        self.snapshot().runes.clone()
    }

    /// Icon URL builder bound to the current snapshot's version.
    pub fn icon_urls(&self) -> IconUrls {
        self.icon_urls_for(&self.version())
    }

    pub fn icon_urls_for(&self, version: &str) -> IconUrls {
        IconUrls::new(self.endpoints.base_url(), version)
    }

    pub fn champion_icon(&self, image: &str) -> String {
        self.icon_urls().champion(image)
    }

    pub fn item_icon(&self, image: &str) -> String {
        self.icon_urls().item(image)
    }

    pub fn summoner_spell_icon(&self, image: &str) -> String {
        self.icon_urls().summoner_spell(image)
    }

    pub fn rune_tree_icon(&self, icon_path: &str) -> String {
        self.icon_urls().rune_tree(icon_path)
    }
}

/// The first document whose collection came back empty.
fn empty_document(snapshot: &AssetSnapshot) -> Option<FeedDocument> {
    [
        (FeedDocument::Champions, snapshot.champions.is_empty()),
        (FeedDocument::Items, snapshot.items.is_empty()),
        (FeedDocument::SummonerSpells, snapshot.summoner_spells.is_empty()),
        (FeedDocument::RuneTrees, snapshot.runes.is_empty()),
    ]
    .into_iter()
    .find_map(|(document, empty)| empty.then_some(document))
}

fn parse_document<T>(
    name: &'static str,
    text: &str,
    parser: fn(&JsonValue) -> Result<T, ParsingError>,
) -> Result<T, AssetStoreError> {
    let json = json::parse(text).map_err(|err| AssetStoreError::MalformedFeed(name, err.into()))?;
    parser(&json).map_err(|err| AssetStoreError::MalformedFeed(name, err))
}

#[derive(Debug)]
pub enum AssetStoreError {
    FeedUnavailable(&'static str, RequestError),
    MalformedFeed(&'static str, ParsingError),
    EmptyVersionIndex,
    IncompleteFeed(&'static str),
    WorkerLost(&'static str),
}

impl fmt::Display for AssetStoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssetStoreError::FeedUnavailable(document, err) => {
                write!(f, "Failed to fetch game data ({}): {}", document, err)
            }
            AssetStoreError::MalformedFeed(document, err) => {
                write!(f, "Failed to parse game data ({}): {}", document, err)
            }
            AssetStoreError::EmptyVersionIndex => write!(f, "The version index is empty"),
            AssetStoreError::IncompleteFeed(document) => {
                write!(f, "Game data is incomplete ({} has no entries)", document)
            }
            AssetStoreError::WorkerLost(document) => {
                write!(f, "Fetch of {} ended without a result", document)
            }
        }
    }
}

impl std::error::Error for AssetStoreError {}
