//! Fakes and sample data shared by the service tests.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::{Arc, Mutex},
};

use chrono::{Duration, Utc};

use crate::{
    model::{
        champion::Champion, image::Image, item::Item, rune::RuneTree, snapshot::AssetSnapshot,
        spell::SummonerSpell,
    },
    service::{
        asset_store::AssetStore,
        cache::{MemoryStore, SnapshotCache},
        gameapi::{
            client::{DataFeed, FeedDocument, FeedEndpoints, RequestError},
            parsing::fixtures,
        },
    },
};

pub const BASE_URL: &str = "https://ddragon.test";
pub const LOCALE: &str = "en_US";

pub fn endpoints() -> FeedEndpoints {
    FeedEndpoints::new(BASE_URL, LOCALE)
}

#[derive(Default)]
pub struct FakeFeed {
    responses: HashMap<String, String>,
    failing: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `versions` as the version index and the fixture documents for its first entry.
    pub fn ddragon(versions: &[&str]) -> Self {
        let endpoints = endpoints();
        let index = format!(
            "[{}]",
            versions.iter().map(|v| format!("\"{}\"", v)).collect::<Vec<_>>().join(",")
        );
        let mut feed = Self::new().with(&endpoints.versions(), &index);
        if let Some(latest) = versions.first() {
            for (document, body) in [
                (FeedDocument::Champions, fixtures::CHAMPIONS),
                (FeedDocument::Items, fixtures::ITEMS),
                (FeedDocument::SummonerSpells, fixtures::SUMMONER_SPELLS),
                (FeedDocument::RuneTrees, fixtures::RUNE_TREES),
            ] {
                feed = feed.with(&endpoints.document(latest, document), body);
            }
        }
        feed
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn document_requests(&self) -> usize {
        self.requests().iter().filter(|url| url.contains("/data/")).count()
    }
}

impl DataFeed for FakeFeed {
    fn get_text(&self, url: &str) -> Result<String, RequestError> {
        self.requests.lock().unwrap().push(url.to_string());
        if self.failing.contains(url) {
            return Err(RequestError::InvalidResponse(503, url.to_string()));
        }
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| RequestError::InvalidResponse(404, url.to_string()))
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, RequestError> {
        self.get_text(url).map(String::into_bytes)
    }
}

pub fn memory_cache() -> SnapshotCache {
    SnapshotCache::new(Box::new(MemoryStore::new()), Duration::days(7))
}

/// A store that adopts `snapshot` through the regular fetch path, via a matching cache entry.
pub fn ready_store(snapshot: AssetSnapshot) -> AssetStore {
    let feed = Arc::new(FakeFeed::new().with(
        &endpoints().versions(),
        &format!("[\"{}\"]", snapshot.version),
    ));
    let cache = memory_cache();
    cache.save(&snapshot, Utc::now()).unwrap();

    let store = AssetStore::new(endpoints(), feed, cache);
    store.fetch_assets();
    assert!(store.is_ready(), "{:?}", store.state());
    store
}

pub fn image(full: &str) -> Image {
    Image {
        full: full.to_string(),
        group: "test".to_string(),
        sprite: "test0.png".to_string(),
        h: 48,
        w: 48,
        x: 0,
        y: 0,
    }
}

pub fn champion(id: &str) -> Champion {
    Champion {
        id: id.into(),
        key: format!("{}", id.len()),
        name: id.to_string(),
        image: image(&format!("{}.png", id)),
    }
}

/// A final-tier item available on every mode's map.
pub fn item(id: &str, tags: &[&str]) -> Item {
    Item {
        id: id.into(),
        name: format!("Item {}", id),
        into: Vec::new(),
        maps: BTreeMap::from([(11, true), (12, true), (30, true), (35, true)]),
        consumed: false,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: image(&format!("{}.png", id)),
    }
}

pub fn spell(id: &str, modes: &[&str]) -> SummonerSpell {
    SummonerSpell {
        id: id.into(),
        name: id.trim_start_matches("Summoner").to_string(),
        description: String::new(),
        modes: modes.iter().map(|m| m.to_string()).collect(),
        image: image(&format!("{}.png", id)),
    }
}

pub fn rune_tree(id: i32, key: &str) -> RuneTree {
    RuneTree {
        id: id.into(),
        key: key.to_string(),
        name: key.to_string(),
        description: None,
        icon: format!("perk-images/Styles/{}.png", key),
        image: None,
    }
}

pub fn sample_snapshot(version: &str) -> AssetSnapshot {
    AssetSnapshot {
        version: version.to_string(),
        champions: ["Aatrox", "Ahri", "Akali", "Zed"].into_iter().map(champion).collect(),
        items: vec![
            item("3031", &["Damage", "CriticalStrike"]),
            item("3071", &["Damage"]),
            item("3089", &["SpellDamage"]),
            item("3006", &["Boots", "AttackSpeed"]),
            item("3877", &["GoldPer"]),
            item("2003", &["Consumable"]),
        ],
        summoner_spells: vec![
            spell("SummonerFlash", &["CLASSIC", "ARAM"]),
            spell("SummonerHeal", &["CLASSIC", "ARAM"]),
            spell("SummonerSmite", &["CLASSIC"]),
            spell("SummonerSnowball", &["ARAM"]),
        ],
        runes: vec![
            rune_tree(8000, "Precision"),
            rune_tree(8100, "Domination"),
            rune_tree(8200, "Sorcery"),
            rune_tree(8300, "Inspiration"),
            rune_tree(8400, "Resolve"),
        ],
    }
}
