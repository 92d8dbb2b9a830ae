use serde::{Deserialize, Serialize};

use super::{champion::Champion, item::Item, rune::RuneTree, spell::SummonerSpell};

/// One consistent set of game data tagged with the feed version it came from.
///
/// Collections keep the order in which the feed listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub version: String,
    pub champions: Vec<Champion>,
    pub items: Vec<Item>,
    pub summoner_spells: Vec<SummonerSpell>,
    pub runes: Vec<RuneTree>,
}

impl AssetSnapshot {
    /// True only when every collection is populated; partial data counts as not ready.
    pub fn is_complete(&self) -> bool {
        !self.champions.is_empty()
            && !self.items.is_empty()
            && !self.summoner_spells.is_empty()
            && !self.runes.is_empty()
    }
}
