use std::{collections::HashSet, fmt, iter};

use once_cell::sync::Lazy;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

use crate::{
    model::{
        champion::Champion,
        item::Item,
        lane::{all_lanes, Lane},
        randomizer::{RandomizedResult, RandomizerSettings, WithIcon},
        rune::RuneTree,
        spell::SummonerSpell,
    },
    service::{
        asset_store::AssetStore,
        shuffle::{shuffled, ShuffleMode},
    },
};

const DISALLOWED_TAGS: [&str; 2] = ["Consumable", "Trinket"];
const BOOTS_TAG: &str = "Boots";
/// Ids at or below this are legacy or special items.
const MIN_ITEM_ID: u32 = 2000;
const SUMMONER_SPELLS_PER_PLAYER: usize = 2;
const RUNE_TREES_PER_PLAYER: usize = 2;

static DISALLOWED_ITEM_IDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "3600", "3599", "3902", "3901", "3903", "3330", "1508", "1509", "1510", "1511", "1512",
        "1515", "1516", "1521", "1522", "1523", "1503", "3865", "3866", "3011", "7050",
    ]
    .into_iter()
    .collect()
});

static SUPPORT_ITEM_IDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["3877", "3876", "3871", "3870", "3869"].into_iter().collect());

/// Whether `item` may be rolled on the given map.
pub fn is_eligible_item(item: &Item, map_id: u32) -> bool {
    item.is_available_on(map_id)
        && item.is_final_tier()
        && !item.tags.iter().any(|tag| DISALLOWED_TAGS.contains(&tag.as_str()))
        && !DISALLOWED_ITEM_IDS.contains(item.id.as_str())
        && item.id.numeric().map_or(false, |id| id > MIN_ITEM_ID)
        && !item.consumed
}

pub fn is_support_item(item: &Item) -> bool {
    SUPPORT_ITEM_IDS.contains(item.id.as_str())
}

pub fn is_boots(item: &Item) -> bool {
    item.has_tag(BOOTS_TAG)
}

/// Categories a selection may hold at most one item of.
const EXCLUSIVE_CATEGORIES: [fn(&Item) -> bool; 2] = [is_support_item, is_boots];

fn takes_taken_slot(candidate: &Item, selection: &[&Item]) -> bool {
    EXCLUSIVE_CATEGORIES.iter().any(|in_category| {
        in_category(candidate) && selection.iter().any(|selected| in_category(selected))
    })
}

/// Rolls champions, items, spells, rune trees and lanes from a ready [`AssetStore`].
pub struct Randomizer<'a, R: Rng> {
    store: &'a AssetStore,
    rng: R,
    shuffle_mode: ShuffleMode,
}

impl<'a> Randomizer<'a, StdRng> {
    pub fn from_entropy(store: &'a AssetStore, shuffle_mode: ShuffleMode) -> Self {
        Self::new(store, StdRng::from_entropy(), shuffle_mode)
    }
}

impl<'a, R: Rng> Randomizer<'a, R> {
    pub fn new(store: &'a AssetStore, rng: R, shuffle_mode: ShuffleMode) -> Self {
        Self {
            store,
            rng,
            shuffle_mode,
        }
    }

    fn shuffle<T>(&mut self, items: Vec<T>) -> Vec<T> {
        shuffled(items, self.shuffle_mode, &mut self.rng)
    }

    pub fn random_items(&mut self, settings: &RandomizerSettings) -> Vec<WithIcon<Item>> {
        let snapshot = self.store.snapshot();
        let icons = self.store.icon_urls_for(&snapshot.version);
        let map_id = settings.mode.map_id();

        let eligible: Vec<&Item> = snapshot
            .items
            .iter()
            .filter(|item| is_eligible_item(item, map_id))
            .collect();

        let amount = settings.amount_of_items.unwrap_or(0);
        let selection: Vec<&Item> = self.shuffle(eligible.clone()).into_iter().take(amount).collect();
        let selection = self.keep_single(selection, &eligible, is_support_item);
        let selection = self.keep_single(selection, &eligible, is_boots);

        debug!(mode = %settings.mode, eligible = eligible.len(), rolled = selection.len(), "Rolled items");

        selection
            .into_iter()
            .map(|item| WithIcon::new(item.clone(), icons.item(&item.image.full)))
            .collect()
    }

    /// Keeps the first selected member of a category and swaps the others for
    /// random pool items that are not selected yet and would not put a second
    /// member of any exclusive category into the selection. With too few
    /// candidates the selection comes back shorter.
    fn keep_single<'i>(
        &mut self,
        selection: Vec<&'i Item>,
        pool: &[&'i Item],
        is_member: fn(&Item) -> bool,
    ) -> Vec<&'i Item> {
        let members: Vec<&Item> = selection.iter().copied().filter(|item| is_member(item)).collect();
        let Some(&kept) = members.first() else {
            return selection;
        };
        if members.len() == 1 {
            return selection;
        }
        let excess = members.len() - 1;

        let repaired: Vec<&Item> = selection
            .iter()
            .copied()
            .filter(|item| !is_member(item))
            .chain(iter::once(kept))
            .collect();
        let candidates: Vec<&Item> = pool
            .iter()
            .copied()
            .filter(|item| {
                !is_member(item)
                    && !selection.iter().any(|selected| selected.id == item.id)
                    && !takes_taken_slot(item, &repaired)
            })
            .collect();
        let replacements: Vec<&Item> = self.shuffle(candidates).into_iter().take(excess).collect();

        repaired.into_iter().chain(replacements).collect()
    }

    pub fn random_summoner_spells(&mut self, settings: &RandomizerSettings) -> Vec<WithIcon<SummonerSpell>> {
        let snapshot = self.store.snapshot();
        let icons = self.store.icon_urls_for(&snapshot.version);

        let available: Vec<&SummonerSpell> = snapshot
            .summoner_spells
            .iter()
            .filter(|spell| spell.supports_mode(settings.mode.as_str()))
            .collect();

        self.shuffle(available)
            .into_iter()
            .take(SUMMONER_SPELLS_PER_PLAYER)
            .map(|spell| WithIcon::new(spell.clone(), icons.summoner_spell(&spell.image.full)))
            .collect()
    }

    pub fn random_rune_trees(&mut self, count: usize) -> Vec<WithIcon<RuneTree>> {
        let snapshot = self.store.snapshot();
        let icons = self.store.icon_urls_for(&snapshot.version);

        self.shuffle(snapshot.runes.iter().collect())
            .into_iter()
            .take(count)
            .map(|tree| WithIcon::new(tree.clone(), icons.rune_tree(&tree.icon)))
            .collect()
    }

    pub fn random_lane(&mut self) -> Lane {
        let lanes = all_lanes();
        lanes[self.rng.gen_range(0..lanes.len())].clone()
    }

    /// `None` only when no champions are loaded.
    pub fn random_champion(&mut self) -> Option<WithIcon<Champion>> {
        let snapshot = self.store.snapshot();
        let champion = snapshot.champions.choose(&mut self.rng)?;
        let icons = self.store.icon_urls_for(&snapshot.version);
        Some(WithIcon::new(champion.clone(), icons.champion(&champion.image.full)))
    }

    pub fn generate_random_result(
        &mut self,
        settings: &RandomizerSettings,
        amount_of_rerolls_left: u32,
    ) -> Result<RandomizedResult, RollError> {
        let champion = self.random_champion().ok_or(RollError::AssetsNotReady)?;

        Ok(RandomizedResult {
            champion,
            items: settings.items.then(|| self.random_items(settings)),
            summoner_spells: settings
                .summoner_spells
                .then(|| self.random_summoner_spells(settings)),
            runes: settings
                .runes
                .then(|| self.random_rune_trees(RUNE_TREES_PER_PLAYER)),
            lane: settings.lanes.then(|| self.random_lane()),
            amount_of_rerolls_left,
            amount_of_rerolls: settings.amount_of_rerolls,
        })
    }

    /// One independent result per player, each starting with the full reroll budget.
    pub fn generate_team_result(&mut self, settings: &RandomizerSettings) -> Result<Vec<RandomizedResult>, RollError> {
        (0..settings.amount_of_players)
            .map(|_| self.generate_random_result(settings, settings.amount_of_rerolls))
            .collect()
    }

    /// Rolls a fresh result for one player, spending one reroll.
    pub fn reroll_champion(
        &mut self,
        settings: &RandomizerSettings,
        amount_of_rerolls_left: u32,
    ) -> Result<RandomizedResult, RollError> {
        let remaining = amount_of_rerolls_left
            .checked_sub(1)
            .ok_or(RollError::NoRerollsLeft)?;
        self.generate_random_result(settings, remaining)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    AssetsNotReady,
    NoRerollsLeft,
}

impl fmt::Display for RollError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RollError::AssetsNotReady => write!(f, "Game data is not loaded yet"),
            RollError::NoRerollsLeft => write!(f, "No rerolls left"),
        }
    }
}

impl std::error::Error for RollError {}
