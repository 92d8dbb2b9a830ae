use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{champion::Champion, item::Item, lane::Lane, rune::RuneTree, spell::SummonerSpell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GameMode {
    Classic,
    Aram,
    Brawl,
    Arena,
}

impl GameMode {
    /// Mode name as used in the summoner spell `modes` lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "CLASSIC",
            GameMode::Aram => "ARAM",
            GameMode::Brawl => "BRAWL",
            GameMode::Arena => "ARENA",
        }
    }

    pub fn map_id(&self) -> u32 {
        match self {
            GameMode::Classic => 11, // Summoner's Rift
            GameMode::Aram => 12,    // Howling Abyss
            GameMode::Brawl => 35,
            GameMode::Arena => 30,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = UnknownGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CLASSIC" => Ok(GameMode::Classic),
            "ARAM" => Ok(GameMode::Aram),
            "BRAWL" => Ok(GameMode::Brawl),
            "ARENA" => Ok(GameMode::Arena),
            _ => Err(UnknownGameModeError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnknownGameModeError(String);

impl fmt::Display for UnknownGameModeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown game mode '{}', expected one of CLASSIC, ARAM, BRAWL, ARENA", self.0)
    }
}

impl std::error::Error for UnknownGameModeError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomizerSettings {
    pub mode: GameMode,
    pub items: bool,
    pub summoner_spells: bool,
    pub runes: bool,
    pub lanes: bool,
    pub amount_of_items: Option<usize>,
    pub amount_of_players: usize,
    pub amount_of_rerolls: u32,
}

impl Default for RandomizerSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Classic,
            items: true,
            summoner_spells: true,
            runes: true,
            lanes: false,
            amount_of_items: Some(6),
            amount_of_players: 1,
            amount_of_rerolls: 3,
        }
    }
}

/// An entity paired with the icon URL resolved for the current data version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithIcon<T> {
    #[serde(flatten)]
    pub asset: T,
    pub icon_url: String,
}

impl<T> WithIcon<T> {
    pub fn new(asset: T, icon_url: String) -> Self {
        Self { asset, icon_url }
    }
}

/// One player's roll. Optional parts are present exactly when enabled in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomizedResult {
    pub champion: WithIcon<Champion>,
    pub items: Option<Vec<WithIcon<Item>>>,
    pub summoner_spells: Option<Vec<WithIcon<SummonerSpell>>>,
    pub runes: Option<Vec<WithIcon<RuneTree>>>,
    pub lane: Option<Lane>,
    pub amount_of_rerolls_left: u32,
    pub amount_of_rerolls: u32,
}

impl RandomizedResult {
    pub fn can_reroll(&self) -> bool {
        self.amount_of_rerolls_left > 0
    }
}
