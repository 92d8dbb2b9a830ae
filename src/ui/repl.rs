use std::io::{stdin, stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType, SetTitle},
};
use rand::Rng;

use crate::{
    model::{
        ids::{ChampionId, ItemId, RuneTreeId, SpellId},
        randomizer::{RandomizedResult, RandomizerSettings},
    },
    service::{
        asset_store::AssetStore,
        lookup::{IdNotFoundError, LookupService},
        preloader::ImagePreloader,
        randomizer::{RollError, Randomizer},
    },
    ui::report::{icon_urls, print_result, print_team},
};

use super::ReplError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewTeam,
    Reroll(usize),
    Lookup(String),
    Help,
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if let Some(id) = input.strip_prefix('?') {
        let id = id.trim();
        if !id.is_empty() {
            return Command::Lookup(id.to_string());
        }
    }

    match input {
        "0" | "q" | "quit" => Command::Quit,
        "a" | "all" => Command::NewTeam,
        _ => match input.parse::<usize>() {
            Ok(player) => Command::Reroll(player),
            Err(_) => Command::Help,
        },
    }
}

/// The current team and the engine that rolls it.
pub struct Session<'a, R: Rng> {
    randomizer: Randomizer<'a, R>,
    settings: RandomizerSettings,
    team: Vec<RandomizedResult>,
}

impl<'a, R: Rng> Session<'a, R> {
    pub fn new(randomizer: Randomizer<'a, R>, settings: RandomizerSettings) -> Self {
        Self {
            randomizer,
            settings,
            team: Vec::new(),
        }
    }

    pub fn team(&self) -> &[RandomizedResult] {
        &self.team
    }

    pub fn new_team(&mut self) -> Result<&[RandomizedResult], ReplError> {
        self.team = self.randomizer.generate_team_result(&self.settings)?;
        Ok(&self.team)
    }

    /// Rerolls a player, numbered from 1. The player's roll is untouched on failure.
    pub fn reroll(&mut self, player: usize) -> Result<&RandomizedResult, ReplError> {
        let index = player
            .checked_sub(1)
            .filter(|index| *index < self.team.len())
            .ok_or(ReplError::UnknownPlayer(player))?;

        let left = self.team[index].amount_of_rerolls_left;
        self.team[index] = self.randomizer.reroll_champion(&self.settings, left)?;
        Ok(&self.team[index])
    }
}

/// Resolves an id against champions, items, spells and rune trees in that order.
pub fn lookup(lookup: &LookupService, id: &str) -> Result<String, IdNotFoundError> {
    if let Ok(champion) = lookup.get_champion(&ChampionId::from(id)) {
        return Ok(format!("Champion {} ({})", champion.name, champion.id));
    }
    if let Ok(item) = lookup.get_item(&ItemId::from(id)) {
        let upgrades: Vec<&str> = lookup.upgrades_of(item).iter().map(|i| i.name.as_str()).collect();
        return Ok(if upgrades.is_empty() {
            format!("Item {} ({})", item.name, item.id)
        } else {
            format!("Item {} ({}), builds into {}", item.name, item.id, upgrades.join(", "))
        });
    }
    if let Ok(spell) = lookup.get_summoner_spell(&SpellId::from(id)) {
        return Ok(format!("Summoner spell {} ({})", spell.name, spell.modes.join(", ")));
    }
    if let Ok(tree_id) = id.parse::<i32>() {
        let tree = lookup.get_rune_tree(RuneTreeId::from(tree_id))?;
        return Ok(format!("Rune tree {} ({})", tree.name, tree.key));
    }
    Err(IdNotFoundError::Champ(ChampionId::from(id)))
}

pub fn run<R: Rng>(
    store: &AssetStore,
    session: &mut Session<R>,
    preloader: Option<&ImagePreloader>,
) -> Result<(), ReplError> {
    let snapshot = store.snapshot();
    let lookup_service = LookupService::new(&snapshot);

    let _ = execute!(
        stdout(),
        SetTitle("Rift Randomizer"),
        Clear(ClearType::All),
        MoveTo(0, 0),
    );
    println!("Game data version {}", snapshot.version);
    println!("==================================\n");

    session.new_team()?;
    warm_up(preloader, session.team());
    print_team(session.team());
    print_options(session.team().len());

    loop {
        match get_command()? {
            Command::Quit => break,
            Command::NewTeam => {
                session.new_team()?;
                warm_up(preloader, session.team());
                print_team(session.team());
            }
            Command::Reroll(player) => match session.reroll(player) {
                Ok(result) => {
                    warm_up(preloader, std::slice::from_ref(result));
                    print_result(player, result);
                    println!();
                }
                Err(ReplError::Roll(RollError::NoRerollsLeft)) => {
                    println!("Player {} has no rerolls left\n", player)
                }
                Err(ReplError::UnknownPlayer(_)) => println!("There is no player {}\n", player),
                Err(err) => return Err(err),
            },
            Command::Lookup(id) => match lookup(&lookup_service, &id) {
                Ok(description) => println!("{}\n", description),
                Err(err) => println!("{}\n", err),
            },
            Command::Help => print_options(session.team().len()),
        }
    }

    println!("\nBye bye!");
    Ok(())
}

fn warm_up(preloader: Option<&ImagePreloader>, team: &[RandomizedResult]) {
    if let Some(preloader) = preloader {
        let urls: Vec<String> = team.iter().flat_map(icon_urls).collect();
        preloader.preload_many(&urls);
    }
}

fn print_options(players: usize) {
    println!("( 1-{players})  Reroll player");
    println!("(   a)  Roll a new team");
    println!("(?<id>)  Look up a champion, item, spell or rune tree");
    println!("(   0)  Quit\n");
}

fn get_command() -> Result<Command, ReplError> {
    let mut s = String::new();
    print!("> Your choice: ");
    stdout().flush()?;
    if stdin().read_line(&mut s)? == 0 {
        return Ok(Command::Quit);
    }
    Ok(parse_command(&s))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::service::{
        shuffle::ShuffleMode,
        testing::{ready_store, sample_snapshot},
    };

    fn session(store: &AssetStore, players: usize, rerolls: u32) -> Session<'_, StdRng> {
        let settings = RandomizerSettings {
            amount_of_players: players,
            amount_of_rerolls: rerolls,
            ..RandomizerSettings::default()
        };
        Session::new(
            Randomizer::new(store, StdRng::seed_from_u64(11), ShuffleMode::Uniform),
            settings,
        )
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command("0\n"), Command::Quit);
        assert_eq!(parse_command(" a "), Command::NewTeam);
        assert_eq!(parse_command("3"), Command::Reroll(3));
        assert_eq!(parse_command("? Ahri"), Command::Lookup("Ahri".to_string()));
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("reroll"), Command::Help);
    }

    #[test]
    fn new_team_has_one_result_per_player() {
        let store = ready_store(sample_snapshot("14.1.1"));
        let mut session = session(&store, 4, 2);

        let team = session.new_team().unwrap();

        assert_eq!(team.len(), 4);
        assert!(team.iter().all(|result| result.amount_of_rerolls_left == 2));
    }

    #[test]
    fn reroll_spends_budget_of_that_player_only() {
        let store = ready_store(sample_snapshot("14.1.1"));
        let mut session = session(&store, 2, 1);
        session.new_team().unwrap();

        assert_eq!(session.reroll(2).unwrap().amount_of_rerolls_left, 0);
        assert_eq!(session.team()[0].amount_of_rerolls_left, 1);

        let before = session.team()[1].clone();
        assert!(matches!(session.reroll(2), Err(ReplError::Roll(RollError::NoRerollsLeft))));
        assert_eq!(session.team()[1], before);
    }

    #[test]
    fn reroll_rejects_unknown_players() {
        let store = ready_store(sample_snapshot("14.1.1"));
        let mut session = session(&store, 2, 1);
        session.new_team().unwrap();

        assert!(matches!(session.reroll(0), Err(ReplError::UnknownPlayer(0))));
        assert!(matches!(session.reroll(3), Err(ReplError::UnknownPlayer(3))));
    }

    #[test]
    fn lookup_resolves_each_kind() {
        let snapshot = sample_snapshot("14.1.1");
        let service = LookupService::new(&snapshot);

        assert_eq!(lookup(&service, "Ahri").unwrap(), "Champion Ahri (Ahri)");
        assert_eq!(lookup(&service, "3031").unwrap(), "Item Item 3031 (3031)");
        assert_eq!(lookup(&service, "SummonerSmite").unwrap(), "Summoner spell Smite (CLASSIC)");
        assert_eq!(lookup(&service, "8100").unwrap(), "Rune tree Domination (Domination)");
        assert!(lookup(&service, "9999").is_err());
        assert!(lookup(&service, "Nobody").is_err());
    }
}
