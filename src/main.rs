use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::{builder::RangedU64ValueParser, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rift_randomizer::{
    config::{Config, DDRAGON_BASE, DEFAULT_LOCALE},
    model::randomizer::{GameMode, RandomizerSettings},
    service::{
        asset_store::AssetStore,
        gameapi::client::{DataFeed, DdragonClient},
        preloader::ImagePreloader,
        randomizer::Randomizer,
        shuffle::ShuffleMode,
    },
    ui::repl::{self, Session},
};

/// Random League of Legends drafts: champion, items, summoner spells, runes and lane
#[derive(Parser, Debug)]
#[command(name = "rift-randomizer")]
#[command(version, about, long_about = None)]
struct Args {
    /// Game mode the roll is for (CLASSIC, ARAM, BRAWL, ARENA)
    #[arg(short = 'm', long, default_value = "CLASSIC")]
    mode: GameMode,

    /// Number of players in the team
    #[arg(
        short = 'p',
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    players: usize,

    /// Number of items per player
    #[arg(short = 'i', long, default_value_t = 6)]
    items: usize,

    /// Do not roll items
    #[arg(long)]
    no_items: bool,

    /// Do not roll summoner spells
    #[arg(long)]
    no_spells: bool,

    /// Do not roll rune trees
    #[arg(long)]
    no_runes: bool,

    /// Also roll a lane
    #[arg(short = 'l', long)]
    lanes: bool,

    /// Rerolls each player gets
    #[arg(short = 'r', long, default_value_t = 3)]
    rerolls: u32,

    /// Shuffle algorithm (uniform, comparator)
    #[arg(long, default_value = "uniform")]
    shuffle: ShuffleMode,

    /// Directory for the game data cache
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Keep the game data cache in memory only
    #[arg(long, conflicts_with = "cache_dir")]
    no_cache: bool,

    /// Base URL of the data feed
    #[arg(long, default_value = DDRAGON_BASE)]
    base_url: String,

    /// Locale of the data documents
    #[arg(long, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Download all champion icons before the first roll
    #[arg(long)]
    preload: bool,

    /// Log debug output to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            base_url: self.base_url.clone(),
            locale: self.locale.clone(),
            cache_dir: if self.no_cache {
                None
            } else {
                self.cache_dir.clone().or(defaults.cache_dir)
            },
            ..defaults
        }
    }

    fn settings(&self) -> RandomizerSettings {
        RandomizerSettings {
            mode: self.mode,
            items: !self.no_items,
            summoner_spells: !self.no_spells,
            runes: !self.no_runes,
            lanes: self.lanes,
            amount_of_items: Some(self.items),
            amount_of_players: self.players,
            amount_of_rerolls: self.rerolls,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.config();
    let feed: Arc<dyn DataFeed> = match DdragonClient::new(config.request_timeout) {
        Ok(client) => Arc::new(client),
        Err(error) => {
            println!("Error occured while initializing:\n{}\n", error);
            return ExitCode::FAILURE;
        }
    };

    let store = AssetStore::new(config.endpoints(), Arc::clone(&feed), config.snapshot_cache());
    store.fetch_assets();
    if !store.is_ready() {
        let reason = store.error().unwrap_or_else(|| "incomplete game data".to_string());
        println!("Error occured while loading game data:\n{}\n", reason);
        return ExitCode::FAILURE;
    }

    let preloader = args.preload.then(|| ImagePreloader::new(Arc::clone(&feed)));
    if let Some(preloader) = &preloader {
        let report = preloader.preload_champion_icons(&store);
        info!(loaded = report.loaded, failed = report.failed.len(), "Preloaded champion icons");
    }

    let randomizer = Randomizer::from_entropy(&store, args.shuffle);
    let mut session = Session::new(randomizer, args.settings());
    match repl::run(&store, &mut session, preloader.as_ref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            println!("Error occured while running REPL:\n{}\n", error);
            ExitCode::FAILURE
        }
    }
}
