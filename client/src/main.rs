use std::{
    env,
    sync::{Arc, RwLock},
};

use config::Config;
use libgame::Game;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use ticker::TickerHost;

mod cli;
mod config;
mod renderer;
mod ticker;

pub struct State {
    game: Game<StdRng>,
    config: Config,
    ticker: Option<TickerHost>,
}

impl State {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let game = Game::new(
            config.width,
            config.height,
            config.initial_live_cells(),
            rng,
        )?;

        Ok(Self {
            game,
            config,
            ticker: None,
        })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(config_path)?,
        None => Config::default(),
    };

    info!(
        "Starting {}x{} simulation with {} initial draws",
        config.width,
        config.height,
        config.initial_live_cells()
    );

    let state = State::new(config)?;
    println!("{}", renderer::render(&state.game));

    let state_arc = Arc::new(RwLock::new(state));

    if config.autostart {
        cli::start_ticker(&state_arc, config.tick_millis)?;
    }

    cli::run_cli(state_arc);

    Ok(())
}
