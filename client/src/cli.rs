use std::{
    io,
    process::exit,
    sync::{Arc, RwLock, RwLockWriteGuard},
    time::Duration,
};

use anyhow::{Context, anyhow, bail};
use log::{info, warn};

use crate::{State, config::default_live_cells, renderer, ticker::TickerHost};

pub fn run_cli(state_arc: Arc<RwLock<State>>) {
    for line_res in io::stdin().lines() {
        let line = match line_res {
            Ok(line) => line,
            Err(e) => {
                warn!("Couldn't read stdin: {e}");
                break;
            }
        };
        let args = line.split_whitespace();

        match handle_cmd(&state_arc, args) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => println!("OK"),
            Err(e) => eprintln!("! {e:?}"),
        }
    }
}

pub fn start_ticker(state_arc: &Arc<RwLock<State>>, tick_millis: u64) -> anyhow::Result<()> {
    let mut state = write_state(state_arc)?;

    if state.ticker.is_some() {
        bail!("Already running");
    }

    let interval = Duration::from_millis(tick_millis);
    state.ticker = Some(TickerHost::start(state_arc.clone(), interval));

    info!("Running at {tick_millis}ms per generation");
    Ok(())
}

/// Runs a single command line. Returns text to print instead of the usual "OK", if any.
fn handle_cmd<'a, I>(state_arc: &Arc<RwLock<State>>, mut args: I) -> anyhow::Result<Option<String>>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            let mut state = write_state(state_arc)?;
            for _ in 0..times {
                state.game.tick();
            }

            return Ok(Some(renderer::render(&state.game)));
        }

        "run" => {
            let tick_millis = match args.next() {
                Some(millis) => millis.parse::<u64>()?,
                None => write_state(state_arc)?.config.tick_millis,
            };

            if tick_millis == 0 {
                bail!("Tick interval must be non-zero");
            }

            start_ticker(state_arc, tick_millis)?;
        }

        "stop" => {
            let ticker = write_state(state_arc)?.ticker.take();

            ticker.context("Not running")?.stop();
        }

        "rate" => {
            let tick_millis = args.next().context("missing millis")?.parse::<u64>()?;

            if tick_millis == 0 {
                bail!("Tick interval must be non-zero");
            }

            let mut state = write_state(state_arc)?;
            state
                .ticker
                .as_mut()
                .context("Not running")?
                .set_rate(Duration::from_millis(tick_millis))?;
        }

        "random" => {
            let mut state = write_state(state_arc)?;

            let draws = match args.next() {
                Some(draws) => draws.parse::<usize>()?,
                None => {
                    let (width, height) = state.game.grid().dimensions();
                    default_live_cells(width, height)
                }
            };

            state.game.reseed(draws);
            return Ok(Some(renderer::render(&state.game)));
        }

        "clear" => {
            write_state(state_arc)?.game.clear();
        }

        "resize" => {
            let width = args.next().context("missing width")?.parse::<usize>()?;

            let height = args.next().context("missing height")?.parse::<usize>()?;

            let draws = match args.next() {
                Some(draws) => draws.parse::<usize>()?,
                None => default_live_cells(width, height),
            };

            let mut state = write_state(state_arc)?;
            state.game.resize(width, height, draws)?;

            return Ok(Some(renderer::render(&state.game)));
        }

        "show" => {
            let state = state_arc.read().map_err(|_| anyhow!("State lock poisoned"))?;

            return Ok(Some(renderer::render(&state.game)));
        }

        "exit" => {
            exit(0);
        }

        _ => bail!("Unknown command"),
    }

    Ok(None)
}

fn write_state(state_arc: &RwLock<State>) -> anyhow::Result<RwLockWriteGuard<'_, State>> {
    state_arc.write().map_err(|_| anyhow!("State lock poisoned"))
}
