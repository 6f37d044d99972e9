use std::{
    sync::{
        Arc, RwLock,
        mpsc::{self, Sender, TryRecvError},
    },
    thread,
    time::Duration,
};

use anyhow::Context;
use log::{debug, error};

use crate::{State, renderer};

/// Background thread advancing the shared game at a fixed interval.
pub struct TickerHost {
    stop_sender: Sender<()>,
    rate_sender: Sender<Duration>,
}

impl TickerHost {
    pub fn start(state_arc: Arc<RwLock<State>>, mut interval: Duration) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();
        let (rate_sender, rate_receiver) = mpsc::channel();

        thread::spawn(move || {
            debug!("Ticker started at {interval:?}");

            // A dropped host disconnects the channel, which stops the thread like `stop` does.
            while let Err(TryRecvError::Empty) = stop_receiver.try_recv() {
                let frame = {
                    let Ok(mut state) = state_arc.write() else {
                        error!("State lock poisoned, stopping ticker");
                        break;
                    };

                    state.game.tick();
                    renderer::render(&state.game)
                };

                println!("{frame}\n");

                if let Ok(rate) = rate_receiver.try_recv() {
                    interval = rate;
                }

                thread::sleep(interval);
            }

            debug!("Ticker stopped");
        });

        Self {
            stop_sender,
            rate_sender,
        }
    }

    pub fn stop(self) {
        // The thread is already gone if it bailed on a poisoned lock.
        let _ = self.stop_sender.send(());
    }

    pub fn set_rate(&mut self, interval: Duration) -> anyhow::Result<()> {
        self.rate_sender
            .send(interval)
            .context("Ticker has stopped")
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;

    use super::*;

    fn state_arc() -> Arc<RwLock<State>> {
        let config = Config {
            width: 6,
            height: 6,
            seed: Some(9),
            autostart: false,
            ..Config::default()
        };

        Arc::new(RwLock::new(State::new(config).unwrap()))
    }

    fn generation(state_arc: &RwLock<State>) -> u64 {
        state_arc.read().unwrap().game.generation()
    }

    #[test]
    fn dropped_host_stops_ticking() {
        let state_arc = state_arc();

        let host = TickerHost::start(state_arc.clone(), Duration::from_millis(1));
        thread::sleep(Duration::from_millis(30));
        drop(host);

        thread::sleep(Duration::from_millis(30));
        let stopped_at = generation(&state_arc);
        assert!(stopped_at > 0);

        thread::sleep(Duration::from_millis(30));
        assert_eq!(generation(&state_arc), stopped_at);
    }

    #[test]
    fn rate_change_fails_once_thread_is_gone() {
        let state_arc = state_arc();

        let poisoner = state_arc.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.write().unwrap();
            panic!("poisoning the state lock");
        })
        .join();

        let mut host = TickerHost::start(state_arc, Duration::from_millis(1));
        thread::sleep(Duration::from_millis(30));

        assert!(host.set_rate(Duration::from_millis(5)).is_err());
    }
}
