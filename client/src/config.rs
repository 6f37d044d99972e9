use std::{fs, path::Path};

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,

    /// How many random draws seed the grid. Defaults to a quarter of the cell count.
    pub max_init_live_cells: Option<usize>,

    /// Milliseconds between generations while running.
    pub tick_millis: u64,

    /// Fixed seed for reproducible runs. Seeded from the OS when absent.
    pub seed: Option<u64>,

    /// Whether to start ticking right away instead of waiting for `run`.
    pub autostart: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            max_init_live_cells: None,
            tick_millis: 1000,
            seed: None,
            autostart: true,
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let config_serialized =
            fs::read(path).with_context(|| format!("Couldn't read config {}", path.display()))?;

        serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "Grid dimensions must be non-zero, got {}x{}",
            self.width,
            self.height
        );
        ensure!(self.tick_millis > 0, "Tick interval must be non-zero");

        Ok(())
    }

    pub fn initial_live_cells(&self) -> usize {
        self.max_init_live_cells
            .unwrap_or_else(|| default_live_cells(self.width, self.height))
    }
}

pub fn default_live_cells(width: usize, height: usize) -> usize {
    width.saturating_mul(height) / 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!((config.width, config.height), (16, 16));
        assert_eq!(config.initial_live_cells(), 64);
        assert_eq!(config.tick_millis, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "width": 40, "height": 20, "seed": 3 }"#).unwrap();

        assert_eq!(config.width, 40);
        assert_eq!(config.height, 20);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.initial_live_cells(), 200);
        assert_eq!(config.tick_millis, 1000);
        assert!(config.autostart);
    }

    #[test]
    fn explicit_budget_wins() {
        let config: Config = serde_json::from_str(r#"{ "max_init_live_cells": 7 }"#).unwrap();

        assert_eq!(config.initial_live_cells(), 7);
    }

    #[test]
    fn rejects_bad_values() {
        let zero_width = Config {
            width: 0,
            ..Config::default()
        };
        assert!(zero_width.validate().is_err());

        let zero_tick = Config {
            tick_millis: 0,
            ..Config::default()
        };
        assert!(zero_tick.validate().is_err());
    }

    #[test]
    fn oversized_grid_fails_to_build() {
        let config = Config {
            width: usize::MAX,
            height: 2,
            ..Config::default()
        };

        assert_eq!(config.initial_live_cells(), usize::MAX / 4);
        assert!(crate::State::new(config).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/nonexistent/life.json").unwrap_err();

        assert!(err.to_string().contains("Couldn't read config"));
    }
}
