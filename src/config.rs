//! Runtime configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `GROW2048_SEED` | random | Seed for tile spawns |
//! | `GROW2048_CELL_WIDTH` | 7 | Terminal columns per board cell |
//! | `GROW2048_CELL_HEIGHT` | 4 | Terminal rows per board cell |
//! | `GROW2048_MIN_SWIPE` | 2 | Mouse drag distance (cells) that counts as a swipe |

use std::env;
use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::input::DEFAULT_MIN_SWIPE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed, or None to draw one at startup.
    pub seed: Option<u64>,
    pub cell_width: u16,
    pub cell_height: u16,
    pub min_swipe: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            cell_width: 7,
            cell_height: 4,
            min_swipe: DEFAULT_MIN_SWIPE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let seed = lookup("GROW2048_SEED")
            .map(|raw| parse_var::<u64>("GROW2048_SEED", &raw))
            .transpose()?;
        let cell_width = lookup("GROW2048_CELL_WIDTH")
            .map(|raw| parse_var::<u16>("GROW2048_CELL_WIDTH", &raw))
            .transpose()?
            .unwrap_or(defaults.cell_width);
        let cell_height = lookup("GROW2048_CELL_HEIGHT")
            .map(|raw| parse_var::<u16>("GROW2048_CELL_HEIGHT", &raw))
            .transpose()?
            .unwrap_or(defaults.cell_height);
        let min_swipe = lookup("GROW2048_MIN_SWIPE")
            .map(|raw| parse_var::<u16>("GROW2048_MIN_SWIPE", &raw))
            .transpose()?
            .unwrap_or(defaults.min_swipe);

        ensure!(
            (2..=16).contains(&cell_width),
            "GROW2048_CELL_WIDTH must be between 2 and 16, got {}",
            cell_width
        );
        ensure!(
            (2..=8).contains(&cell_height),
            "GROW2048_CELL_HEIGHT must be between 2 and 8, got {}",
            cell_height
        );

        Ok(Self {
            seed,
            cell_width,
            cell_height,
            min_swipe,
        })
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("{} must be a number, got {:?}", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = Config::from_lookup(lookup(&[
            ("GROW2048_SEED", "42"),
            ("GROW2048_CELL_WIDTH", "9"),
            ("GROW2048_CELL_HEIGHT", " 5 "),
            ("GROW2048_MIN_SWIPE", "3"),
        ]))
        .unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.cell_width, 9);
        assert_eq!(cfg.cell_height, 5);
        assert_eq!(cfg.min_swipe, 3);
    }

    #[test]
    fn rejects_garbage() {
        let err = Config::from_lookup(lookup(&[("GROW2048_SEED", "abc")])).unwrap_err();
        assert!(err.to_string().contains("GROW2048_SEED"));
    }

    #[test]
    fn rejects_out_of_range_cells() {
        assert!(Config::from_lookup(lookup(&[("GROW2048_CELL_WIDTH", "1")])).is_err());
        assert!(Config::from_lookup(lookup(&[("GROW2048_CELL_HEIGHT", "40")])).is_err());
    }
}
