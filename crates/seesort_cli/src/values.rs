use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::PlayerConfig;

pub fn new_rng(config: &PlayerConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// `count` uniform values in `[min_value, max_value]`.
pub fn random_values<R: Rng>(rng: &mut R, count: usize, config: &PlayerConfig) -> Vec<u64> {
    (0..count)
        .map(|_| rng.random_range(config.min_value..=config.max_value))
        .collect()
}

/// Parses a comma or whitespace separated list such as `5,3,8,1`.
pub fn parse_values(s: &str) -> Result<Vec<u64>> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>()
                .with_context(|| format!("invalid bar value `{part}`"))
        })
        .collect::<Result<Vec<_>>>()?;
    if values.is_empty() && !s.trim().is_empty() {
        bail!("no values in `{s}`");
    }
    Ok(values)
}
