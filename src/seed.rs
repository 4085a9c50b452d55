use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::availability::{Fixture, HistoryEntry};
use crate::content::{Dashboard, FeedbackData, NewsItem, Profile, StatsData, parse_kickoff};
use crate::fixtures::Match;
use crate::formation::FormationPreset;
use crate::training::Module;

/// Seed document compiled into the binary.
pub const DEFAULT_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    #[serde(default)]
    pub as_of: Option<String>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub dashboard: Dashboard,
    #[serde(default)]
    pub availability: AvailabilitySeed,
    #[serde(default)]
    pub fixtures: FixturesSeed,
    #[serde(default)]
    pub formations: Vec<FormationPreset>,
    #[serde(default)]
    pub training: TrainingSeed,
    #[serde(default)]
    pub stats: StatsData,
    #[serde(default)]
    pub feedback: FeedbackData,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilitySeed {
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixturesSeed {
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub remaining: u32,
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSeed {
    #[serde(default)]
    pub active_module: Option<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Seed {
    pub fn as_of_time(&self) -> Option<NaiveDateTime> {
        self.as_of.as_deref().and_then(|raw| parse_kickoff(raw.trim()))
    }
}

pub fn parse_seed_json(raw: &str) -> Result<Seed> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("empty seed document");
    }
    let seed: Seed = serde_json::from_str(trimmed).context("invalid seed json")?;
    validate_seed(&seed)?;
    Ok(seed)
}

pub fn default_seed() -> Result<Seed> {
    parse_seed_json(DEFAULT_SEED).context("embedded seed")
}

/// Reads `path` when given, otherwise the embedded document.
pub fn load_seed(path: Option<&Path>) -> Result<Seed> {
    let Some(path) = path else {
        return default_seed();
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse_seed_json(&raw).with_context(|| format!("seed file {}", path.display()))
}

fn validate_seed(seed: &Seed) -> Result<()> {
    ensure_unique_ids(
        "availability fixture",
        seed.availability.fixtures.iter().map(|f| f.id.as_str()),
    )?;
    ensure_unique_ids("match", seed.fixtures.matches.iter().map(|m| m.id.as_str()))?;
    ensure_unique_ids(
        "training module",
        seed.training.modules.iter().map(|m| m.id.as_str()),
    )?;

    for preset in &seed.formations {
        let you = preset.players.iter().filter(|s| s.player.is_you).count();
        if you > 1 {
            bail!(
                "formation {:?} marks {you} players as you (at most one allowed)",
                preset.name
            );
        }
    }
    Ok(())
}

fn ensure_unique_ids<'a>(what: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate {what} id {id:?}");
        }
    }
    Ok(())
}
