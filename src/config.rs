use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow};
use chrono::NaiveDateTime;

use crate::content::parse_kickoff;

const DEFAULT_TICK_MS: u64 = 250;

/// Runtime knobs read from the environment (after `.env.local` / `.env`).
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub start_path: String,
    pub seed_path: Option<PathBuf>,
    pub as_of: Option<NaiveDateTime>,
    pub tick_rate: Duration,
    pub sidebar_collapsed: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            start_path: "/".to_string(),
            seed_path: None,
            as_of: None,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            sidebar_collapsed: false,
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());

        let start_path = non_empty("PORTAL_START_PATH").unwrap_or_else(|| "/".to_string());
        let seed_path = non_empty("PORTAL_SEED_PATH").map(PathBuf::from);
        let as_of = match non_empty("PORTAL_AS_OF") {
            Some(raw) => Some(
                parse_kickoff(raw.trim())
                    .ok_or_else(|| anyhow!("PORTAL_AS_OF is not a date-time: {raw:?}"))?,
            ),
            None => None,
        };
        let tick_ms = non_empty("PORTAL_TICK_MS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TICK_MS)
            .clamp(50, 2000);
        let sidebar_collapsed = non_empty("PORTAL_SIDEBAR_COLLAPSED")
            .map(|val| parse_flag(&val))
            .unwrap_or(false);

        Ok(Self {
            start_path,
            seed_path,
            as_of,
            tick_rate: Duration::from_millis(tick_ms),
            sidebar_collapsed,
        })
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
