use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Confirmed {
        #[serde(default)]
        position: Option<String>,
    },
    Past {
        result: String,
        #[serde(default)]
        position: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub opponent: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub is_home: bool,
    #[serde(flatten)]
    pub status: MatchStatus,
}

impl Match {
    pub fn is_past(&self) -> bool {
        matches!(self.status, MatchStatus::Past { .. })
    }

    pub fn result(&self) -> Option<&str> {
        match &self.status {
            MatchStatus::Past { result, .. } => Some(result.as_str()),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&str> {
        match &self.status {
            MatchStatus::Confirmed { position } | MatchStatus::Past { position, .. } => {
                position.as_deref()
            }
            MatchStatus::Upcoming => None,
        }
    }

    /// Outcome letter trailing the score, e.g. "3-1 W".
    pub fn outcome(&self) -> Option<Outcome> {
        let result = self.result()?;
        match result.split_whitespace().last()? {
            "W" | "w" => Some(Outcome::Win),
            "D" | "d" => Some(Outcome::Draw),
            "L" | "l" => Some(Outcome::Loss),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixtureFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl FixtureFilter {
    pub const ALL: [FixtureFilter; 3] = [
        FixtureFilter::All,
        FixtureFilter::Upcoming,
        FixtureFilter::Past,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FixtureFilter::All => "All",
            FixtureFilter::Upcoming => "Upcoming",
            FixtureFilter::Past => "Past",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FixtureFilter::All => FixtureFilter::Upcoming,
            FixtureFilter::Upcoming => FixtureFilter::Past,
            FixtureFilter::Past => FixtureFilter::All,
        }
    }

    pub fn accepts(self, m: &Match) -> bool {
        match self {
            FixtureFilter::All => true,
            // Confirmed fixtures are still ahead of us.
            FixtureFilter::Upcoming => !m.is_past(),
            FixtureFilter::Past => m.is_past(),
        }
    }
}

impl FromStr for FixtureFilter {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned = raw.trim();
        FixtureFilter::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(cleaned))
            .ok_or_else(|| anyhow!("unknown fixture filter: {cleaned:?}"))
    }
}

/// Sublist of `matches` accepted by `filter`, in seed order.
pub fn filter_matches(matches: &[Match], filter: FixtureFilter) -> Vec<&Match> {
    matches.iter().filter(|m| filter.accepts(m)).collect()
}

#[derive(Debug, Clone, Default)]
pub struct FixturesView {
    pub matches: Vec<Match>,
    pub filter: FixtureFilter,
    pub selected: usize,
    pub played: u32,
    pub remaining: u32,
}

impl FixturesView {
    pub fn new(matches: Vec<Match>, played: u32, remaining: u32) -> Self {
        Self {
            matches,
            filter: FixtureFilter::All,
            selected: 0,
            played,
            remaining,
        }
    }

    pub fn filtered(&self) -> Vec<&Match> {
        filter_matches(&self.matches, self.filter)
    }

    pub fn set_filter(&mut self, filter: FixtureFilter) {
        self.filter = filter;
        self.selected = 0;
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.filtered().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let total = self.filtered().len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.filtered().len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }
}
