use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclineReason {
    Injury,
    Personal,
    #[serde(rename = "Work Commitment")]
    WorkCommitment,
    Travel,
    Other,
}

impl DeclineReason {
    /// Picker order.
    pub const ALL: [DeclineReason; 5] = [
        DeclineReason::Injury,
        DeclineReason::Personal,
        DeclineReason::WorkCommitment,
        DeclineReason::Travel,
        DeclineReason::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeclineReason::Injury => "Injury",
            DeclineReason::Personal => "Personal",
            DeclineReason::WorkCommitment => "Work Commitment",
            DeclineReason::Travel => "Travel",
            DeclineReason::Other => "Other",
        }
    }
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeclineReason {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let cleaned = raw.trim();
        DeclineReason::ALL
            .into_iter()
            .find(|reason| reason.label() == cleaned)
            .ok_or_else(|| anyhow!("unknown decline reason: {cleaned:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AvailabilityStatus {
    Pending,
    Confirmed,
    Declined {
        #[serde(rename = "declineReason")]
        reason: DeclineReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: String,
    pub opponent: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    #[serde(flatten)]
    pub status: AvailabilityStatus,
}

impl Fixture {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, AvailabilityStatus::Pending)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.status, AvailabilityStatus::Confirmed)
    }

    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self.status {
            AvailabilityStatus::Declined { reason } => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Attendance {
    Confirmed,
    Declined {
        #[serde(rename = "declineReason")]
        reason: DeclineReason,
    },
}

/// A past fixture with the attendance outcome that was recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: String,
    pub opponent: String,
    #[serde(flatten)]
    pub attendance: Attendance,
}

pub fn confirmed_count(fixtures: &[Fixture]) -> usize {
    fixtures.iter().filter(|f| f.is_confirmed()).count()
}

pub fn pending_count(fixtures: &[Fixture]) -> usize {
    fixtures.iter().filter(|f| f.is_pending()).count()
}

/// Upcoming fixtures awaiting an attendance answer, plus the single
/// reason-picker slot and the list cursors.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityView {
    pub fixtures: Vec<Fixture>,
    pub history: Vec<HistoryEntry>,
    pub active_decline_id: Option<String>,
    pub selected: usize,
    pub reason_selected: usize,
}

impl AvailabilityView {
    pub fn new(fixtures: Vec<Fixture>, history: Vec<HistoryEntry>) -> Self {
        Self {
            fixtures,
            history,
            active_decline_id: None,
            selected: 0,
            reason_selected: 0,
        }
    }

    pub fn fixture(&self, id: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == id)
    }

    pub fn selected_fixture(&self) -> Option<&Fixture> {
        self.fixtures.get(self.selected)
    }

    pub fn confirmed_count(&self) -> usize {
        confirmed_count(&self.fixtures)
    }

    pub fn pending_count(&self) -> usize {
        pending_count(&self.fixtures)
    }

    /// Marks the fixture confirmed. Returns false when no fixture has `id`.
    pub fn confirm(&mut self, id: &str) -> bool {
        let Some(fixture) = self.fixtures.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        fixture.status = AvailabilityStatus::Confirmed;
        true
    }

    /// Marks the fixture declined with `reason` and closes the picker.
    /// An unknown id leaves everything, picker included, untouched.
    pub fn decline(&mut self, id: &str, reason: DeclineReason) -> bool {
        let Some(fixture) = self.fixtures.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        fixture.status = AvailabilityStatus::Declined { reason };
        self.active_decline_id = None;
        self.reason_selected = 0;
        true
    }

    /// Boundary variant of [`decline`](Self::decline) for free-text reasons.
    pub fn decline_with(&mut self, id: &str, reason: &str) -> anyhow::Result<bool> {
        let reason = reason.parse::<DeclineReason>()?;
        Ok(self.decline(id, reason))
    }

    /// Opens the reason picker for a pending fixture, or closes it when it is
    /// already open for that fixture.
    pub fn toggle_decline_picker(&mut self, id: &str) -> bool {
        if !self.fixture(id).is_some_and(Fixture::is_pending) {
            return false;
        }
        if self.active_decline_id.as_deref() == Some(id) {
            self.active_decline_id = None;
        } else {
            self.active_decline_id = Some(id.to_string());
        }
        self.reason_selected = 0;
        true
    }

    pub fn close_decline_picker(&mut self) {
        self.active_decline_id = None;
        self.reason_selected = 0;
    }

    pub fn picker_open(&self) -> bool {
        self.active_decline_id.is_some()
    }

    pub fn highlighted_reason(&self) -> DeclineReason {
        DeclineReason::ALL[self.reason_selected.min(DeclineReason::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        let total = self.fixtures.len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.fixtures.len();
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

    pub fn select_reason_next(&mut self) {
        self.reason_selected = (self.reason_selected + 1) % DeclineReason::ALL.len();
    }

    pub fn select_reason_prev(&mut self) {
        if self.reason_selected == 0 {
            self.reason_selected = DeclineReason::ALL.len() - 1;
        } else {
            self.reason_selected -= 1;
        }
    }
}
