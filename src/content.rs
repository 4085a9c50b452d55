//! Read-only records behind the Home, Stats, AI Feedback and Team News views.
//!
//! Tags are enums so styling can match exhaustively; nothing here is mutated
//! after the seed is loaded.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub short_role: String,
    pub number: u32,
    pub season: String,
    #[serde(default)]
    pub notifications: u32,
    #[serde(default)]
    pub streak: u32,
}

impl Profile {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Player".to_string(),
            role: String::new(),
            short_role: String::new(),
            number: 0,
            season: String::new(),
            notifications: 0,
            streak: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStat {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextMatch {
    pub opponent: String,
    pub competition: String,
    pub kickoff: String,
    pub venue: String,
    pub is_home: bool,
    #[serde(default)]
    pub position: Option<String>,
}

impl NextMatch {
    pub fn kickoff_at(&self) -> Option<NaiveDateTime> {
        parse_kickoff(self.kickoff.trim())
    }

    pub fn venue_label(&self) -> String {
        let side = if self.is_home { "Home" } else { "Away" };
        format!("{} ({side})", self.venue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickStatus {
    Success,
    Progress,
    Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickStat {
    pub label: String,
    pub value: String,
    pub status: QuickStatus,
    #[serde(default)]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightKind {
    Praise,
    Achievement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(rename = "type")]
    pub kind: HighlightKind,
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub form_stats: Vec<FormStat>,
    #[serde(default)]
    pub next_match: Option<NextMatch>,
    #[serde(default)]
    pub quick_stats: Vec<QuickStat>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStat {
    pub label: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalBest {
    pub label: String,
    pub value: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub stat: String,
    pub value: u8,
    pub avg: u8,
}

impl Skill {
    pub fn above_average(&self) -> bool {
        self.value > self.avg
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Top,
    Good,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRating {
    pub opponent: String,
    pub rating: f32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
}

impl MatchRating {
    pub fn tier(&self) -> RatingTier {
        if self.rating >= 8.0 {
            RatingTier::Top
        } else if self.rating >= 7.0 {
            RatingTier::Good
        } else {
            RatingTier::Plain
        }
    }

    /// "1 Goal · 2 Assists"; empty when neither happened.
    pub fn contributions(&self) -> String {
        let mut parts = Vec::new();
        if self.goals > 0 {
            parts.push(plural(self.goals, "Goal"));
        }
        if self.assists > 0 {
            parts.push(plural(self.assists, "Assist"));
        }
        parts.join(" · ")
    }
}

fn plural(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub season_stats: Vec<SeasonStat>,
    #[serde(default)]
    pub personal_bests: Vec<PersonalBest>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub match_ratings: Vec<MatchRating>,
}

// ---------------------------------------------------------------------------
// AI feedback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackKind {
    Praise,
    Tip,
    QuizResult,
    Milestone,
}

impl FeedbackKind {
    pub fn label(self) -> &'static str {
        match self {
            FeedbackKind::Praise => "PRAISE",
            FeedbackKind::Tip => "TIP",
            FeedbackKind::QuizResult => "QUIZ",
            FeedbackKind::Milestone => "MILESTONE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub title: String,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub unlocked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackData {
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub items: Vec<FeedbackItem>,
}

// ---------------------------------------------------------------------------
// Team news
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsKind {
    Announcement,
    Reminder,
    Media,
}

impl NewsKind {
    pub fn label(self) -> &'static str {
        match self {
            NewsKind::Announcement => "ANNOUNCEMENT",
            NewsKind::Reminder => "REMINDER",
            NewsKind::Media => "MEDIA",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NewsKind,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    pub time: String,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub important: bool,
}

// ---------------------------------------------------------------------------
// Kickoff times
// ---------------------------------------------------------------------------

pub fn parse_kickoff(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ];

    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

/// "Sat, Dec 28 • 3:00 PM"; falls back to the raw text when it does not parse.
pub fn format_kickoff(raw: &str) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return "TBD".to_string();
    }
    match parse_kickoff(cleaned) {
        Some(dt) => dt.format("%a, %b %-d • %-I:%M %p").to_string(),
        None => cleaned.replace('T', " "),
    }
}

/// Time left until kickoff as "2d 14h", "5h 30m" or "45m".
pub fn countdown(kickoff: NaiveDateTime, as_of: NaiveDateTime) -> String {
    let left = kickoff - as_of;
    if left.num_minutes() <= 0 {
        return "Kick-off".to_string();
    }
    let days = left.num_days();
    let hours = left.num_hours() % 24;
    let minutes = left.num_minutes() % 60;
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
