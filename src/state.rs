use std::collections::VecDeque;

use chrono::NaiveDateTime;

use crate::availability::{AvailabilityView, DeclineReason};
use crate::content::{Dashboard, FeedbackData, NewsItem, Profile, StatsData};
use crate::fixtures::{FixtureFilter, FixturesView};
use crate::formation::FormationView;
use crate::seed::Seed;
use crate::training::TrainingView;

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Fixtures,
    Formation,
    Stats,
    Availability,
    Training,
    Feedback,
    News,
    NotFound { path: String },
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Fixtures => "Fixtures",
            Screen::Formation => "Formation",
            Screen::Stats => "Stats",
            Screen::Availability => "Availability",
            Screen::Training => "Training",
            Screen::Feedback => "AI Feedback",
            Screen::News => "Team News",
            Screen::NotFound { .. } => "Not Found",
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Screen::Home => "/",
            Screen::Fixtures => "/fixtures",
            Screen::Formation => "/formation",
            Screen::Stats => "/stats",
            Screen::Availability => "/availability",
            Screen::Training => "/training",
            Screen::Feedback => "/feedback",
            Screen::News => "/news",
            Screen::NotFound { path } => path.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavItem {
    pub key: char,
    pub glyph: &'static str,
    pub screen: Screen,
}

/// Side-panel entries in display order; `key` jumps straight to the view.
pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem { key: '1', glyph: "⌂", screen: Screen::Home },
    NavItem { key: '2', glyph: "▦", screen: Screen::Fixtures },
    NavItem { key: '3', glyph: "⚑", screen: Screen::Formation },
    NavItem { key: '4', glyph: "▮", screen: Screen::Stats },
    NavItem { key: '5', glyph: "✓", screen: Screen::Availability },
    NavItem { key: '6', glyph: "✎", screen: Screen::Training },
    NavItem { key: '7', glyph: "✉", screen: Screen::Feedback },
    NavItem { key: '8', glyph: "☰", screen: Screen::News },
];

/// Maps a path-like identifier to a view. The leading slash is optional,
/// a trailing slash and ASCII case are ignored, and "home" is an alias of "/".
pub fn resolve_path(raw: &str) -> Screen {
    let cleaned = raw.trim();
    let key = cleaned
        .trim_start_matches('/')
        .trim_end_matches('/')
        .to_ascii_lowercase();
    if key.is_empty() || key == "home" {
        return Screen::Home;
    }
    NAV_ITEMS
        .iter()
        .find(|item| item.screen.path().trim_start_matches('/') == key)
        .map(|item| item.screen.clone())
        .unwrap_or_else(|| Screen::NotFound {
            path: cleaned.to_string(),
        })
}

#[derive(Debug, Clone)]
pub enum Action {
    Navigate(Screen),
    NavigatePath(String),
    ToggleSidebar,
    ToggleHelp,
    Confirm { id: String },
    Decline { id: String, reason: DeclineReason },
    ToggleDeclinePicker { id: String },
    CloseDeclinePicker,
    SetFilter(FixtureFilter),
    SelectFormation(usize),
    NextFormation,
    PrevFormation,
    ToggleModule { id: String },
    Log(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub sidebar_collapsed: bool,
    pub help_overlay: bool,
    pub path_input: Option<String>,
    pub profile: Profile,
    pub dashboard: Dashboard,
    pub availability: AvailabilityView,
    pub fixtures: FixturesView,
    pub formation: FormationView,
    pub stats: StatsData,
    pub training: TrainingView,
    pub feedback: FeedbackData,
    pub news: Vec<NewsItem>,
    pub as_of: Option<NaiveDateTime>,
    pub scroll: u16,
    pub logs: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Portal with no seed data; every view renders its empty state.
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            sidebar_collapsed: false,
            help_overlay: false,
            path_input: None,
            profile: Profile::default(),
            dashboard: Dashboard::default(),
            availability: AvailabilityView::default(),
            fixtures: FixturesView::default(),
            formation: FormationView::default(),
            stats: StatsData::default(),
            training: TrainingView::default(),
            feedback: FeedbackData::default(),
            news: Vec::new(),
            as_of: None,
            scroll: 0,
            logs: VecDeque::with_capacity(MAX_LOGS),
        }
    }

    pub fn from_seed(seed: Seed) -> Self {
        let as_of = seed.as_of_time();
        let mut state = Self {
            profile: seed.profile,
            dashboard: seed.dashboard,
            availability: AvailabilityView::new(
                seed.availability.fixtures,
                seed.availability.history,
            ),
            fixtures: FixturesView::new(
                seed.fixtures.matches,
                seed.fixtures.played,
                seed.fixtures.remaining,
            ),
            formation: FormationView::new(seed.formations),
            stats: seed.stats,
            training: TrainingView::new(seed.training.modules, seed.training.active_module),
            feedback: seed.feedback,
            news: seed.news,
            as_of,
            ..Self::new()
        };
        state.push_log(format!(
            "[INFO] Loaded {} fixtures, {} matches, {} formations, {} modules",
            state.availability.fixtures.len(),
            state.fixtures.matches.len(),
            state.formation.len(),
            state.training.modules.len()
        ));
        state
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn select_next(&mut self) {
        match self.screen {
            Screen::Availability if self.availability.picker_open() => {
                self.availability.select_reason_next()
            }
            Screen::Availability => self.availability.select_next(),
            Screen::Fixtures => self.fixtures.select_next(),
            Screen::Training => self.training.select_next(),
            _ => self.scroll = self.scroll.saturating_add(1),
        }
    }

    pub fn select_prev(&mut self) {
        match self.screen {
            Screen::Availability if self.availability.picker_open() => {
                self.availability.select_reason_prev()
            }
            Screen::Availability => self.availability.select_prev(),
            Screen::Fixtures => self.fixtures.select_prev(),
            Screen::Training => self.training.select_prev(),
            _ => self.scroll = self.scroll.saturating_sub(1),
        }
    }

    pub fn begin_path_input(&mut self) {
        self.path_input = Some(String::new());
    }

    pub fn cancel_path_input(&mut self) {
        self.path_input = None;
    }

    /// Navigates to the typed path and closes the prompt.
    pub fn submit_path_input(&mut self) {
        if let Some(path) = self.path_input.take() {
            apply_action(self, Action::NavigatePath(path));
        }
    }
}

fn navigate(state: &mut AppState, screen: Screen) {
    if let Screen::NotFound { path } = &screen {
        state.push_log(format!("[WARN] No view at {path}"));
    }
    state.screen = screen;
    state.scroll = 0;
    state.availability.close_decline_picker();
}

pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::Navigate(screen) => navigate(state, screen),
        Action::NavigatePath(path) => navigate(state, resolve_path(&path)),
        Action::ToggleSidebar => state.sidebar_collapsed = !state.sidebar_collapsed,
        Action::ToggleHelp => state.help_overlay = !state.help_overlay,
        Action::Confirm { id } => {
            if state.availability.confirm(&id) {
                state.push_log(format!("[INFO] Confirmed availability for fixture {id}"));
            } else {
                state.push_log(format!("[WARN] No fixture {id} to confirm"));
            }
        }
        Action::Decline { id, reason } => {
            if state.availability.decline(&id, reason) {
                state.push_log(format!("[INFO] Declined fixture {id} ({reason})"));
            } else {
                state.push_log(format!("[WARN] No fixture {id} to decline"));
            }
        }
        Action::ToggleDeclinePicker { id } => {
            if !state.availability.toggle_decline_picker(&id) {
                state.push_log(format!("[WARN] Fixture {id} is not awaiting an answer"));
            }
        }
        Action::CloseDeclinePicker => state.availability.close_decline_picker(),
        Action::SetFilter(filter) => {
            state.fixtures.set_filter(filter);
            state.push_log(format!("[INFO] Fixtures filter: {}", filter.label()));
        }
        Action::SelectFormation(index) => state.formation.select(index),
        Action::NextFormation => state.formation.next(),
        Action::PrevFormation => state.formation.prev(),
        Action::ToggleModule { id } => {
            if !state.training.toggle_module(&id) {
                state.push_log(format!("[WARN] No training module {id}"));
            }
        }
        Action::Log(msg) => state.push_log(msg),
    }
}
