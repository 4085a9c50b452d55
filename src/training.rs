use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Quiz,
    Drill,
}

impl LessonKind {
    pub fn label(self) -> &'static str {
        match self {
            LessonKind::Video => "VIDEO",
            LessonKind::Quiz => "QUIZ",
            LessonKind::Drill => "DRILL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonStatus {
    Completed,
    InProgress,
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    pub duration: String,
    pub status: LessonStatus,
    #[serde(default)]
    pub progress: Option<u8>,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub lessons: Vec<Lesson>,
    /// Coach-authored figure shown in the module header. Not derived from
    /// lesson statuses.
    pub progress: u8,
}

impl Module {
    pub fn completed_lessons(&self) -> usize {
        self.lessons
            .iter()
            .filter(|l| l.status == LessonStatus::Completed)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainingProgress {
    pub completed: usize,
    pub total: usize,
}

impl TrainingProgress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64
    }

    pub fn percent(&self) -> u16 {
        (self.ratio() * 100.0).round() as u16
    }
}

pub fn overall_progress(modules: &[Module]) -> TrainingProgress {
    modules.iter().fold(TrainingProgress::default(), |acc, m| {
        TrainingProgress {
            completed: acc.completed + m.completed_lessons(),
            total: acc.total + m.lessons.len(),
        }
    })
}

/// Module accordion: at most one module is expanded at a time.
#[derive(Debug, Clone, Default)]
pub struct TrainingView {
    pub modules: Vec<Module>,
    pub active_module: Option<String>,
    pub selected: usize,
}

impl TrainingView {
    pub fn new(modules: Vec<Module>, active_module: Option<String>) -> Self {
        let active_module = active_module.filter(|id| modules.iter().any(|m| &m.id == id));
        let selected = active_module
            .as_deref()
            .and_then(|id| modules.iter().position(|m| m.id == id))
            .unwrap_or(0);
        Self {
            modules,
            active_module,
            selected,
        }
    }

    pub fn progress(&self) -> TrainingProgress {
        overall_progress(&self.modules)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_module.as_deref() == Some(id)
    }

    /// Expands `id`, or collapses it when it is already the open module.
    pub fn toggle_module(&mut self, id: &str) -> bool {
        if !self.modules.iter().any(|m| m.id == id) {
            return false;
        }
        if self.is_active(id) {
            self.active_module = None;
        } else {
            self.active_module = Some(id.to_string());
        }
        true
    }

    pub fn selected_module(&self) -> Option<&Module> {
        self.modules.get(self.selected)
    }

    pub fn select_next(&mut self) {
        let total = self.modules.len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.modules.len();
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
