use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: String,
    pub number: u32,
    #[serde(default)]
    pub is_you: bool,
}

/// A player placed on the pitch; `x`/`y` are percentages of the pitch area,
/// `y` growing towards our own goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchSlot {
    pub x: f32,
    pub y: f32,
    pub player: Player,
}

impl PitchSlot {
    /// Shirt-marker caption: "YOU" or the player's surname.
    pub fn marker_label(&self) -> String {
        if self.player.is_you {
            return "YOU".to_string();
        }
        self.player
            .name
            .split_whitespace()
            .nth(1)
            .unwrap_or(self.player.name.as_str())
            .to_string()
    }

    /// Cell inside a `width` x `height` grid for this slot.
    pub fn grid_cell(&self, width: u16, height: u16) -> (u16, u16) {
        (
            scale_percent(self.x, width),
            scale_percent(self.y, height),
        )
    }
}

fn scale_percent(pct: f32, extent: u16) -> u16 {
    if extent == 0 {
        return 0;
    }
    let pct = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 };
    let max = f32::from(extent - 1);
    (pct / 100.0 * max).round() as u16
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationPreset {
    pub name: String,
    pub formation: String,
    pub players: Vec<PitchSlot>,
}

impl FormationPreset {
    pub fn your_slot(&self) -> Option<&PitchSlot> {
        self.players.iter().find(|slot| slot.player.is_you)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormationView {
    pub presets: Vec<FormationPreset>,
    index: usize,
}

impl FormationView {
    pub fn new(presets: Vec<FormationPreset>) -> Self {
        Self { presets, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    fn last_index(&self) -> usize {
        self.presets.len().saturating_sub(1)
    }

    pub fn current(&self) -> Option<&FormationPreset> {
        self.presets.get(self.index)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.last_index()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.last_index());
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.last_index());
    }
}
