//! Mission progress, score and badges

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Points awarded for each newly completed mission
pub const MISSION_POINTS: u32 = 100;

/// Badges unlocked when the number of completed missions reaches a count
pub const BADGES: [(usize, &str); 3] = [(1, "Explorateur Data"), (3, "Détective"), (5, "Mini-IA")];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub missions_completed: Vec<u32>,
    pub badges: Vec<String>,
    pub score: u32,
}

impl Progress {
    /// Restore progress from its stored JSON form
    ///
    /// Missing or unreadable data starts a fresh progress.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some(json) => serde_json::from_str(json).unwrap_or_else(|e| {
                warn!(error = %e, "discarding unreadable progress");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn to_stored(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn is_completed(&self, mission_id: u32) -> bool {
        self.missions_completed.contains(&mission_id)
    }

    /// Record a mission as completed; returns false if it already was
    pub fn complete_mission(&mut self, mission_id: u32) -> bool {
        if self.is_completed(mission_id) {
            return false;
        }

        self.missions_completed.push(mission_id);
        self.score = self.score.saturating_add(MISSION_POINTS);

        let count = self.missions_completed.len();
        for (threshold, badge) in BADGES {
            if count == threshold {
                self.badges.push(badge.to_string());
            }
        }
        true
    }

    /// Add points; the score saturates instead of overflowing
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
