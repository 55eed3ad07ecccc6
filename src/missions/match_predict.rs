//! Mission 2: who wins the match? A weighted score and a logistic curve

use serde::{Deserialize, Serialize};

use super::{Mission, MissionError};

pub const MAX_SHOTS: u32 = 25;
pub const MAX_POSSESSION: u32 = 100;
pub const MAX_FOULS: u32 = 25;
/// Score difference scale of the logistic curve
pub const LOGISTIC_SCALE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub name: String,
    pub shots: u32,
    pub possession: u32,
    pub fouls: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub shots: f64,
    pub possession: f64,
    pub fouls: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Factor {
    Shots,
    Possession,
    Fouls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    A,
    B,
}

/// Win chances in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probabilities {
    pub team_a: u32,
    pub team_b: u32,
}

impl Factor {
    pub const ALL: [Factor; 3] = [Factor::Shots, Factor::Possession, Factor::Fouls];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::Shots => "Les tirs",
            Factor::Possession => "La possession",
            Factor::Fouls => "Les fautes",
        }
    }
}

impl TeamStats {
    pub fn score(&self, weights: &Weights) -> f64 {
        f64::from(self.shots) * weights.shots
            + f64::from(self.possession) * weights.possession
            + f64::from(self.fouls) * weights.fouls
    }

    /// Set a stat, clamped to its slider range
    pub fn set(&mut self, factor: Factor, value: u32) {
        match factor {
            Factor::Shots => self.shots = value.min(MAX_SHOTS),
            Factor::Possession => self.possession = value.min(MAX_POSSESSION),
            Factor::Fouls => self.fouls = value.min(MAX_FOULS),
        }
    }
}

impl Weights {
    /// The factor with the largest absolute weight; earlier factors win ties
    pub fn most_influential(&self) -> Factor {
        let (shots, possession, fouls) = (self.shots.abs(), self.possession.abs(), self.fouls.abs());
        if shots >= possession && shots >= fouls {
            Factor::Shots
        } else if possession >= fouls {
            Factor::Possession
        } else {
            Factor::Fouls
        }
    }
}

/// Logistic win probability of A given both scores
pub fn win_probabilities(score_a: f64, score_b: f64) -> Probabilities {
    let p_a = 1.0 / (1.0 + (-(score_a - score_b) / LOGISTIC_SCALE).exp());
    Probabilities {
        team_a: (p_a * 100.0).round() as u32,
        team_b: ((1.0 - p_a) * 100.0).round() as u32,
    }
}

#[derive(Debug, Clone)]
pub struct MatchPredictMission {
    initial: (TeamStats, TeamStats),
    pub team_a: TeamStats,
    pub team_b: TeamStats,
    weights: Weights,
    quiz_answer: Option<Factor>,
}

impl MatchPredictMission {
    pub fn new(team_a: TeamStats, team_b: TeamStats, weights: Weights) -> Self {
        Self {
            initial: (team_a.clone(), team_b.clone()),
            team_a,
            team_b,
            weights,
            quiz_answer: None,
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn team_mut(&mut self, team: Team) -> &mut TeamStats {
        match team {
            Team::A => &mut self.team_a,
            Team::B => &mut self.team_b,
        }
    }

    pub fn scores(&self) -> (f64, f64) {
        (self.team_a.score(&self.weights), self.team_b.score(&self.weights))
    }

    pub fn probabilities(&self) -> Probabilities {
        let (a, b) = self.scores();
        win_probabilities(a, b)
    }

    /// Name of the team ahead, or "Égalité"
    pub fn advantage(&self) -> &str {
        let (a, b) = self.scores();
        if a > b {
            self.team_a.name.as_str()
        } else if b > a {
            self.team_b.name.as_str()
        } else {
            "Égalité"
        }
    }

    /// Answer the quiz once; returns whether the answer is right
    pub fn answer_quiz(&mut self, answer: Factor) -> Result<bool, MissionError> {
        if self.quiz_answer.is_some() {
            return Err(MissionError::AlreadyAnswered);
        }
        self.quiz_answer = Some(answer);
        Ok(answer == self.weights.most_influential())
    }

    pub fn quiz_answer(&self) -> Option<Factor> {
        self.quiz_answer
    }
}

impl Mission for MatchPredictMission {
    const ID: u32 = 2;

    fn is_complete(&self) -> bool {
        self.quiz_answer == Some(self.weights.most_influential())
    }

    fn reset(&mut self) {
        self.team_a = self.initial.0.clone();
        self.team_b = self.initial.1.clone();
        self.quiz_answer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str, shots: u32, possession: u32, fouls: u32) -> TeamStats {
        TeamStats {
            name: name.to_string(),
            shots,
            possession,
            fouls,
        }
    }

    fn mission() -> MatchPredictMission {
        MatchPredictMission::new(
            team("Lions", 12, 55, 8),
            team("Aigles", 9, 45, 12),
            Weights {
                shots: 2.0,
                possession: 0.3,
                fouls: -0.5,
            },
        )
    }

    #[test]
    fn test_scores() {
        let (a, b) = mission().scores();
        assert!((a - (24.0 + 16.5 - 4.0)).abs() < 1e-9);
        assert!((b - (18.0 + 13.5 - 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_even_match_is_fifty_fifty() {
        assert_eq!(win_probabilities(30.0, 30.0), Probabilities { team_a: 50, team_b: 50 });
    }

    #[test]
    fn test_probabilities_favour_higher_score() {
        let m = mission();
        let p = m.probabilities();
        // diff = 11 → 1 / (1 + e^-1.1) ≈ 0.750
        assert_eq!(p.team_a, 75);
        assert_eq!(p.team_b, 25);
        assert_eq!(m.advantage(), "Lions");
    }

    #[test]
    fn test_sliders_clamp() {
        let mut m = mission();
        m.team_mut(Team::B).set(Factor::Shots, 99);
        m.team_mut(Team::B).set(Factor::Possession, 140);
        assert_eq!(m.team_b.shots, MAX_SHOTS);
        assert_eq!(m.team_b.possession, MAX_POSSESSION);
        assert_eq!(m.advantage(), "Aigles");
    }

    #[test]
    fn test_most_influential_ties_prefer_shots() {
        let w = Weights {
            shots: 1.0,
            possession: -1.0,
            fouls: 1.0,
        };
        assert_eq!(w.most_influential(), Factor::Shots);
        let w = Weights {
            shots: 0.1,
            possession: 0.2,
            fouls: -0.2,
        };
        assert_eq!(w.most_influential(), Factor::Possession);
        assert_eq!(Factor::Fouls.label(), "Les fautes");
    }

    #[test]
    fn test_quiz_answered_once() {
        let mut m = mission();
        assert_eq!(m.answer_quiz(Factor::Possession), Ok(false));
        assert_eq!(m.answer_quiz(Factor::Shots), Err(MissionError::AlreadyAnswered));
        assert!(!m.is_complete());

        m.reset();
        assert_eq!(m.answer_quiz(Factor::Shots), Ok(true));
        assert!(m.is_complete());
    }
}
