//! Mission 4: pick the right chart, then spot the truncated axis

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::{Mission, MissionError};

pub const TRAP_ANSWER: &str = "L'axe Y est coupé";
/// Y domain of the misleading bar chart
pub const MISLEADING_Y_DOMAIN: (f64, f64) = (45.0, 55.0);
/// Y domain of the same data drawn honestly
pub const HONEST_Y_DOMAIN: (f64, f64) = (0.0, 100.0);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(alias = "day")]
    pub label: Option<String>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub question: String,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    pub options: Vec<String>,
    pub correct: String,
    pub why: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Choose,
    Compare,
    Trap,
}

#[derive(Debug, Clone)]
pub struct DatavizMission {
    scenarios: Vec<Scenario>,
    answers: AHashMap<String, String>,
    current: usize,
    stage: Stage,
    trap_answer: Option<String>,
}

impl DataPoint {
    /// Axis label, falling back to the 1-based position
    pub fn display_label(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("Item {}", index + 1))
    }
}

impl DatavizMission {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios,
            answers: AHashMap::new(),
            current: 0,
            stage: Stage::Choose,
            trap_answer: None,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn current_scenario(&self) -> Option<&Scenario> {
        self.scenarios.get(self.current)
    }

    pub fn answer(&self, scenario_id: &str) -> Option<&str> {
        self.answers.get(scenario_id).map(String::as_str)
    }

    /// Lock in a chart choice; returns whether it is the right one
    pub fn answer_scenario(&mut self, scenario_id: &str, answer: &str) -> Result<bool, MissionError> {
        let scenario = self
            .scenarios
            .iter()
            .find(|s| s.id == scenario_id)
            .ok_or_else(|| MissionError::UnknownScenario(scenario_id.to_string()))?;

        if self.answers.contains_key(scenario_id) {
            return Err(MissionError::AlreadyAnswered);
        }

        let correct = scenario.correct == answer;
        self.answers.insert(scenario_id.to_string(), answer.to_string());
        Ok(correct)
    }

    /// Move to the next scenario, or to the comparison stage after the last
    pub fn next_scenario(&mut self) {
        if self.current + 1 < self.scenarios.len() {
            self.current += 1;
        } else {
            self.stage = Stage::Compare;
        }
    }

    pub fn go_to_trap(&mut self) {
        self.stage = Stage::Trap;
    }

    /// Lock in the trap answer; returns whether the axis was spotted
    pub fn answer_trap(&mut self, answer: &str) -> Result<bool, MissionError> {
        if self.trap_answer.is_some() {
            return Err(MissionError::AlreadyAnswered);
        }
        self.trap_answer = Some(answer.to_string());
        Ok(answer == TRAP_ANSWER)
    }

    pub fn trap_answer(&self) -> Option<&str> {
        self.trap_answer.as_deref()
    }

    pub fn all_answered(&self) -> bool {
        self.scenarios.iter().all(|s| self.answers.contains_key(&s.id))
    }

    /// Number of scenarios answered correctly
    pub fn score(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|s| self.answer(&s.id) == Some(s.correct.as_str()))
            .count()
    }
}

impl Mission for DatavizMission {
    const ID: u32 = 4;

    fn is_complete(&self) -> bool {
        self.score() == self.scenarios.len() && self.trap_answer.as_deref() == Some(TRAP_ANSWER)
    }

    fn reset(&mut self) {
        self.answers.clear();
        self.current = 0;
        self.stage = Stage::Choose;
        self.trap_answer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(id: &str, correct: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            title: id.to_string(),
            question: "Quel graphique ?".to_string(),
            data: Vec::new(),
            options: vec!["Courbe".to_string(), "Barres".to_string(), "Camembert".to_string()],
            correct: correct.to_string(),
            why: String::new(),
        }
    }

    fn mission() -> DatavizMission {
        DatavizMission::new(vec![
            scenario("evolution", "Courbe"),
            scenario("comparaison", "Barres"),
            scenario("repartition", "Camembert"),
        ])
    }

    #[test]
    fn test_answers_are_locked() {
        let mut m = mission();
        assert_eq!(m.answer_scenario("evolution", "Barres"), Ok(false));
        assert_eq!(
            m.answer_scenario("evolution", "Courbe"),
            Err(MissionError::AlreadyAnswered)
        );
        assert_eq!(m.answer("evolution"), Some("Barres"));
    }

    #[test]
    fn test_unknown_scenario() {
        let mut m = mission();
        assert_eq!(
            m.answer_scenario("nope", "Courbe"),
            Err(MissionError::UnknownScenario("nope".to_string()))
        );
    }

    #[test]
    fn test_stages_progress() {
        let mut m = mission();
        assert_eq!(m.current_scenario().unwrap().id, "evolution");
        m.next_scenario();
        m.next_scenario();
        assert_eq!(m.current_scenario().unwrap().id, "repartition");
        assert_eq!(m.stage(), Stage::Choose);
        m.next_scenario();
        assert_eq!(m.stage(), Stage::Compare);
        m.go_to_trap();
        assert_eq!(m.stage(), Stage::Trap);
    }

    #[test]
    fn test_completion_needs_perfect_score_and_trap() {
        let mut m = mission();
        m.answer_scenario("evolution", "Courbe").unwrap();
        m.answer_scenario("comparaison", "Barres").unwrap();
        m.answer_scenario("repartition", "Camembert").unwrap();
        assert!(m.all_answered());
        assert_eq!(m.score(), 3);
        assert!(!m.is_complete());

        assert_eq!(m.answer_trap(TRAP_ANSWER), Ok(true));
        assert!(m.is_complete());

        m.reset();
        assert_eq!(m.score(), 0);
        assert_eq!(m.trap_answer(), None);
        assert!(!m.is_complete());
    }

    #[test]
    fn test_trap_answer_is_locked() {
        let mut m = mission();
        m.answer_scenario("evolution", "Courbe").unwrap();
        m.answer_scenario("comparaison", "Barres").unwrap();
        m.answer_scenario("repartition", "Camembert").unwrap();

        assert_eq!(m.answer_trap("Les couleurs"), Ok(false));
        assert_eq!(m.answer_trap(TRAP_ANSWER), Err(MissionError::AlreadyAnswered));
        assert_eq!(m.trap_answer(), Some("Les couleurs"));
        assert!(!m.is_complete());

        m.reset();
        assert_eq!(m.answer_trap(TRAP_ANSWER), Ok(true));
    }

    #[test]
    fn test_data_point_labels() {
        let points: Vec<DataPoint> =
            serde_json::from_str(r#"[{"day": "Lun", "value": 3}, {"value": 5}]"#).unwrap();
        assert_eq!(points[0].display_label(0), "Lun");
        assert_eq!(points[1].display_label(1), "Item 2");
    }
}
