//! Mission 5: label, train and test a keyword spam filter

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Mission, MissionError};

pub const PASSING_ACCURACY: u32 = 60;
pub const QUIZ_ANSWER: &str = "A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledMessage {
    pub text: String,
    pub label: Label,
}

/// Hand-written rules the filter applies once trained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRules {
    pub spam_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpamData {
    pub train: Vec<LabeledMessage>,
    pub test: Vec<LabeledMessage>,
    #[serde(default)]
    pub simple_rules: SimpleRules,
}

impl SpamData {
    pub fn spam_keywords(&self) -> &[String] {
        &self.simple_rules.spam_keywords
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Label,
    Train,
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub label: Label,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub text: String,
    pub predicted: Label,
    pub actual: Label,
}

impl TestResult {
    pub fn is_correct(&self) -> bool {
        self.predicted == self.actual
    }
}

/// Spam if any keyword appears in the text, ignoring case
pub fn predict(text: &str, keywords: &[String]) -> Prediction {
    let lower = text.to_lowercase();
    let found: Vec<String> = keywords
        .iter()
        .filter(|k| lower.contains(&k.to_lowercase()))
        .cloned()
        .collect();

    Prediction {
        label: if found.is_empty() { Label::Ham } else { Label::Spam },
        keywords: found,
    }
}

#[derive(Debug, Clone)]
pub struct SpamMission {
    data: SpamData,
    step: Step,
    user_labels: AHashMap<usize, Label>,
    trained: bool,
    results: Vec<TestResult>,
    accuracy: Option<u32>,
    quiz_passed: bool,
}

impl SpamMission {
    pub fn new(data: SpamData) -> Self {
        if data.spam_keywords().is_empty() {
            warn!("spam filter has no keywords, every message will be ham");
        }
        Self {
            data,
            step: Step::Label,
            user_labels: AHashMap::new(),
            trained: false,
            results: Vec::new(),
            accuracy: None,
            quiz_passed: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn training_messages(&self) -> &[LabeledMessage] {
        &self.data.train
    }

    pub fn label(&mut self, index: usize, label: Label) -> Result<(), MissionError> {
        let len = self.data.train.len();
        if index >= len {
            return Err(MissionError::IndexOutOfRange { index, len });
        }
        self.user_labels.insert(index, label);
        if self.all_labeled() && self.step == Step::Label {
            self.step = Step::Train;
        }
        Ok(())
    }

    pub fn all_labeled(&self) -> bool {
        (0..self.data.train.len()).all(|i| self.user_labels.contains_key(&i))
    }

    pub fn train(&mut self) -> Result<(), MissionError> {
        let remaining = self.data.train.len() - self.user_labels.len();
        if remaining > 0 {
            return Err(MissionError::Unlabelled { remaining });
        }
        self.trained = true;
        self.step = Step::Test;
        Ok(())
    }

    /// Run the filter on the test set and return the rounded accuracy
    pub fn test(&mut self) -> Result<u32, MissionError> {
        if !self.trained {
            return Err(MissionError::NotTrained);
        }

        self.results = self
            .data
            .test
            .iter()
            .map(|m| TestResult {
                text: m.text.clone(),
                predicted: predict(&m.text, self.data.spam_keywords()).label,
                actual: m.label,
            })
            .collect();

        let total = self.results.len();
        let correct = self.results.iter().filter(|r| r.is_correct()).count();
        let accuracy = if total == 0 {
            0
        } else {
            ((correct as f64 / total as f64) * 100.0).round() as u32
        };

        debug!(correct, total, accuracy, "spam filter tested");
        self.accuracy = Some(accuracy);
        Ok(accuracy)
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn accuracy(&self) -> Option<u32> {
        self.accuracy
    }

    /// Classify a message typed by the player
    pub fn try_message(&self, text: &str) -> Option<Prediction> {
        if text.trim().is_empty() {
            return None;
        }
        Some(predict(text, self.data.spam_keywords()))
    }

    /// Once passed, the quiz stays passed until reset
    pub fn answer_quiz(&mut self, answer: &str) -> bool {
        if answer == QUIZ_ANSWER {
            self.quiz_passed = true;
        }
        self.quiz_passed
    }
}

impl Mission for SpamMission {
    const ID: u32 = 5;

    fn is_complete(&self) -> bool {
        self.trained
            && self.accuracy.is_some_and(|a| a >= PASSING_ACCURACY)
            && self.quiz_passed
    }

    fn reset(&mut self) {
        self.step = Step::Label;
        self.user_labels.clear();
        self.trained = false;
        self.results.clear();
        self.accuracy = None;
        self.quiz_passed = false;
    }
}
