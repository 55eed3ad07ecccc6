//! Python bindings using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::matcher::Matcher;
use crate::question::is_question;
use crate::simulator::{recommend_path, SimulatorAnswers};
use crate::types::ChatbotConfig;

/// Whether the text looks like a question (Python function)
#[pyfunction]
pub fn py_is_question(text: &str) -> bool {
    is_question(text)
}

/// Orientation simulator (Python function)
///
/// Answers use the French labels, e.g. `recommend_path("Général", "Sport", "Mix")`.
#[pyfunction]
#[pyo3(signature = (bac=None, interet=None, pref=None))]
pub fn py_recommend_path<'py>(
    py: Python<'py>,
    bac: Option<&str>,
    interet: Option<&str>,
    pref: Option<&str>,
) -> PyResult<Bound<'py, PyDict>> {
    let answers: SimulatorAnswers = serde_json::from_value(serde_json::json!({
        "bac": bac,
        "interet": interet,
        "pref": pref,
    }))
    .map_err(|e| PyValueError::new_err(format!("Invalid simulator answer: {}", e)))?;

    let reco = recommend_path(&answers);
    let dict = PyDict::new_bound(py);
    dict.set_item("mission_ids", reco.mission_ids)?;
    dict.set_item("career_titles", reco.career_titles)?;
    dict.set_item("tips", reco.tips)?;
    Ok(dict)
}

/// Python wrapper for the intent matcher
#[pyclass]
pub struct PyChatbot {
    matcher: Matcher,
    rng: StdRng,
}

#[pymethods]
impl PyChatbot {
    /// Load and validate an intent repository from JSON
    #[staticmethod]
    #[pyo3(signature = (json, seed=None))]
    fn from_json(json: &str, seed: Option<u64>) -> PyResult<Self> {
        let config = ChatbotConfig::from_json_str(json)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let matcher = Matcher::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { matcher, rng })
    }

    /// Match user input; returns a dict with response, links and confidence
    fn find_best_intent<'py>(&mut self, text: &str, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let result = self.matcher.find_best_intent(text, &mut self.rng);

        let dict = PyDict::new_bound(py);
        dict.set_item("response", result.response)?;
        dict.set_item("links", result.links)?;
        dict.set_item("confidence", result.confidence)?;
        Ok(dict)
    }

    /// Quick replies as (label, value) pairs
    fn quick_replies(&self) -> Vec<(String, String)> {
        self.matcher
            .quick_replies()
            .iter()
            .map(|q| (q.label.clone(), q.value.clone()))
            .collect()
    }

    /// Starter questions shown before the first message
    fn starter_replies(&self) -> Vec<String> {
        self.matcher.starter_replies().to_vec()
    }

    /// Get number of intents
    fn __len__(&self) -> usize {
        self.matcher.len()
    }
}
