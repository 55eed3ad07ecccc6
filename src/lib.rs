//! butsd-core - logic behind the BUT Science des Données companion site
//!
//! This crate provides the student chatbot's keyword intent matcher, the
//! conversation state threaded between chat turns, the orientation
//! simulator, mission progress, the five interactive missions and the
//! timed-slide "shorts" player.

pub mod types;
pub mod config;
pub mod scoring;
pub mod matcher;
pub mod question;
pub mod conversation;
pub mod progress;
pub mod simulator;
pub mod missions;
pub mod shorts;

pub use types::*;
pub use config::ConfigError;
pub use matcher::*;
pub use question::is_question;
pub use conversation::{ChatMessage, ConversationState, Sender};
pub use progress::Progress;
pub use simulator::{recommend_path, Recommendation, SimulatorAnswers};

// Python bindings
#[cfg(feature = "python")]
pub mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn butsd_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyChatbot>()?;
    m.add_function(wrap_pyfunction!(py_is_question, m)?)?;
    m.add_function(wrap_pyfunction!(py_recommend_path, m)?)?;
    Ok(())
}
