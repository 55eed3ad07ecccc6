//! The five interactive missions
//!
//! Each mission owns its state and takes its dataset as a typed value. A
//! mission reports completion; recording it in [`Progress`] is up to the
//! caller through [`record_completion`].

pub mod cleaning;
pub mod dataviz;
pub mod match_predict;
pub mod reco;
pub mod spam;

use thiserror::Error;
use tracing::info;

use crate::progress::Progress;

pub use cleaning::CleaningMission;
pub use dataviz::DatavizMission;
pub use match_predict::MatchPredictMission;
pub use reco::RecoMission;
pub use spam::SpamMission;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MissionError {
    #[error("this question was already answered")]
    AlreadyAnswered,

    #[error("unknown scenario `{0}`")]
    UnknownScenario(String),

    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{remaining} training messages still need a label")]
    Unlabelled { remaining: usize },

    #[error("the model must be trained before testing")]
    NotTrained,
}

pub trait Mission {
    /// Identifier used in progress tracking
    const ID: u32;

    fn is_complete(&self) -> bool;

    /// Back to the initial state
    fn reset(&mut self);
}

/// Record a finished mission in the player's progress
///
/// Returns true only the first time a completed mission is recorded.
pub fn record_completion<M: Mission>(mission: &M, progress: &mut Progress) -> bool {
    if !mission.is_complete() {
        return false;
    }
    let recorded = progress.complete_mission(M::ID);
    if recorded {
        info!(mission = M::ID, score = progress.score, "mission completed");
    }
    recorded
}
