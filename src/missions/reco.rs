//! Mission 3: a tag-overlap recommender ("Netflix dans ta tête")

use ahash::AHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Mission;

pub const MAX_TAGS: usize = 3;
pub const TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMovie {
    pub id: String,
    pub title: String,
    pub score: usize,
    pub common_tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RecoMission {
    movies: Vec<Movie>,
    available_tags: Vec<String>,
    selected: Vec<String>,
}

impl RecoMission {
    pub fn new(movies: Vec<Movie>, available_tags: Vec<String>) -> Self {
        Self {
            movies,
            available_tags,
            selected: Vec::new(),
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Select or unselect a tag; selections beyond the limit are ignored
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected.iter().position(|t| t == tag) {
            self.selected.remove(pos);
        } else if self.selected.len() < MAX_TAGS {
            self.selected.push(tag.to_string());
        }
    }

    /// Replace the selection with distinct random tags
    pub fn random_profile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.selected = self
            .available_tags
            .choose_multiple(rng, MAX_TAGS)
            .cloned()
            .collect();
    }

    /// Top movies by shared tags, then by title
    pub fn recommendations(&self) -> Vec<ScoredMovie> {
        if self.selected.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredMovie> = self
            .movies
            .iter()
            .map(|movie| {
                let common_tags: Vec<String> = self
                    .selected
                    .iter()
                    .filter(|tag| movie.tags.contains(*tag))
                    .cloned()
                    .collect();
                ScoredMovie {
                    id: movie.id.clone(),
                    title: movie.title.clone(),
                    score: common_tags.len(),
                    common_tags,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.title.cmp(&b.title)));
        scored.truncate(TOP_N);
        scored.retain(|m| m.score > 0);
        scored
    }

    /// Most frequent shared tag among the recommendations
    pub fn dominant_tag(&self) -> Option<String> {
        let recommendations = self.recommendations();
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for tag in recommendations.iter().flat_map(|r| &r.common_tags) {
            let count = counts.entry(tag.as_str()).or_insert(0);
            if *count == 0 {
                order.push(tag.as_str());
            }
            *count += 1;
        }

        let mut dominant = None;
        let mut max = 0;
        for tag in order {
            if counts[tag] > max {
                max = counts[tag];
                dominant = Some(tag.to_string());
            }
        }
        dominant
    }
}

impl Mission for RecoMission {
    const ID: u32 = 3;

    fn is_complete(&self) -> bool {
        let recommendations = self.recommendations();
        self.selected.len() == MAX_TAGS
            && recommendations.len() >= 2
            && recommendations.iter().filter(|r| r.score >= 2).count() >= 2
    }

    fn reset(&mut self) {
        self.selected.clear();
    }
}
