//! Mission 1: find and fix the errors in a small survey table

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::Mission;

pub const FILLER: &str = "Non renseigné";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Prenom,
    Age,
    Ville,
    Sport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowError {
    AgeManquant,
    VilleVide,
    SportVide,
    AgeInvalide,
    Doublon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: u32,
    pub prenom: String,
    pub age: Option<i32>,
    #[serde(default)]
    pub ville: String,
    pub sport: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningRules {
    pub age_valid_range: (i32, i32),
    pub missing_value_fields: Vec<Field>,
    pub duplicate_key_fields: Vec<Field>,
}

/// A row with the first error found on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedRow {
    pub row: Row,
    pub error: Option<RowError>,
    pub invalid_value: Option<i32>,
    pub corrected: bool,
    pub is_duplicate: bool,
}

impl Row {
    fn key(&self, fields: &[Field]) -> Vec<String> {
        fields
            .iter()
            .map(|field| match field {
                Field::Prenom => self.prenom.clone(),
                Field::Age => format!("{:?}", self.age),
                Field::Ville => self.ville.clone(),
                Field::Sport => format!("{:?}", self.sport),
            })
            .collect()
    }
}

/// Flag every row with its first error, in rule order
pub fn detect_errors(rows: &[Row], rules: &CleaningRules) -> Vec<CheckedRow> {
    let (min_age, max_age) = rules.age_valid_range;
    let checks_missing = |field| rules.missing_value_fields.contains(&field);
    let mut seen_keys = AHashSet::with_capacity(rows.len());

    rows.iter()
        .map(|row| {
            let mut errors = Vec::new();
            let mut invalid_value = None;

            if checks_missing(Field::Age) && row.age.is_none() {
                errors.push(RowError::AgeManquant);
            }
            if checks_missing(Field::Ville) && row.ville.is_empty() {
                errors.push(RowError::VilleVide);
            }
            if checks_missing(Field::Sport) && row.sport.as_deref().map_or(true, str::is_empty) {
                errors.push(RowError::SportVide);
            }

            if let Some(age) = row.age {
                if age < min_age || age > max_age {
                    errors.push(RowError::AgeInvalide);
                    invalid_value = Some(age);
                }
            }

            // Only rows seen earlier count as originals.
            let is_duplicate = !seen_keys.insert(row.key(&rules.duplicate_key_fields));
            if is_duplicate {
                errors.push(RowError::Doublon);
            }

            CheckedRow {
                row: row.clone(),
                error: errors.first().copied(),
                invalid_value,
                corrected: false,
                is_duplicate,
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct CleaningMission {
    source: Vec<Row>,
    rules: CleaningRules,
    rows: Vec<CheckedRow>,
}

impl CleaningMission {
    pub fn new(source: Vec<Row>, rules: CleaningRules) -> Self {
        let rows = detect_errors(&source, &rules);
        Self { source, rules, rows }
    }

    pub fn rows(&self) -> &[CheckedRow] {
        &self.rows
    }

    /// Share of rows without an uncorrected error, as a rounded percentage
    pub fn quality(&self) -> u32 {
        let total = self.rows.len();
        if total == 0 {
            return 0;
        }
        let errors = self
            .rows
            .iter()
            .filter(|r| r.error.is_some() && !r.corrected)
            .count();
        (((total - errors) as f64 / total as f64) * 100.0).round() as u32
    }

    /// Replace a missing or out-of-range age; returns whether the row changed
    pub fn fix_age(&mut self, row_id: u32) -> bool {
        let (min_age, max_age) = self.rules.age_valid_range;
        let Some(row) = self.row_mut(row_id) else {
            return false;
        };
        if !matches!(row.error, Some(RowError::AgeInvalide | RowError::AgeManquant)) {
            return false;
        }

        let fixed = match row.row.age {
            None => (f64::from(min_age + max_age) / 2.0).round() as i32,
            Some(age) => age.clamp(min_age, max_age),
        };
        row.row.age = Some(fixed);
        row.mark_corrected();
        true
    }

    pub fn fill_ville(&mut self, row_id: u32) -> bool {
        match self.row_mut(row_id) {
            Some(row) if row.error == Some(RowError::VilleVide) => {
                row.row.ville = FILLER.to_string();
                row.mark_corrected();
                true
            }
            _ => false,
        }
    }

    pub fn fill_sport(&mut self, row_id: u32) -> bool {
        match self.row_mut(row_id) {
            Some(row) if row.error == Some(RowError::SportVide) => {
                row.row.sport = Some(FILLER.to_string());
                row.mark_corrected();
                true
            }
            _ => false,
        }
    }

    /// Drop a row from the table
    pub fn remove_duplicate(&mut self, row_id: u32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.row.id != row_id);
        self.rows.len() != before
    }

    fn row_mut(&mut self, row_id: u32) -> Option<&mut CheckedRow> {
        self.rows.iter_mut().find(|r| r.row.id == row_id)
    }
}

impl CheckedRow {
    fn mark_corrected(&mut self) {
        self.error = None;
        self.corrected = true;
    }
}

impl Mission for CleaningMission {
    const ID: u32 = 1;

    fn is_complete(&self) -> bool {
        self.quality() == 100
    }

    fn reset(&mut self) {
        self.rows = detect_errors(&self.source, &self.rules);
    }
}
