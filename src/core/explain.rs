use super::model::{Institution, Prediction};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Explanation {
    pub headline: String,
    pub detail: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExplainError {
    #[error("no explanation available for {0}")]
    NotFound(String),
    #[error("explanation service unavailable: {0}")]
    Unavailable(String),
}

/// Source of the short "why this college" text shown for a selected tower.
pub trait ExplanationProvider {
    fn explain(
        &self,
        institution: &Institution,
        prediction: &Prediction,
    ) -> Result<Explanation, ExplainError>;
}

/// Canned notes keyed by institution name plus a rank-gap headline.
#[derive(Default)]
pub struct MockExplanationProvider {
    notes: HashMap<String, String>,
}

impl MockExplanationProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, name: &str, note: &str) -> Self {
        self.notes.insert(name.to_string(), note.to_string());
        self
    }

    pub fn with_builtin_notes() -> Self {
        Self::new()
            .with_note("NLSIU Bangalore", "Oldest NLU; five-year BA LLB with trimester system.")
            .with_note("NALSAR Hyderabad", "Strong corporate placements and moot court record.")
            .with_note("WBNUJS Kolkata", "Research-heavy curriculum with active law review.")
            .with_note("NLU Jodhpur", "Known for IP and business law specialisations.")
            .with_note("GNLU Gandhinagar", "Large intake; broad choice of honours streams.")
            .with_note("NLIU Bhopal", "Cyber law centre and steady litigation placements.")
            .with_note("HNLU Raipur", "Residential campus with a large seat matrix.")
            .with_note("RMLNLU Lucknow", "Balanced litigation and corporate outcomes.")
            .with_note("NUSRL Ranchi", "Growing institution with mining and tribal law focus.")
            .with_note("CNLU Patna", "Newer NLU with a compact batch size.")
    }
}

fn gap_headline(institution: &Institution, prediction: &Prediction) -> String {
    let cutoff = institution.rank_cutoff;
    let predicted = prediction.predicted_rank;
    match predicted.cmp(&cutoff) {
        std::cmp::Ordering::Less | std::cmp::Ordering::Equal => format!(
            "Predicted rank #{predicted} is inside the #{cutoff} cutoff for {}",
            institution.label()
        ),
        std::cmp::Ordering::Greater => format!(
            "{} more ranks needed to reach the #{cutoff} cutoff for {}",
            predicted - cutoff,
            institution.label()
        ),
    }
}

impl ExplanationProvider for MockExplanationProvider {
    fn explain(
        &self,
        institution: &Institution,
        prediction: &Prediction,
    ) -> Result<Explanation, ExplainError> {
        let note = self
            .notes
            .get(&institution.name)
            .ok_or_else(|| ExplainError::NotFound(institution.name.clone()))?;
        Ok(Explanation {
            headline: gap_headline(institution, prediction),
            detail: note.clone(),
        })
    }
}
