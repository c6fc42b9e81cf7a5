//! Behavior incidents in antecedent/behavior/consequence form.

use time::OffsetDateTime;

use crate::tracker::{Draft, DraftError, Entry};

/// Initial text of the duration field.
pub const DEFAULT_DURATION: &str = "5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorEntry {
    pub description: String,
    pub duration_minutes: u32,
    pub antecedent: String,
    pub consequence: String,
    pub timestamp: OffsetDateTime,
}

impl Entry for BehaviorEntry {
    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

/// Form state. Duration is kept as the raw field text and only parsed on
/// validation, so a half-typed value never gets rewritten under the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorDraft {
    pub description: String,
    pub duration: String,
    pub antecedent: String,
    pub consequence: String,
}

impl Default for BehaviorDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            duration: DEFAULT_DURATION.to_string(),
            antecedent: String::new(),
            consequence: String::new(),
        }
    }
}

impl BehaviorDraft {
    /// Whole minutes, at least one. Surrounding whitespace is ignored;
    /// anything else that isn't a positive integer is rejected.
    pub fn duration_minutes(&self) -> Result<u32, DraftError> {
        match self.duration.trim().parse::<u32>() {
            Ok(minutes) if minutes >= 1 => Ok(minutes),
            _ => Err(DraftError::InvalidDuration(self.duration.clone())),
        }
    }
}

impl Draft for BehaviorDraft {
    type Entry = BehaviorEntry;

    fn validate(&self) -> Result<(), DraftError> {
        if self.description.is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        self.duration_minutes().map(|_| ())
    }

    fn build(&self, timestamp: OffsetDateTime) -> Result<BehaviorEntry, DraftError> {
        self.validate()?;
        Ok(BehaviorEntry {
            description: self.description.clone(),
            duration_minutes: self.duration_minutes()?,
            antecedent: self.antecedent.clone(),
            consequence: self.consequence.clone(),
            timestamp,
        })
    }
}
