//! Sensory input observations: which channel, how the person responded,
//! and where it happened.

use time::OffsetDateTime;

use crate::tracker::{Draft, DraftError, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensoryType {
    Visual,
    Auditory,
    Tactile,
    Movement,
    BodyAwareness,
}

impl SensoryType {
    pub const ALL: [SensoryType; 5] = [
        SensoryType::Visual,
        SensoryType::Auditory,
        SensoryType::Tactile,
        SensoryType::Movement,
        SensoryType::BodyAwareness,
    ];

    /// Canonical English label; doubles as the translation key.
    pub fn label(self) -> &'static str {
        match self {
            SensoryType::Visual => "Visual",
            SensoryType::Auditory => "Auditory",
            SensoryType::Tactile => "Tactile",
            SensoryType::Movement => "Movement",
            SensoryType::BodyAwareness => "Body Awareness",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SensoryType::Visual => "👁️",
            SensoryType::Auditory => "👂",
            SensoryType::Tactile => "✋",
            SensoryType::Movement => "🔄",
            SensoryType::BodyAwareness => "🧠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    Seeking,
    Avoiding,
    Neutral,
}

impl ResponseType {
    pub const ALL: [ResponseType; 3] = [
        ResponseType::Seeking,
        ResponseType::Avoiding,
        ResponseType::Neutral,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResponseType::Seeking => "Seeking",
            ResponseType::Avoiding => "Avoiding",
            ResponseType::Neutral => "Neutral",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            ResponseType::Seeking => "accent--blue",
            ResponseType::Avoiding => "accent--red",
            ResponseType::Neutral => "accent--teal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensoryEntry {
    pub sensory_type: SensoryType,
    pub response_type: ResponseType,
    pub environment: String,
    pub timestamp: OffsetDateTime,
}

impl Entry for SensoryEntry {
    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensoryDraft {
    pub sensory_type: Option<SensoryType>,
    pub response_type: Option<ResponseType>,
    pub environment: String,
}

impl Draft for SensoryDraft {
    type Entry = SensoryEntry;

    fn validate(&self) -> Result<(), DraftError> {
        self.build_parts().map(|_| ())
    }

    fn build(&self, timestamp: OffsetDateTime) -> Result<SensoryEntry, DraftError> {
        let (sensory_type, response_type) = self.build_parts()?;
        Ok(SensoryEntry {
            sensory_type,
            response_type,
            environment: self.environment.clone(),
            timestamp,
        })
    }
}

impl SensoryDraft {
    fn build_parts(&self) -> Result<(SensoryType, ResponseType), DraftError> {
        let sensory = self.sensory_type.ok_or(DraftError::MissingSensoryType)?;
        let response = self.response_type.ok_or(DraftError::MissingResponseType)?;
        Ok((sensory, response))
    }
}
