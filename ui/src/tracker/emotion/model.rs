//! Emotion check-ins: which feeling, how strong, optional notes.

use time::OffsetDateTime;

use crate::tracker::{Draft, DraftError, Entry};

pub const INTENSITY_MIN: u8 = 1;
pub const INTENSITY_MAX: u8 = 10;
pub const INTENSITY_DEFAULT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Happy,
    Calm,
    Anxious,
    Frustrated,
    Excited,
}

impl Emotion {
    /// Display order of the picker.
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Calm,
        Emotion::Anxious,
        Emotion::Frustrated,
        Emotion::Excited,
    ];

    /// Canonical English label; doubles as the translation key.
    pub fn label(self) -> &'static str {
        match self {
            Emotion::Happy => "Happy",
            Emotion::Calm => "Calm",
            Emotion::Anxious => "Anxious",
            Emotion::Frustrated => "Frustrated",
            Emotion::Excited => "Excited",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Emotion::Happy => "👍",
            Emotion::Calm => "❤️",
            Emotion::Anxious => "😟",
            Emotion::Frustrated => "👎",
            Emotion::Excited => "😊",
        }
    }

    /// Theme modifier for the picker button and the list dot.
    pub fn accent_class(self) -> &'static str {
        match self {
            Emotion::Happy => "accent--green",
            Emotion::Calm => "accent--blue",
            Emotion::Anxious => "accent--yellow",
            Emotion::Frustrated => "accent--red",
            Emotion::Excited => "accent--purple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionEntry {
    pub emotion: Emotion,
    pub intensity: u8,
    pub notes: Option<String>,
    pub timestamp: OffsetDateTime,
}

impl Entry for EmotionEntry {
    fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionDraft {
    selected: Option<Emotion>,
    intensity: u8,
    notes: String,
}

impl Default for EmotionDraft {
    fn default() -> Self {
        Self {
            selected: None,
            intensity: INTENSITY_DEFAULT,
            notes: String::new(),
        }
    }
}

impl EmotionDraft {
    pub fn selected(&self) -> Option<Emotion> {
        self.selected
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn select_emotion(&mut self, emotion: Emotion) {
        self.selected = Some(emotion);
    }

    /// Clamped to `1..=10`, mirroring the range input's bounds.
    pub fn set_intensity(&mut self, level: u8) {
        self.intensity = level.clamp(INTENSITY_MIN, INTENSITY_MAX);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }
}

impl Draft for EmotionDraft {
    type Entry = EmotionEntry;

    fn validate(&self) -> Result<(), DraftError> {
        self.selected.map(|_| ()).ok_or(DraftError::MissingEmotion)
    }

    fn build(&self, timestamp: OffsetDateTime) -> Result<EmotionEntry, DraftError> {
        let emotion = self.selected.ok_or(DraftError::MissingEmotion)?;
        Ok(EmotionEntry {
            emotion,
            intensity: self.intensity,
            notes: (!self.notes.is_empty()).then(|| self.notes.clone()),
            timestamp,
        })
    }
}
