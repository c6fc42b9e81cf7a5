//! Draft-and-list machinery shared by the emotion, behavior and sensory
//! trackers.
//!
//! Every tracker is the same shape: a form draft the user edits, a save
//! action that turns a valid draft into an immutable entry, and a
//! newest-first list of everything saved this session. [`Journal`] owns
//! both halves; each tracker only supplies its [`Draft`] type.

pub mod behavior;
pub mod emotion;
pub mod sensory;

use std::collections::VecDeque;
use std::fmt::Debug;

use thiserror::Error;
use time::OffsetDateTime;

use crate::core::timing;

/// Why a draft cannot be saved yet. Views only use this to disable the
/// save button; it is never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("no emotion selected")]
    MissingEmotion,

    #[error("behavior description is empty")]
    EmptyDescription,

    #[error("duration {0:?} is not a whole number of minutes (1 or more)")]
    InvalidDuration(String),

    #[error("no sensory type selected")]
    MissingSensoryType,

    #[error("no response type selected")]
    MissingResponseType,
}

/// A committed record. Only the creation instant is needed generically.
pub trait Entry: Debug + Clone + PartialEq {
    fn timestamp(&self) -> OffsetDateTime;
}

/// Uncommitted form state. `Default` is the cleared form a save resets to.
pub trait Draft: Debug + Default + Clone + PartialEq {
    type Entry: Entry;

    fn validate(&self) -> Result<(), DraftError>;

    /// Build the entry this draft describes, stamped with `timestamp`.
    fn build(&self, timestamp: OffsetDateTime) -> Result<Self::Entry, DraftError>;
}

/// One tracker's draft plus its append-to-front entry list.
#[derive(Debug, Clone, PartialEq)]
pub struct Journal<D: Draft> {
    draft: D,
    entries: VecDeque<D::Entry>,
}

// Written out so entries don't need `Default`.
impl<D: Draft> Default for Journal<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            entries: VecDeque::new(),
        }
    }
}

impl<D: Draft> Journal<D> {
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Saved entries, newest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &D::Entry> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&D::Entry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_save(&self) -> bool {
        self.draft.validate().is_ok()
    }

    /// Commit the draft stamped with the current time.
    pub fn save(&mut self) -> Result<&D::Entry, DraftError> {
        self.save_at(timing::now())
    }

    /// Commit the draft stamped with `at`, prepend it and reset the draft.
    ///
    /// `at` is clamped to the current head's timestamp so the list stays
    /// newest-first even if the clock steps backwards. On error neither the
    /// draft nor the list changes.
    pub fn save_at(&mut self, at: OffsetDateTime) -> Result<&D::Entry, DraftError> {
        let at = match self.entries.front() {
            Some(head) => at.max(head.timestamp()),
            None => at,
        };
        let entry = self.draft.build(at)?;
        self.entries.push_front(entry);
        self.draft = D::default();
        Ok(&self.entries[0])
    }
}

/// Class list for a picker button, highlighted when selected.
pub(crate) fn choice_class(accent: &str, is_selected: bool) -> String {
    if is_selected {
        format!("choice {accent} choice--selected")
    } else {
        format!("choice {accent}")
    }
}
