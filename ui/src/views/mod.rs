//! Page-level views selected by the shell. The tracker pages live with
//! their models under `tracker/`.

mod coming_soon;
pub use coming_soon::{ComingSoon, Placeholder};

pub use crate::tracker::behavior::BehaviorTracker;
pub use crate::tracker::emotion::EmotionTracker;
pub use crate::tracker::sensory::SensoryTracker;
