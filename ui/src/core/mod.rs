//! Platform-agnostic helpers shared by the trackers.

pub mod format;
pub mod timing;
