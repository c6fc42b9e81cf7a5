//! Wall-clock source used to stamp saved entries.

use time::OffsetDateTime;

/// Current instant in the local offset, or UTC when the offset can't be
/// determined (e.g. multi-threaded native runtimes on some Unix targets).
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
