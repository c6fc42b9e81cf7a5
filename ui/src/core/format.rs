//! Formatting helpers for presenting entries.

use time::{macros::format_description, OffsetDateTime};

/// Norwegian short date-time: numeric day and month, two-digit hour and
/// minute, rendered in the value's own offset (e.g. `19.10., 14:05`).
pub fn format_local_timestamp(at: OffsetDateTime) -> String {
    at.format(&format_description!(
        "[day padding:none].[month padding:none]., [hour]:[minute]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn day_and_month_are_unpadded() {
        assert_eq!(
            format_local_timestamp(datetime!(2024-03-07 09:05 +01:00)),
            "7.3., 09:05"
        );
    }

    #[test]
    fn hour_and_minute_are_two_digits() {
        assert_eq!(
            format_local_timestamp(datetime!(2024-12-24 00:00 UTC)),
            "24.12., 00:00"
        );
        assert_eq!(
            format_local_timestamp(datetime!(2025-10-19 23:59:59 +02:00)),
            "19.10., 23:59"
        );
    }

    #[test]
    fn renders_in_the_value_offset() {
        let utc = datetime!(2024-06-30 22:30 UTC);
        assert_eq!(format_local_timestamp(utc), "30.6., 22:30");
        assert_eq!(
            format_local_timestamp(utc.to_offset(time::macros::offset!(+2))),
            "1.7., 00:30"
        );
    }
}
