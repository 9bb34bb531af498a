//! DateTime display utilities.
//!
//! This module provides wrapper types for formatting timestamps in a
//! consistent, human-readable format using the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that provides system timezone formatting via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `YYYY-MM-DD HH:MM:SS TZ`
/// - Year, month, and day are zero-padded
/// - Time is in 24-hour format with zero-padded components
/// - Timezone abbreviation is included (e.g., UTC, CST, JST)
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
