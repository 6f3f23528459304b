//! Wall-clock helpers.
//!
//! Entity timestamps are stored as Unix milliseconds throughout the
//! application.

use chrono::Utc;

/// Current wall-clock time as Unix milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_millis_is_recent() {
        // 2020-01-01T00:00:00Z in millis
        assert!(now_millis() > 1_577_836_800_000);
    }
}
