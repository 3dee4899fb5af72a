//! Governance cycle date math
//!
//! Cycles are fixed-length (14 days) recurring voting periods counted from a
//! fixed genesis date. Cycle numbering starts at 1.

use chrono::{DateTime, Duration, Utc};

/// 2021-08-13T00:00:00Z, the start of cycle 1
const GENESIS_UNIX: i64 = 1_628_812_800;

/// Length of one governance cycle, in days
pub const CYCLE_LENGTH_DAYS: i64 = 14;

/// Format the date range covered by `length` cycles starting at `cycle_start`
///
/// Returns an empty string when either input is zero.
pub fn date_ranges_of_cycles(cycle_start: u32, length: u32) -> String {
    if cycle_start == 0 || length == 0 {
        return String::new();
    }

    let genesis = match DateTime::<Utc>::from_timestamp(GENESIS_UNIX, 0) {
        Some(dt) => dt,
        None => return String::new(),
    };

    let start = genesis + Duration::days((cycle_start as i64 - 1) * CYCLE_LENGTH_DAYS);
    let end = start + Duration::days(length as i64 * CYCLE_LENGTH_DAYS);

    format!(
        "{} - {}",
        start.format("%b %-d, %Y"),
        end.format("%b %-d, %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_inputs_yield_empty() {
        assert_eq!(date_ranges_of_cycles(0, 1), "");
        assert_eq!(date_ranges_of_cycles(1, 0), "");
        assert_eq!(date_ranges_of_cycles(0, 0), "");
    }

    #[test]
    fn test_first_cycle() {
        assert_eq!(date_ranges_of_cycles(1, 1), "Aug 13, 2021 - Aug 27, 2021");
    }

    #[test]
    fn test_offset_and_length() {
        // Cycle 3 starts 28 days after genesis; two cycles span 28 more.
        assert_eq!(date_ranges_of_cycles(3, 2), "Sep 10, 2021 - Oct 8, 2021");
    }

    #[test]
    fn test_range_start_matches_stride() {
        let genesis = DateTime::<Utc>::from_timestamp(GENESIS_UNIX, 0).unwrap();
        let expected = genesis + Duration::days(9 * CYCLE_LENGTH_DAYS);
        let label = date_ranges_of_cycles(10, 1);
        assert!(label.starts_with(&expected.format("%b %-d, %Y").to_string()));
    }
}
