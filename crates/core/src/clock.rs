//! Fixed-offset clock arithmetic: projecting instants and candidate hours
//! into a region's frame.

use crate::types::{ClockSnapshot, Region};
use chrono::{Duration, NaiveDateTime};

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Name for a weekday index, 0=Sunday..6=Saturday.
pub fn weekday_name(day: u8) -> &'static str {
    WEEKDAY_NAMES[usize::from(day) % 7]
}

/// Wall-clock date-time observed in `region` at the snapshot instant.
///
/// Calendar rollover (midnight, month, year) is chrono's concern; the hour
/// never comes from unwrapped accumulation.
pub fn local_time(region: &Region, snapshot: &ClockSnapshot) -> NaiveDateTime {
    let offset_minutes = (region.offset_hours * 60.0).round() as i64;
    (snapshot.instant + Duration::minutes(offset_minutes)).naive_utc()
}

/// Hour a region observes when the viewer's clock reads `candidate_hour`.
///
/// Single sign convention for the whole workspace: add the region offset,
/// subtract the reference offset. The result is always in [0, 24).
pub fn project_hour(candidate_hour: u8, region_offset: f64, reference_offset: f64) -> f64 {
    (f64::from(candidate_hour) + region_offset - reference_offset).rem_euclid(24.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_UTC_OFFSET, MIN_UTC_OFFSET};
    use chrono::{Datelike, TimeZone, Timelike, Utc};

    fn region(offset: f64) -> Region {
        Region::new("r", "R", "R", "US", offset).unwrap()
    }

    #[test]
    fn test_project_hour_stays_in_range() {
        // Every half-hour offset in the valid range, against extreme
        // reference frames, for all 24 candidate hours.
        for reference in [MIN_UTC_OFFSET, 0.0, MAX_UTC_OFFSET] {
            let mut offset = MIN_UTC_OFFSET;
            while offset <= MAX_UTC_OFFSET {
                for hour in 0..24u8 {
                    let projected = project_hour(hour, offset, reference);
                    assert!(
                        (0.0..24.0).contains(&projected),
                        "hour {hour} offset {offset} reference {reference} gave {projected}"
                    );
                }
                offset += 0.5;
            }
        }
    }

    #[test]
    fn test_project_hour_extremes() {
        // +14 region viewed from a -12 frame wraps forward.
        assert_eq!(project_hour(0, 14.0, -12.0), 2.0);
        // -12 region viewed from a +14 frame wraps backward.
        assert_eq!(project_hour(0, -12.0, 14.0), 22.0);
        assert_eq!(project_hour(23, 9.0, 0.0), 8.0);
    }

    #[test]
    fn test_project_hour_half_offsets() {
        assert_eq!(project_hour(9, 5.5, 0.0), 14.5);
        assert_eq!(project_hour(22, 5.5, 2.0), 1.5);
    }

    #[test]
    fn test_local_time_day_rollover() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 31, 23, 30, 0).unwrap();
        let snapshot = ClockSnapshot::utc(instant);

        let tokyo = local_time(&region(9.0), &snapshot);
        assert_eq!((tokyo.month(), tokyo.day()), (4, 1));
        assert_eq!((tokyo.hour(), tokyo.minute()), (8, 30));

        let la = local_time(&region(-8.0), &snapshot);
        assert_eq!((la.month(), la.day()), (3, 31));
        assert_eq!(la.hour(), 15);
    }

    #[test]
    fn test_local_time_year_rollover() {
        let instant = Utc.with_ymd_and_hms(2025, 12, 31, 20, 0, 0).unwrap();
        let snapshot = ClockSnapshot::utc(instant);

        let auckland = local_time(&region(12.0), &snapshot);
        assert_eq!((auckland.year(), auckland.month(), auckland.day()), (2026, 1, 1));
        assert_eq!(auckland.hour(), 8);
    }

    #[test]
    fn test_local_time_half_hour_offset() {
        let instant = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mumbai = local_time(&region(5.5), &ClockSnapshot::utc(instant));
        assert_eq!((mumbai.hour(), mumbai.minute()), (17, 30));
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(0), "Sunday");
        assert_eq!(weekday_name(2), "Tuesday");
        assert_eq!(weekday_name(6), "Saturday");
    }
}
