//! Wall-clock presentation helpers for region cards.

use zonecast_core::clock::local_time;
use zonecast_core::types::{ClockSnapshot, DisplayOptions, Region};

/// Region-local time string, honoring the 12/24-hour and seconds toggles.
pub fn format_region_time(
    region: &Region,
    snapshot: &ClockSnapshot,
    options: &DisplayOptions,
) -> String {
    let local = local_time(region, snapshot);
    let pattern = match (options.twenty_four_hour, options.show_seconds) {
        (true, true) => "%H:%M:%S",
        (true, false) => "%H:%M",
        (false, true) => "%-I:%M:%S %p",
        (false, false) => "%-I:%M %p",
    };
    local.format(pattern).to_string()
}

/// Region-local date string, e.g. `"Tue, Apr 1, 2025"`.
pub fn format_region_date(region: &Region, snapshot: &ClockSnapshot) -> String {
    local_time(region, snapshot).format("%a, %b %-d, %Y").to_string()
}

/// Flag emoji for an ISO-3166 alpha-2 country code.
pub fn flag_emoji(country_code: &str) -> String {
    country_code
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter_map(|c| char::from_u32(0x1F1E6 + u32::from(c.to_ascii_uppercase()) - u32::from('A')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn region(offset: f64, country: &str) -> Region {
        Region::new("r", "R", "R", country, offset).unwrap()
    }

    fn snapshot() -> ClockSnapshot {
        // 2025-03-31 23:05:09 UTC.
        ClockSnapshot::utc(Utc.with_ymd_and_hms(2025, 3, 31, 23, 5, 9).unwrap())
    }

    #[test]
    fn test_time_formats() {
        let tokyo = region(9.0, "JP");
        let twelve = DisplayOptions {
            twenty_four_hour: false,
            show_seconds: true,
        };
        let twenty_four = DisplayOptions {
            twenty_four_hour: true,
            show_seconds: false,
        };

        assert_eq!(format_region_time(&tokyo, &snapshot(), &twelve), "8:05:09 AM");
        assert_eq!(format_region_time(&tokyo, &snapshot(), &twenty_four), "08:05");
    }

    #[test]
    fn test_half_hour_offset_time() {
        let mumbai = region(5.5, "IN");
        let options = DisplayOptions {
            twenty_four_hour: true,
            show_seconds: false,
        };
        assert_eq!(format_region_time(&mumbai, &snapshot(), &options), "04:35");
    }

    #[test]
    fn test_date_rolls_over_with_offset() {
        let tokyo = region(9.0, "JP");
        let la = region(-8.0, "US");
        assert_eq!(format_region_date(&tokyo, &snapshot()), "Tue, Apr 1, 2025");
        assert_eq!(format_region_date(&la, &snapshot()), "Mon, Mar 31, 2025");
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(flag_emoji("JP"), "🇯🇵");
        assert_eq!(flag_emoji("us"), "🇺🇸");
        assert_eq!(flag_emoji("GB"), "🇬🇧");
        assert_eq!(flag_emoji(""), "");
    }
}
