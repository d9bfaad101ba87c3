//! Exhaustive best-time searches over candidate publish hours.
//!
//! Both variants scan every candidate and keep the strictly-greatest
//! score, so the first candidate encountered in iteration order wins any
//! tie. Hours iterate ascending; the platform variant nests weekdays
//! (Monday through Friday) inside each hour.

use chrono::NaiveTime;
use tracing::debug;

use crate::coverage::{self, WindowCoverage, PREFERRED_DAY_WEIGHT};
use crate::platforms::{self, PlatformWindow};
use zonecast_core::clock::weekday_name;
use zonecast_core::error::{ZoneCastError, ZoneCastResult};
use zonecast_core::types::{
    ClockSnapshot, CoverageQuality, CoverageResult, DisplayOptions, PlatformRecommendation,
    ReachLevel, RegionSet,
};

/// Best single publish hour for an arbitrary activity window.
///
/// Returns `None` when no regions are selected; there is nothing to rank.
pub fn best_window_hour(
    regions: &RegionSet,
    clock: &ClockSnapshot,
    window: &PlatformWindow,
    options: &DisplayOptions,
) -> Option<CoverageResult> {
    if regions.is_empty() {
        return None;
    }

    let snapshot = regions.regions();
    let mut best_hour = 0u8;
    let mut best = WindowCoverage {
        matching_count: 0,
        percent: 0,
    };

    for hour in 0..24u8 {
        let cov = coverage::window_coverage(hour, snapshot, window, clock.utc_offset_hours);
        if cov.matching_count > best.matching_count {
            best_hour = hour;
            best = cov;
        }
    }

    debug!(
        best_hour,
        matching = best.matching_count,
        total = snapshot.len(),
        "best window hour selected"
    );

    Some(CoverageResult {
        best_hour,
        formatted_time: format_hour(best_hour, options),
        coverage_percent: best.percent,
        matching_count: best.matching_count,
        total_count: snapshot.len(),
        quality: CoverageQuality::from_percent(best.percent),
    })
}

/// Business-hours recommendation over the generic profile window.
pub fn compute_business_hours_coverage(
    regions: &RegionSet,
    clock: &ClockSnapshot,
    options: &DisplayOptions,
) -> Option<CoverageResult> {
    best_window_hour(regions, clock, &platforms::generic().window, options)
}

/// Weighted platform recommendation: the (hour, weekday) pair with the
/// greatest audience reach, Monday through Friday only.
///
/// An unknown profile key is a caller defect and fails loudly; an empty
/// region set is the well-defined empty outcome.
pub fn compute_platform_coverage(
    profile_key: &str,
    regions: &RegionSet,
    clock: &ClockSnapshot,
    options: &DisplayOptions,
) -> ZoneCastResult<Option<PlatformRecommendation>> {
    let profile = platforms::find(profile_key).ok_or_else(|| ZoneCastError::UnknownPlatform {
        key: profile_key.to_string(),
    })?;

    if regions.is_empty() {
        return Ok(None);
    }

    let snapshot = regions.regions();
    let window = &profile.window;
    let mut best_hour = 0u8;
    let mut best_weekday = 1u8;
    let mut best_reach = 0.0f64;

    for hour in 0..24u8 {
        for weekday in 1..=5u8 {
            let reach =
                coverage::audience_reach(hour, weekday, snapshot, window, clock.utc_offset_hours);
            if reach > best_reach {
                best_hour = hour;
                best_weekday = weekday;
                best_reach = reach;
            }
        }
    }

    // Normalized against every region matching on a preferred day.
    let percent = coverage::percent_of(best_reach, snapshot.len() as f64 * PREFERRED_DAY_WEIGHT);
    let matching =
        coverage::window_coverage(best_hour, snapshot, window, clock.utc_offset_hours)
            .matching_count;

    debug!(
        platform = profile.key,
        best_hour, best_weekday, best_reach, "best platform slot selected"
    );

    Ok(Some(PlatformRecommendation {
        platform: profile.key.to_string(),
        best_hour,
        best_weekday,
        day_name: weekday_name(best_weekday).to_string(),
        formatted_time: format_hour(best_hour, options),
        coverage_percent: percent,
        audience_reach: best_reach,
        matching_count: matching,
        total_count: snapshot.len(),
        reach_level: ReachLevel::from_percent(percent),
    }))
}

fn format_hour(hour: u8, options: &DisplayOptions) -> String {
    let time = NaiveTime::from_hms_opt(u32::from(hour), 0, 0).unwrap_or_default();
    if options.twenty_four_hour {
        time.format("%H:%M").to_string()
    } else {
        time.format("%-I:%M %p").to_string()
    }
}
