//! Coverage scoring: how much of the selected audience sits inside an
//! activity window at a candidate publish hour.

use crate::platforms::PlatformWindow;
use zonecast_core::clock::project_hour;
use zonecast_core::types::Region;

/// Weight granted to a matching region on one of the window's preferred
/// weekdays.
pub const PREFERRED_DAY_WEIGHT: f64 = 1.5;

/// Unweighted coverage of a window at one candidate hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCoverage {
    pub matching_count: usize,
    /// Rounded display percentage; ranking compares `matching_count`.
    pub percent: u8,
}

/// Count regions whose projected local hour falls inside `window` when the
/// viewer's clock reads `candidate_hour`.
pub fn window_coverage(
    candidate_hour: u8,
    regions: &[Region],
    window: &PlatformWindow,
    reference_offset: f64,
) -> WindowCoverage {
    let matching_count = regions
        .iter()
        .filter(|r| window.contains(project_hour(candidate_hour, r.offset_hours, reference_offset)))
        .count();
    let percent = percent_of(matching_count as f64, regions.len() as f64);
    WindowCoverage {
        matching_count,
        percent,
    }
}

/// Weighted audience reach at one (hour, weekday) candidate: each matching
/// region contributes [`PREFERRED_DAY_WEIGHT`] on a preferred weekday and
/// 1.0 otherwise.
pub fn audience_reach(
    candidate_hour: u8,
    weekday: u8,
    regions: &[Region],
    window: &PlatformWindow,
    reference_offset: f64,
) -> f64 {
    let weight = if window.prefers(weekday) {
        PREFERRED_DAY_WEIGHT
    } else {
        1.0
    };
    let matching = regions
        .iter()
        .filter(|r| window.contains(project_hour(candidate_hour, r.offset_hours, reference_offset)))
        .count();
    matching as f64 * weight
}

/// Share of `max` as a rounded percentage, capped at 100.
pub(crate) fn percent_of(value: f64, max: f64) -> u8 {
    if max <= 0.0 {
        return 0;
    }
    ((value / max) * 100.0).round().min(100.0) as u8
}
