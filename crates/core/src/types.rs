use crate::error::{ZoneCastError, ZoneCastResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest UTC offset observed anywhere in the world.
pub const MIN_UTC_OFFSET: f64 = -12.0;
/// Highest UTC offset observed anywhere in the world.
pub const MAX_UTC_OFFSET: f64 = 14.0;

/// A geographic region pinned to a fixed UTC offset.
///
/// A region never changes offset during the life of the process; DST and
/// historical transitions are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    /// Opaque unique key, stable across a session.
    pub id: String,
    pub display_name: String,
    /// Presentation label, e.g. `"(GMT+09:00) Tokyo"`.
    pub formatted_name: String,
    /// ISO-3166 alpha-2 code, used only for flag rendering.
    pub country_code: String,
    /// Signed whole or half hours from UTC, in [-12, +14].
    pub offset_hours: f64,
}

impl Region {
    /// Build a region, rejecting offsets outside [-12, +14] or finer than
    /// half-hour granularity.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        formatted_name: impl Into<String>,
        country_code: impl Into<String>,
        offset_hours: f64,
    ) -> ZoneCastResult<Self> {
        if !(MIN_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&offset_hours)
            || (offset_hours * 2.0).fract() != 0.0
        {
            return Err(ZoneCastError::InvalidOffset {
                offset: offset_hours,
            });
        }
        Ok(Self {
            id: id.into(),
            display_name: display_name.into(),
            formatted_name: formatted_name.into(),
            country_code: country_code.into(),
            offset_hours,
        })
    }
}

/// Ordered set of selected regions, unique by id.
///
/// Mutated only through [`RegionSet::add`] and [`RegionSet::remove`];
/// computations read it as an immutable snapshot and never write back.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegionSet {
    regions: Vec<Region>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list, rejecting duplicate ids.
    pub fn from_regions(regions: Vec<Region>) -> ZoneCastResult<Self> {
        let mut set = Self::new();
        for region in regions {
            set.add(region)?;
        }
        Ok(set)
    }

    /// Append a region, rejecting an id that is already selected.
    pub fn add(&mut self, region: Region) -> ZoneCastResult<()> {
        if self.contains(&region.id) {
            return Err(ZoneCastError::DuplicateRegion {
                id: region.id.clone(),
            });
        }
        tracing::debug!(id = %region.id, offset = region.offset_hours, "region selected");
        self.regions.push(region);
        Ok(())
    }

    /// Remove a region by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.regions.len();
        self.regions.retain(|r| r.id != id);
        let removed = self.regions.len() < before;
        if removed {
            tracing::debug!(id, "region deselected");
        }
        removed
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.iter().any(|r| r.id == id)
    }

    /// Snapshot view for one computation.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Point-in-time clock reading sampled by the presentation layer on its
/// tick. The viewer's own UTC offset rides along so candidate hours have a
/// reference frame; the core never reads the system clock itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClockSnapshot {
    pub instant: DateTime<Utc>,
    /// UTC offset of the viewer's wall clock, in hours.
    pub utc_offset_hours: f64,
}

impl ClockSnapshot {
    pub fn new(instant: DateTime<Utc>, utc_offset_hours: f64) -> Self {
        Self {
            instant,
            utc_offset_hours,
        }
    }

    /// Snapshot for a viewer whose wall clock is UTC.
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, 0.0)
    }
}

/// Formatting toggles. These affect only rendered strings, never ranking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayOptions {
    pub twenty_four_hour: bool,
    pub show_seconds: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            twenty_four_hour: false,
            show_seconds: true,
        }
    }
}

/// Badge banding for business-hours coverage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CoverageQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CoverageQuality {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            75.. => Self::Excellent,
            50..=74 => Self::Good,
            25..=49 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

/// Five-step banding for the audience-reach meter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReachLevel {
    VeryHigh,
    High,
    Moderate,
    Low,
    Minimal,
}

impl ReachLevel {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            80.. => Self::VeryHigh,
            60..=79 => Self::High,
            40..=59 => Self::Moderate,
            20..=39 => Self::Low,
            _ => Self::Minimal,
        }
    }
}

/// Best publish hour for a single activity window. Produced fresh on every
/// invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoverageResult {
    /// Hour 0..=23 in the viewer's frame.
    pub best_hour: u8,
    /// `best_hour` rendered per the display options.
    pub formatted_time: String,
    /// Rounded share of regions inside the window, 0..=100.
    pub coverage_percent: u8,
    pub matching_count: usize,
    pub total_count: usize,
    pub quality: CoverageQuality,
}

/// Best (hour, weekday) slot for a platform profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformRecommendation {
    /// Profile key the recommendation was computed for.
    pub platform: String,
    pub best_hour: u8,
    /// Weekday index, 0=Sunday..6=Saturday; candidates are Monday..Friday.
    pub best_weekday: u8,
    pub day_name: String,
    pub formatted_time: String,
    /// Reach normalized against every region matching on a preferred day.
    pub coverage_percent: u8,
    /// Weighted sum behind the ranking: 1.5 per matching region on a
    /// preferred weekday, 1.0 otherwise.
    pub audience_reach: f64,
    /// Plain count of matching regions at the winning slot.
    pub matching_count: usize,
    pub total_count: usize,
    pub reach_level: ReachLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str, offset: f64) -> Region {
        Region::new(id, id, format!("(GMT) {id}"), "US", offset).unwrap()
    }

    #[test]
    fn test_region_offset_validation() {
        assert!(Region::new("a", "A", "A", "US", 5.5).is_ok());
        assert!(Region::new("a", "A", "A", "US", -12.0).is_ok());
        assert!(Region::new("a", "A", "A", "US", 14.0).is_ok());

        assert!(matches!(
            Region::new("a", "A", "A", "US", 14.5),
            Err(ZoneCastError::InvalidOffset { .. })
        ));
        assert!(matches!(
            Region::new("a", "A", "A", "US", -12.5),
            Err(ZoneCastError::InvalidOffset { .. })
        ));
        // Quarter-hour zones are not modeled.
        assert!(matches!(
            Region::new("a", "A", "A", "US", 5.75),
            Err(ZoneCastError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn test_region_set_rejects_duplicates() {
        let mut set = RegionSet::new();
        set.add(region("tokyo", 9.0)).unwrap();
        assert!(matches!(
            set.add(region("tokyo", 9.0)),
            Err(ZoneCastError::DuplicateRegion { .. })
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_region_set_add_remove() {
        let mut set = RegionSet::new();
        set.add(region("tokyo", 9.0)).unwrap();
        set.add(region("london", 0.0)).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("london"));

        assert!(set.remove("london"));
        assert!(!set.contains("london"));
        assert!(!set.remove("london"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_regions_rejects_duplicates() {
        let result = RegionSet::from_regions(vec![region("a", 0.0), region("a", 1.0)]);
        assert!(matches!(
            result,
            Err(ZoneCastError::DuplicateRegion { .. })
        ));
    }

    #[test]
    fn test_coverage_quality_bands() {
        assert_eq!(CoverageQuality::from_percent(100), CoverageQuality::Excellent);
        assert_eq!(CoverageQuality::from_percent(75), CoverageQuality::Excellent);
        assert_eq!(CoverageQuality::from_percent(74), CoverageQuality::Good);
        assert_eq!(CoverageQuality::from_percent(50), CoverageQuality::Good);
        assert_eq!(CoverageQuality::from_percent(49), CoverageQuality::Fair);
        assert_eq!(CoverageQuality::from_percent(25), CoverageQuality::Fair);
        assert_eq!(CoverageQuality::from_percent(24), CoverageQuality::Poor);
        assert_eq!(CoverageQuality::from_percent(0), CoverageQuality::Poor);
    }

    #[test]
    fn test_reach_level_bands() {
        assert_eq!(ReachLevel::from_percent(80), ReachLevel::VeryHigh);
        assert_eq!(ReachLevel::from_percent(79), ReachLevel::High);
        assert_eq!(ReachLevel::from_percent(60), ReachLevel::High);
        assert_eq!(ReachLevel::from_percent(40), ReachLevel::Moderate);
        assert_eq!(ReachLevel::from_percent(20), ReachLevel::Low);
        assert_eq!(ReachLevel::from_percent(19), ReachLevel::Minimal);
    }
}
