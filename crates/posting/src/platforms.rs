//! Static posting-window profiles for the supported platforms.

use serde::Serialize;
use zonecast_core::error::{ZoneCastError, ZoneCastResult};

/// Hour range and preferred weekdays of one posting profile.
///
/// Hours are inclusive on both ends. Weekday indices are
/// 0=Sunday..6=Saturday; an empty slice means no weekday preference.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlatformWindow {
    pub start_hour: u8,
    pub end_hour: u8,
    pub preferred_weekdays: &'static [u8],
}

impl PlatformWindow {
    /// Plain business-hours window with no weekday preference, for
    /// config-supplied hour ranges.
    pub fn business(start_hour: u8, end_hour: u8) -> ZoneCastResult<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(ZoneCastError::InvalidWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
            preferred_weekdays: &[],
        })
    }

    /// Whether a projected local hour falls inside the window.
    pub fn contains(&self, hour: f64) -> bool {
        hour >= f64::from(self.start_hour) && hour <= f64::from(self.end_hour)
    }

    pub fn prefers(&self, weekday: u8) -> bool {
        self.preferred_weekdays.contains(&weekday)
    }
}

/// A named posting profile: key, label, window, and the engagement note
/// shown alongside the recommendation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlatformProfile {
    pub key: &'static str,
    pub label: &'static str,
    pub window: PlatformWindow,
    pub engagement_note: &'static str,
}

/// All profiles, in presentation order. Peak windows and preferred days
/// follow published engagement research per platform.
pub const PROFILES: [PlatformProfile; 5] = [
    PlatformProfile {
        key: "generic",
        label: "Business Hours",
        window: PlatformWindow {
            start_hour: 9,
            end_hour: 17,
            preferred_weekdays: &[],
        },
        engagement_note: "Standard 9-to-5 overlap across the selected regions.",
    },
    PlatformProfile {
        key: "linkedin",
        label: "LinkedIn",
        window: PlatformWindow {
            start_hour: 9,
            end_hour: 12,
            preferred_weekdays: &[2, 3],
        },
        engagement_note: "LinkedIn engagement is highest during business hours on weekdays.",
    },
    PlatformProfile {
        key: "twitter",
        label: "X / Twitter",
        window: PlatformWindow {
            start_hour: 8,
            end_hour: 16,
            preferred_weekdays: &[1, 3, 4],
        },
        engagement_note: "X/Twitter sees high engagement throughout the day with peaks in the morning.",
    },
    PlatformProfile {
        key: "instagram",
        label: "Instagram",
        window: PlatformWindow {
            start_hour: 11,
            end_hour: 13,
            preferred_weekdays: &[2, 4],
        },
        engagement_note: "Instagram users are most active during lunch hours and evenings.",
    },
    PlatformProfile {
        key: "facebook",
        label: "Facebook",
        window: PlatformWindow {
            start_hour: 13,
            end_hour: 16,
            preferred_weekdays: &[3, 4],
        },
        engagement_note: "Facebook sees peak engagement in the afternoons.",
    },
];

/// Exhaustively enumerable profile table, one recommendation per entry.
pub fn profiles() -> &'static [PlatformProfile] {
    &PROFILES
}

/// Look up a profile by its stable key.
pub fn find(key: &str) -> Option<&'static PlatformProfile> {
    PROFILES.iter().find(|p| p.key == key)
}

/// The generic business-hours profile.
pub fn generic() -> &'static PlatformProfile {
    &PROFILES[0]
}
