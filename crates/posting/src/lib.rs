//! Posting-time planning: platform windows, coverage scoring, and the
//! exhaustive best-time searches.

pub mod coverage;
pub mod platforms;
pub mod search;

pub use platforms::{PlatformProfile, PlatformWindow};
pub use search::{best_window_hour, compute_business_hours_coverage, compute_platform_coverage};
