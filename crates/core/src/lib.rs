pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{ZoneCastError, ZoneCastResult};
pub use types::{
    ClockSnapshot, CoverageResult, DisplayOptions, PlatformRecommendation, Region, RegionSet,
};
