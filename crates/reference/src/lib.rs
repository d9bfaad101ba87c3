//! Static region reference data and wall-clock formatting for the
//! dashboard's presentation layer.

pub mod catalog;
pub mod format;

pub use catalog::{all_regions, default_selection, find, popular_regions, search};
pub use format::{flag_emoji, format_region_date, format_region_time};
