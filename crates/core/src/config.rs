use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ZONECAST__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub posting: PostingConfig,
}

/// Clock sampling and display defaults for the dashboard shell.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// How often the shell samples a fresh `ClockSnapshot`.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_twenty_four_hour")]
    pub twenty_four_hour: bool,
    #[serde(default = "default_show_seconds")]
    pub show_seconds: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostingConfig {
    /// Generic business window start hour, inclusive.
    #[serde(default = "default_business_start_hour")]
    pub business_start_hour: u8,
    /// Generic business window end hour, inclusive.
    #[serde(default = "default_business_end_hour")]
    pub business_end_hour: u8,
    /// Maximum catalog search results surfaced at once.
    #[serde(default = "default_search_result_cap")]
    pub search_result_cap: usize,
}

// Default functions
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_twenty_four_hour() -> bool {
    false
}
fn default_show_seconds() -> bool {
    true
}
fn default_business_start_hour() -> u8 {
    9
}
fn default_business_end_hour() -> u8 {
    17
}
fn default_search_result_cap() -> usize {
    6
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            twenty_four_hour: default_twenty_four_hour(),
            show_seconds: default_show_seconds(),
        }
    }
}

impl Default for PostingConfig {
    fn default() -> Self {
        Self {
            business_start_hour: default_business_start_hour(),
            business_end_hour: default_business_end_hour(),
            search_result_cap: default_search_result_cap(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            posting: PostingConfig::default(),
        }
    }
}

impl ClockConfig {
    pub fn display_options(&self) -> crate::types::DisplayOptions {
        crate::types::DisplayOptions {
            twenty_four_hour: self.twenty_four_hour,
            show_seconds: self.show_seconds,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ZONECAST")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.clock.tick_interval_ms, 1000);
        assert!(!config.clock.twenty_four_hour);
        assert!(config.clock.show_seconds);
        assert_eq!(config.posting.business_start_hour, 9);
        assert_eq!(config.posting.business_end_hour, 17);
        assert_eq!(config.posting.search_result_cap, 6);
    }

    #[test]
    fn test_display_options_mapping() {
        let mut clock = ClockConfig::default();
        clock.twenty_four_hour = true;
        clock.show_seconds = false;
        let options = clock.display_options();
        assert!(options.twenty_four_hour);
        assert!(!options.show_seconds);
    }
}
