/// Display constants for the dashboard
pub struct Config;

impl Config {
    /// Selectable page sizes for the country table
    pub const PAGE_SIZE_OPTIONS: [u32; 3] = [10, 20, 50];

    /// Default page size for the country table
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    /// Page size used to populate the country picker of the timeseries view
    pub const COUNTRY_PICKER_PAGE_SIZE: u32 = 100;

    /// Bounds applied to the climate timeline limit input
    pub const TIMELINE_LIMIT_MIN: u32 = 50;
    pub const TIMELINE_LIMIT_MAX: u32 = 2000;

    /// Maximum length accepted by ISO3 inputs
    pub const ISO3_MAX_LEN: usize = 3;

    /// Debounce delay for resize-driven chart re-renders, in milliseconds
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
