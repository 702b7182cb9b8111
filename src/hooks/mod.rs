pub mod cancel;
pub mod fetch;
pub mod use_climate_timeline;
pub mod use_countries;
pub mod use_hydro_summary;
pub mod use_stats;
pub mod use_timeseries;

pub use cancel::CancelFlag;
pub use fetch::FetchState;
