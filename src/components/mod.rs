pub mod climate_timeline;
pub mod country_table;
pub mod hydro_summary;
pub mod loader;
pub mod resource_timeseries;
pub mod snapshot_trigger;
pub mod stats_panel;

pub use climate_timeline::ClimateTimeline;
pub use country_table::CountryTable;
pub use hydro_summary::HydroSummaryCard;
pub use loader::Loader;
pub use resource_timeseries::ResourceTimeseries;
pub use snapshot_trigger::SnapshotTrigger;
pub use stats_panel::StatsPanel;
