pub mod climate;
pub mod country;
pub mod error;
pub mod hydro;
pub mod metrics;
pub mod snapshot;
pub mod stats;
