//! Loading the investor CSVs and summarising them for the dashboard.

mod error;
mod loader;
mod records;
mod stats;

pub use loader::load_dataset;
pub use stats::{NetworkStats, percent};
