//! Services for flowsentry-gui
//!
//! Preference persistence and wiring of the data sources.

mod config;
pub mod data_source;

pub use config::GuiConfig;
pub use data_source::DataSources;
