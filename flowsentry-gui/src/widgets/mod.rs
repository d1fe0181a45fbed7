//! Custom canvas widgets

pub mod anomaly_trend;

pub use anomaly_trend::AnomalyTrend;
