pub mod config;
pub mod error;
pub mod items;
pub mod output;
pub mod telemetry;
pub mod trigger;
