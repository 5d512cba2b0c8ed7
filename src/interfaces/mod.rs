//! File-format adapters around the engine: config and user-data readers,
//! result writers.

pub mod config_reader;
pub mod csv;
pub mod json;
