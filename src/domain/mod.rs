//! Domain types: money, insurance parameters, the tax table and the
//! per-employee input and output rows.

pub mod bracket;
pub mod config;
pub mod employee;
pub mod money;
pub mod ports;
