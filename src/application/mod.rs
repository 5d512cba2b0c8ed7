//! Application layer containing the payroll computation.
//!
//! `TaxEngine` turns employee incomes into insurance, tax and net pay lines.
//! It is stateless apart from the shared config, which lets `compute_all` be
//! split across blocking worker tasks without changing the output.

pub mod engine;
