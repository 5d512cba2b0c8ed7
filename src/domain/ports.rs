use super::employee::PayrollResult;
use crate::error::Result;

/// Destination for computed payroll lines.
///
/// Implementations write the rows in the order given and flush before
/// returning.
pub trait ResultSink {
    fn write_results(&mut self, results: &[PayrollResult]) -> Result<()>;
}

pub type ResultSinkBox<'a> = Box<dyn ResultSink + 'a>;
