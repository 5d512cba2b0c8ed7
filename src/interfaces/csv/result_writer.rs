use crate::domain::employee::PayrollResult;
use crate::domain::ports::ResultSink;
use crate::error::Result;
use std::io::Write;

/// Writes payroll lines as CSV: `id,income,insurance,tax,net_pay`.
///
/// No header row is written unless requested with [`CsvResultWriter::with_header`].
pub struct CsvResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self::with_header(sink, false)
    }

    pub fn with_header(sink: W, header: bool) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(header)
            .from_writer(sink);
        Self { writer }
    }
}

impl<W: Write> ResultSink for CsvResultWriter<W> {
    fn write_results(&mut self, results: &[PayrollResult]) -> Result<()> {
        for row in results {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
