use crate::domain::employee::PayrollResult;
use crate::domain::ports::ResultSink;
use crate::error::Result;
use std::io::Write;

/// Writes payroll lines as a pretty-printed JSON array.
pub struct JsonResultWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<W: Write> ResultSink for JsonResultWriter<W> {
    fn write_results(&mut self, results: &[PayrollResult]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.sink, results)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writes_json_array() {
        let rows = vec![PayrollResult {
            employee_id: "A-1".to_string(),
            income: 2000,
            insurance: Money::new(dec!(315)),
            tax: Money::ZERO,
            net_pay: Money::new(dec!(1685)),
        }];

        let mut out = Vec::new();
        JsonResultWriter::new(&mut out).write_results(&rows).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{
                "id": "A-1",
                "income": 2000,
                "insurance": "315.00",
                "tax": "0.00",
                "net_pay": "1685.00"
            }])
        );
    }

    #[test]
    fn test_empty_results_write_empty_array() {
        let mut out = Vec::new();
        JsonResultWriter::new(&mut out).write_results(&[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }
}
