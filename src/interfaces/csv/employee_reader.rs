use crate::domain::employee::EmployeeRecord;
use crate::error::{PayrollError, Result};
use std::io::Read;

/// Reads `employee_id,income` rows from a header-less CSV source.
///
/// Whitespace around fields is trimmed. Any row that does not yield an
/// integer income is reported as a parameter error carrying its position.
pub struct EmployeeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EmployeeReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes records in file order.
    pub fn records(self) -> impl Iterator<Item = Result<EmployeeRecord>> {
        self.reader.into_deserialize().map(|result| {
            result.map_err(|e| match e.kind() {
                csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. } => {
                    PayrollError::Parameter(format!("user data {e}"))
                }
                _ => PayrollError::from(e),
            })
        })
    }

    /// Reads every record, failing on the first bad row.
    pub fn read_all(self) -> Result<Vec<EmployeeRecord>> {
        self.records().collect()
    }
}
