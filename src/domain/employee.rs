use super::money::Money;
use serde::{Deserialize, Serialize};

/// One line of user data: an employee and their gross monthly income.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub income: i64,
}

impl EmployeeRecord {
    pub fn new(employee_id: impl Into<String>, income: i64) -> Self {
        Self {
            employee_id: employee_id.into(),
            income,
        }
    }
}

/// The computed payroll line for one employee.
///
/// Field order is the export column order.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PayrollResult {
    #[serde(rename = "id")]
    pub employee_id: String,
    pub income: i64,
    pub insurance: Money,
    pub tax: Money,
    pub net_pay: Money,
}
