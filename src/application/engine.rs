use crate::domain::bracket::{TAX_EXEMPTION_THRESHOLD, find_bracket};
use crate::domain::config::InsuranceConfig;
use crate::domain::employee::{EmployeeRecord, PayrollResult};
use crate::domain::money::Money;
use crate::error::{PayrollError, Result};
use std::sync::Arc;
use tracing::{debug, trace};

/// Income tax due and the resulting take-home pay for one income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxAndNet {
    pub tax: Money,
    pub net_pay: Money,
}

/// Computes social insurance, income tax and net pay.
///
/// The engine holds nothing but the immutable config, so it is cheap to clone
/// and every computation is a pure function of the income passed in.
#[derive(Debug, Clone)]
pub struct TaxEngine {
    config: Arc<InsuranceConfig>,
}

impl TaxEngine {
    pub fn new(config: InsuranceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &InsuranceConfig {
        &self.config
    }

    /// Insurance contribution: income clamped to `[floor, ceiling]` times the
    /// total rate. Both ends of the clamp are inclusive.
    pub fn compute_insurance(&self, income: i64) -> Result<Money> {
        self.insurance_for(non_negative(None, income)?)
    }

    /// Income tax on what remains after insurance and the standard deduction.
    pub fn compute_tax_and_net(&self, income: i64) -> Result<TaxAndNet> {
        let income = non_negative(None, income)?;
        let insurance = self.insurance_for(income)?;
        self.tax_and_net_for(income, insurance)
    }

    /// Computes one result line.
    pub fn compute_record(&self, record: &EmployeeRecord) -> Result<PayrollResult> {
        let income = non_negative(Some(record.employee_id.as_str()), record.income)?;
        let insurance = self.insurance_for(income)?;
        let TaxAndNet { tax, net_pay } = self.tax_and_net_for(income, insurance)?;
        debug!(
            employee = %record.employee_id,
            income,
            %insurance,
            %tax,
            %net_pay,
            "payroll computed"
        );

        Ok(PayrollResult {
            employee_id: record.employee_id.clone(),
            income,
            insurance,
            tax,
            net_pay,
        })
    }

    fn insurance_for(&self, income: i64) -> Result<Money> {
        let base = Money::from(income)
            .value()
            .clamp(self.config.floor(), self.config.ceiling());
        Money::new(base)
            .checked_mul(self.config.total_rate())
            .ok_or_else(|| overflow("insurance", income))
    }

    fn tax_and_net_for(&self, income: i64, insurance: Money) -> Result<TaxAndNet> {
        let after_insurance = Money::from(income)
            .checked_sub(insurance)
            .ok_or_else(|| overflow("income after insurance", income))?;
        let taxable = after_insurance
            .value()
            .checked_sub(TAX_EXEMPTION_THRESHOLD)
            .ok_or_else(|| overflow("taxable income", income))?;

        let tax = match find_bracket(taxable) {
            Some(bracket) => {
                trace!(%taxable, rate = %bracket.rate, "bracket selected");
                bracket
                    .tax_on(taxable)
                    .map(Money::new)
                    .ok_or_else(|| overflow("tax", income))?
            }
            None => Money::ZERO,
        };
        let net_pay = after_insurance
            .checked_sub(tax)
            .ok_or_else(|| overflow("net pay", income))?;

        Ok(TaxAndNet { tax, net_pay })
    }

    /// Computes every record in input order, stopping at the first failure.
    pub fn compute_all(&self, records: &[EmployeeRecord]) -> Result<Vec<PayrollResult>> {
        records.iter().map(|r| self.compute_record(r)).collect()
    }

    /// Same output as [`TaxEngine::compute_all`], with the records split into
    /// `workers` contiguous chunks computed on the blocking thread pool.
    ///
    /// Chunks are awaited in submission order, so the output order matches
    /// the input regardless of which worker finishes first.
    pub async fn compute_all_concurrent(
        &self,
        records: Vec<EmployeeRecord>,
        workers: usize,
    ) -> Result<Vec<PayrollResult>> {
        if workers <= 1 || records.len() <= 1 {
            return self.compute_all(&records);
        }

        let chunk_size = records.len().div_ceil(workers);
        let total = records.len();
        let mut pending = Vec::with_capacity(workers);
        let mut records = records.into_iter();
        loop {
            let chunk: Vec<EmployeeRecord> = records.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                break;
            }
            let engine = self.clone();
            pending.push(tokio::task::spawn_blocking(move || {
                engine.compute_all(&chunk)
            }));
        }
        debug!(workers = pending.len(), chunk_size, "dispatched payroll chunks");

        let mut results = Vec::with_capacity(total);
        for handle in pending {
            let chunk = handle
                .await
                .map_err(|e| PayrollError::Task(e.to_string()))??;
            results.extend(chunk);
        }
        Ok(results)
    }
}

fn non_negative(employee: Option<&str>, income: i64) -> Result<i64> {
    if income < 0 {
        let message = format!("income must not be negative, got {income}");
        Err(PayrollError::Validation(match employee {
            Some(id) => format!("employee {id}: {message}"),
            None => message,
        }))
    } else {
        Ok(income)
    }
}

fn overflow(what: &str, income: i64) -> PayrollError {
    PayrollError::Validation(format!(
        "{what} for income {income} exceeds the representable amount"
    ))
}
