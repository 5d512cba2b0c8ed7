use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PayrollError {
    #[error("Parameter Error: {0}")]
    #[diagnostic(code(payroll::parameter))]
    Parameter(String),
    #[error("Config Error: missing key `{key}`")]
    #[diagnostic(
        code(payroll::config),
        help("the config file must define JiShuL, JiShuH, YangLao, YiLiao, ShiYe, GongShang, ShengYu and GongJiJin")
    )]
    Config { key: String },
    #[error("Validation error: {0}")]
    #[diagnostic(code(payroll::validation))]
    Validation(String),
    #[error("CSV error: {0}")]
    #[diagnostic(code(payroll::csv))]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    #[diagnostic(code(payroll::json))]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    #[diagnostic(code(payroll::io))]
    Io(#[from] std::io::Error),
    #[error("Worker error: {0}")]
    #[diagnostic(code(payroll::task))]
    Task(String),
}

pub type Result<T> = std::result::Result<T, PayrollError>;
