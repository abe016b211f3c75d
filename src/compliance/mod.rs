//! Statutory payroll deductions (EPF, ESI, professional tax) for a batch of employees.
//!
//! The calculation is pure: the same batch always yields the same report, and a
//! single invalid record rejects the whole batch.

pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

use rules::{
    EPF_RATE, ESI_EMPLOYEE_RATE, ESI_EMPLOYER_RATE, ESI_WAGE_CEILING, monthly_professional_tax,
};

const UNNAMED: &str = "Unnamed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplianceError {
    #[error("Invalid data for employee: {name}. Salary must be a number.")]
    Validation { name: String },
}

/// An employee record exactly as submitted. Either field may be missing or of the wrong type.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EmployeeRecord {
    #[serde(default)]
    #[schema(value_type = String, example = "Ravi")]
    pub name: Option<Value>,

    #[serde(default)]
    #[schema(value_type = f64, example = 18000.0)]
    pub salary: Option<Value>,
}

impl From<&Value> for EmployeeRecord {
    fn from(value: &Value) -> Self {
        Self {
            name: value.get("name").cloned(),
            salary: value.get("salary").cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSalaryInput {
    pub name: String,
    pub salary: f64,
}

impl EmployeeSalaryInput {
    pub fn new(name: impl Into<String>, salary: f64) -> Result<Self, ComplianceError> {
        let name = name.into();
        if !salary.is_finite() {
            return Err(ComplianceError::Validation {
                name: if name.is_empty() { UNNAMED.to_string() } else { name },
            });
        }
        Ok(Self { name, salary })
    }
}

impl TryFrom<&EmployeeRecord> for EmployeeSalaryInput {
    type Error = ComplianceError;

    fn try_from(record: &EmployeeRecord) -> Result<Self, Self::Error> {
        let name = match &record.name {
            Some(Value::String(name)) => Some(name),
            _ => None,
        };
        let salary = match &record.salary {
            Some(Value::Number(n)) => n.as_f64(),
            _ => None,
        };

        match (name, salary) {
            (Some(name), Some(salary)) => Self::new(name.clone(), salary),
            _ => Err(ComplianceError::Validation {
                name: display_name(record.name.as_ref()),
            }),
        }
    }
}

/// Name used in validation messages. Empty, zero, false and null names read as "Unnamed".
fn display_name(name: Option<&Value>) -> String {
    match name {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(v) if v.as_f64().is_some_and(|f| f != 0.0) => text_of(v),
        Some(v) if v.is_array() || v.is_object() => text_of(v),
        _ => UNNAMED.to_string(),
    }
}

/// Plain-text form of a JSON value as a browser client would print it:
/// arrays comma-joined, objects opaque, integral floats without a fraction.
fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Per-employee breakdown. Employer contributions are informational and do not reduce take-home.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({
    "name": "Ravi",
    "salary": 5000.0,
    "epf_employee": 600.0,
    "esi_employee": 37.5,
    "prof_tax": 30.0,
    "take_home": 4332.5,
    "epf_employer": 600.0,
    "esi_employer": 162.5
}))]
pub struct ComplianceReportLine {
    pub name: String,
    pub salary: f64,
    pub epf_employee: f64,
    pub esi_employee: f64,
    pub prof_tax: f64,
    pub take_home: f64,
    pub epf_employer: f64,
    pub esi_employer: f64,
}

pub fn compute_line(input: &EmployeeSalaryInput) -> ComplianceReportLine {
    let gross_salary = input.salary;

    let epf_employee = gross_salary * EPF_RATE;
    let epf_employer = gross_salary * EPF_RATE;

    let (esi_employee, esi_employer) = if gross_salary <= ESI_WAGE_CEILING {
        (
            gross_salary * ESI_EMPLOYEE_RATE,
            gross_salary * ESI_EMPLOYER_RATE,
        )
    } else {
        (0.0, 0.0)
    };

    let prof_tax = monthly_professional_tax(gross_salary);

    let total_deductions = epf_employee + esi_employee + prof_tax;
    let take_home = gross_salary - total_deductions;

    ComplianceReportLine {
        name: input.name.clone(),
        salary: gross_salary,
        epf_employee,
        esi_employee,
        prof_tax,
        take_home,
        epf_employer,
        esi_employer,
    }
}

/// Builds the report in input order, stopping at the first invalid record.
pub fn generate(records: &[EmployeeRecord]) -> Result<Vec<ComplianceReportLine>, ComplianceError> {
    records
        .iter()
        .map(|record| EmployeeSalaryInput::try_from(record).map(|input| compute_line(&input)))
        .collect()
}
