use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::compliance::{self, EmployeeRecord};

/// Request body for the compliance report. Documents the shape only; the handler reads the body loosely.
#[allow(dead_code)]
#[derive(Deserialize, ToSchema)]
#[schema(example = json!({
    "employees": [
        { "name": "Ravi", "salary": 5000 },
        { "name": "Meena", "salary": 25000 }
    ]
}))]
pub struct ComplianceReportRequest {
    pub employees: Vec<EmployeeRecord>,
}

/// Compliance report (EPF, ESI, professional tax)
#[utoipa::path(
    post,
    path = "/api/data/compliance-report",
    request_body = ComplianceReportRequest,
    responses(
        (status = 200, description = "One deduction breakdown per employee, in input order", body = [crate::compliance::ComplianceReportLine]),
        (status = 400, description = "Missing employees array or invalid employee record", body = Object, example = json!({
            "message": "Invalid data for employee: Ravi. Salary must be a number."
        })),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Compliance"
)]
pub async fn compliance_report(payload: web::Json<Value>) -> impl Responder {
    // Records are checked one by one below, so the body is read loosely
    let employees = match payload.get("employees").and_then(Value::as_array) {
        Some(employees) => employees,
        None => {
            return HttpResponse::BadRequest().json(json!({
                "message": "Invalid input: employees array is required."
            }));
        }
    };

    let records: Vec<EmployeeRecord> = employees.iter().map(EmployeeRecord::from).collect();

    match compliance::generate(&records) {
        Ok(report) => {
            tracing::debug!(employees = report.len(), "Compliance report generated");
            HttpResponse::Ok().json(report)
        }
        Err(e) => {
            tracing::info!(error = %e, "Compliance report rejected");
            HttpResponse::BadRequest().json(json!({ "message": e.to_string() }))
        }
    }
}
