use crate::api::compliance::ComplianceReportRequest;
use crate::api::transaction::CreateTransaction;
use crate::compliance::{ComplianceReportLine, EmployeeRecord};
use crate::model::advisory::{
    EligibilityResponse, LoanEligibilityRequest, SchemeFinderRequest, SchemeFinderResponse,
};
use crate::model::reference::{CreditKitItem, SchemeSummary};
use crate::model::transaction::{Transaction, TransactionType};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, openapi};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MSME Finance Assistant API",
        version = "1.0.0",
        description = r#"
## MSME Finance Assistant

Backend for a finance assistant aimed at micro and small businesses.

### Key Features
- **Transactions**
  - Record, list and delete income and expense entries
- **Payroll Compliance**
  - EPF, ESI and professional tax breakdown for a batch of employees
- **Credit Readiness**
  - Document checklist and featured government schemes
- **AI Advisory**
  - Loan eligibility scorecard and government scheme finder

### Security
Every endpoint under `/api` requires a **JWT Bearer** token.

---
Built with **Rust**, **Actix Web**, **SQLx** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::transaction::list_transactions,
        crate::api::transaction::add_transaction,
        crate::api::transaction::delete_transaction,

        crate::api::compliance::compliance_report,

        crate::api::reference::credit_kit,
        crate::api::reference::schemes,

        crate::api::ai::check_eligibility,
        crate::api::ai::find_schemes
    ),
    components(
        schemas(
            Transaction,
            TransactionType,
            CreateTransaction,
            ComplianceReportRequest,
            EmployeeRecord,
            ComplianceReportLine,
            CreditKitItem,
            SchemeSummary,
            LoanEligibilityRequest,
            SchemeFinderRequest,
            EligibilityResponse,
            SchemeFinderResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Transactions", description = "Income and expense records"),
        (name = "Compliance", description = "Statutory payroll deductions"),
        (name = "Reference", description = "Credit kit and scheme reference data"),
        (name = "AI", description = "AI loan and scheme advisory"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/data/transactions",
            "/api/data/transactions/{id}",
            "/api/data/compliance-report",
            "/api/data/credit-kit",
            "/api/data/schemes",
            "/api/ai/check-eligibility",
            "/api/ai/find-schemes",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
