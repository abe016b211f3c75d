use actix_web::{HttpResponse, Responder};
use once_cell::sync::Lazy;

use crate::model::reference::{CreditKitItem, SchemeSummary};

static CREDIT_KIT: Lazy<Vec<CreditKitItem>> = Lazy::new(|| {
    vec![
        CreditKitItem {
            id: 1,
            name: "Business KYC Documents",
            status: "Pending Upload",
        },
        CreditKitItem {
            id: 2,
            name: "Cash Flow Statement",
            status: "Generated",
        },
        CreditKitItem {
            id: 3,
            name: "GST Reports (Last 3 Months)",
            status: "Pending Upload",
        },
        CreditKitItem {
            id: 4,
            name: "Payroll Summary",
            status: "Generated",
        },
    ]
});

static SCHEMES: Lazy<Vec<SchemeSummary>> = Lazy::new(|| {
    vec![
        SchemeSummary {
            id: 1,
            title: "Mudra Loan Scheme",
            benefit: "Collateral-free loans up to ₹10 lakh.",
            eligibility: "All MSMEs",
        },
        SchemeSummary {
            id: 2,
            title: "Stand-Up India",
            benefit: "Loans from ₹10 lakh to ₹1 crore for women/SC/ST entrepreneurs.",
            eligibility: "Women, SC/ST",
        },
        SchemeSummary {
            id: 3,
            title: "Credit Guarantee Scheme (CGS)",
            benefit: "Credit guarantee for loans up to ₹2 crore.",
            eligibility: "New & Existing MSMEs",
        },
    ]
});

/// Credit-readiness document checklist
#[utoipa::path(
    get,
    path = "/api/data/credit-kit",
    responses(
        (status = 200, body = [CreditKitItem]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference"
)]
pub async fn credit_kit() -> impl Responder {
    HttpResponse::Ok().json(&*CREDIT_KIT)
}

/// Featured government schemes
#[utoipa::path(
    get,
    path = "/api/data/schemes",
    responses(
        (status = 200, body = [SchemeSummary]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Reference"
)]
pub async fn schemes() -> impl Responder {
    HttpResponse::Ok().json(&*SCHEMES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_credit_kit_lists_four_items() {
        let app =
            test::init_service(App::new().route("/credit-kit", web::get().to(credit_kit))).await;
        let req = test::TestRequest::get().uri("/credit-kit").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["name"], "Business KYC Documents");
        assert_eq!(items[3]["status"], "Generated");
    }

    #[actix_web::test]
    async fn test_schemes_lists_three_schemes() {
        let app = test::init_service(App::new().route("/schemes", web::get().to(schemes))).await;
        let req = test::TestRequest::get().uri("/schemes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let titles: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Mudra Loan Scheme",
                "Stand-Up India",
                "Credit Guarantee Scheme (CGS)"
            ]
        );
    }
}
