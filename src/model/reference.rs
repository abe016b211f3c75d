use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreditKitItem {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Business KYC Documents")]
    pub name: &'static str,
    #[schema(example = "Pending Upload")]
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SchemeSummary {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "Mudra Loan Scheme")]
    pub title: &'static str,
    #[schema(example = "Collateral-free loans up to ₹10 lakh.")]
    pub benefit: &'static str,
    #[schema(example = "All MSMEs")]
    pub eligibility: &'static str,
}
