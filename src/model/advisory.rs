use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::Display;
use utoipa::ToSchema;

/// Language the AI answer is written in. Only `"hi"` selects Hindi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("hi") => Language::Hindi,
            _ => Language::English,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanEligibilityRequest {
    // Scalars are echoed into the prompt as-is, whatever JSON type the client sent
    #[schema(value_type = f64, example = 2500000)]
    pub turnover: Option<Value>,
    #[schema(value_type = f64, example = 300000)]
    pub profit: Option<Value>,
    #[schema(value_type = f64, example = 4)]
    pub years: Option<Value>,
    #[schema(value_type = f64, example = 500000)]
    pub amount: Option<Value>,
    #[schema(value_type = String, example = "Manufacturing")]
    pub business_type: Option<Value>,
    #[schema(value_type = String, example = "Yes")]
    pub collateral: Option<Value>,
    #[schema(value_type = String, example = "No")]
    pub existing_loans: Option<Value>,
    #[schema(value_type = String, example = "Vehicle loan, ₹2 lakh outstanding")]
    pub existing_loan_details: Option<Value>,
    #[schema(value_type = f64, example = 720)]
    pub credit_score: Option<Value>,
    #[schema(value_type = String, example = "Buy a new CNC machine")]
    pub loan_purpose: Option<Value>,
    #[schema(example = "en")]
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemeFinderRequest {
    #[schema(example = "Women-led handloom saree unit in Madurai with 12 weavers")]
    pub business_description: Option<String>,
    #[schema(example = "hi")]
    pub language: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EligibilityResponse {
    /// Markdown scorecard
    pub analysis: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SchemeFinderResponse {
    /// Markdown list of schemes
    pub schemes: String,
    pub sources: Vec<String>,
}
