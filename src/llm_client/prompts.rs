use serde_json::Value;

use super::CompletionParams;
use crate::model::advisory::{Language, LoanEligibilityRequest, SchemeFinderRequest};

pub const ELIGIBILITY_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.3,
    max_tokens: 800,
};

pub const SCHEME_FINDER_PARAMS: CompletionParams = CompletionParams {
    temperature: 0.5,
    max_tokens: 1000,
};

pub const ELIGIBILITY_SYSTEM_PROMPT: &str = "You are a friendly, plain-spoken loan advisor for \
Indian MSME owners. Give a short, easy-to-read scorecard of the loan application and avoid \
heavy financial jargon.";

pub const SCHEME_FINDER_SYSTEM_PROMPT: &str = "You are an Indian MSME policy expert who helps \
business owners find government support schemes.";

/// Renders a client-supplied scalar the way it should read in a prompt.
fn field_text(value: Option<&Value>, missing: &str) -> String {
    match value {
        None | Some(Value::Null) => missing.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => missing.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn has_existing_loans(request: &LoanEligibilityRequest) -> bool {
    matches!(&request.existing_loans, Some(Value::String(s)) if s == "Yes")
}

pub fn loan_eligibility_prompt(request: &LoanEligibilityRequest) -> String {
    let language = Language::from_code(request.language.as_deref());
    let unspecified = "Not specified";

    let existing_loan_line = if has_existing_loans(request) {
        format!(
            "- Details of Existing Loans: \"{}\"\n",
            field_text(request.existing_loan_details.as_ref(), unspecified)
        )
    } else {
        String::new()
    };

    format!(
        "Write the whole response in {language}.\n\
         \n\
         Applicant Details:\n\
         - Annual Turnover: ₹{turnover}\n\
         - Annual Net Profit: ₹{profit}\n\
         - Years in Business: {years}\n\
         - Business Type: {business_type}\n\
         - Collateral Available: {collateral}\n\
         - Has Existing Loans: {existing_loans}\n\
         {existing_loan_line}\
         - Purpose of Loan: \"{purpose}\"\n\
         - Desired Loan Amount: ₹{amount}\n\
         - Credit Score: {credit_score}\n\
         \n\
         Reply in Markdown using exactly this layout:\n\
         \n\
         ### Your Loan Eligibility Scorecard\n\
         **Overall Verdict:** (one simple sentence on the chance of approval)\n\
         ---\n\
         **Key Factors:**\n\
         * **Profitability:** (Strong/Good/Fair/Weak + one simple reason)\n\
         * **Business Stability:** (Strong/Good/Fair/Weak + one simple reason)\n\
         * **Repayment Capacity:** (Strong/Good/Fair/Weak + one simple reason)\n\
         * **Security:** (Strong/Good/Fair/Weak + one simple reason)\n\
         ---\n\
         **Top 3 Recommendations:**\n\
         1. (actionable advice)\n\
         2. (actionable advice)\n\
         3. (actionable advice)\n",
        turnover = field_text(request.turnover.as_ref(), unspecified),
        profit = field_text(request.profit.as_ref(), unspecified),
        years = field_text(request.years.as_ref(), unspecified),
        business_type = field_text(request.business_type.as_ref(), unspecified),
        collateral = field_text(request.collateral.as_ref(), unspecified),
        existing_loans = field_text(request.existing_loans.as_ref(), unspecified),
        purpose = field_text(request.loan_purpose.as_ref(), unspecified),
        amount = field_text(request.amount.as_ref(), unspecified),
        credit_score = field_text(request.credit_score.as_ref(), "Not Provided"),
    )
}

pub fn scheme_finder_prompt(request: &SchemeFinderRequest) -> String {
    let language = Language::from_code(request.language.as_deref());
    let description = request.business_description.as_deref().unwrap_or_default();

    format!(
        "Business Description: \"{description}\"\n\
         \n\
         Task:\n\
         List the 4 to 6 Indian government MSME schemes most relevant to this business.\n\
         \n\
         Requirements:\n\
         - Respond only in {language}.\n\
         - Use Markdown.\n\
         - For each scheme give its title, a one-sentence summary of the benefit, \
         and the official website link.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loan_request(body: Value) -> LoanEligibilityRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_eligibility_prompt_carries_applicant_details() {
        let prompt = loan_eligibility_prompt(&loan_request(json!({
            "turnover": 2500000,
            "profit": "300000",
            "years": 4,
            "amount": 500000,
            "businessType": "Manufacturing",
            "collateral": "Yes",
            "existingLoans": "No",
            "creditScore": 720,
            "loanPurpose": "Buy a CNC machine"
        })));

        assert!(prompt.contains("Annual Turnover: ₹2500000"));
        assert!(prompt.contains("Annual Net Profit: ₹300000"));
        assert!(prompt.contains("Business Type: Manufacturing"));
        assert!(prompt.contains("Purpose of Loan: \"Buy a CNC machine\""));
        assert!(prompt.contains("Credit Score: 720"));
        assert!(prompt.contains("in English"));
        assert!(!prompt.contains("Details of Existing Loans"));
    }

    #[test]
    fn test_existing_loan_details_only_when_answered_yes() {
        let prompt = loan_eligibility_prompt(&loan_request(json!({
            "existingLoans": "Yes",
            "existingLoanDetails": "Vehicle loan, 2 lakh outstanding"
        })));
        assert!(prompt.contains("Details of Existing Loans: \"Vehicle loan, 2 lakh outstanding\""));

        let prompt = loan_eligibility_prompt(&loan_request(json!({
            "existingLoans": true,
            "existingLoanDetails": "Vehicle loan"
        })));
        assert!(!prompt.contains("Details of Existing Loans"));
    }

    #[test]
    fn test_missing_credit_score_reads_not_provided() {
        let prompt = loan_eligibility_prompt(&LoanEligibilityRequest::default());
        assert!(prompt.contains("Credit Score: Not Provided"));
        assert!(prompt.contains("Annual Turnover: ₹Not specified"));

        let prompt = loan_eligibility_prompt(&loan_request(json!({"creditScore": ""})));
        assert!(prompt.contains("Credit Score: Not Provided"));
    }

    #[test]
    fn test_hindi_is_selected_by_code() {
        let prompt = loan_eligibility_prompt(&loan_request(json!({"language": "hi"})));
        assert!(prompt.contains("in Hindi"));

        let prompt = scheme_finder_prompt(&SchemeFinderRequest {
            business_description: Some("Dairy farm".to_string()),
            language: Some("hi".to_string()),
        });
        assert!(prompt.contains("only in Hindi"));
        assert!(prompt.contains("\"Dairy farm\""));
    }

    #[test]
    fn test_scheme_prompt_defaults_to_english() {
        let prompt = scheme_finder_prompt(&SchemeFinderRequest::default());
        assert!(prompt.contains("only in English"));
    }

    #[test]
    fn test_call_parameters() {
        assert_eq!(ELIGIBILITY_PARAMS.max_tokens, 800);
        assert_eq!(SCHEME_FINDER_PARAMS.temperature, 0.5);
    }
}
