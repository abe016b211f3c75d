use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{error, info, instrument};

use crate::llm_client::GroqClient;
use crate::llm_client::prompts::{
    ELIGIBILITY_PARAMS, ELIGIBILITY_SYSTEM_PROMPT, SCHEME_FINDER_PARAMS,
    SCHEME_FINDER_SYSTEM_PROMPT, loan_eligibility_prompt, scheme_finder_prompt,
};
use crate::model::advisory::{
    EligibilityResponse, Language, LoanEligibilityRequest, SchemeFinderRequest,
    SchemeFinderResponse,
};
use crate::utils::scheme_cache::SchemeCache;

/// AI loan eligibility scorecard
#[utoipa::path(
    post,
    path = "/api/ai/check-eligibility",
    request_body = LoanEligibilityRequest,
    responses(
        (status = 200, body = EligibilityResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "AI key missing or AI service failure", body = Object, example = json!({
            "message": "AI service temporarily unavailable. Please try again later."
        }))
    ),
    security(("bearer_auth" = [])),
    tag = "AI"
)]
#[instrument(
    name = "ai_check_eligibility",
    skip(llm, payload),
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn check_eligibility(
    llm: web::Data<GroqClient>,
    payload: web::Json<LoanEligibilityRequest>,
) -> impl Responder {
    if !llm.is_configured() {
        error!("GROQ_API_KEY is not set");
        return HttpResponse::InternalServerError().json(json!({
            "message": "Groq API key not configured on the server."
        }));
    }

    let prompt = loan_eligibility_prompt(&payload);

    match llm
        .complete(ELIGIBILITY_SYSTEM_PROMPT, &prompt, ELIGIBILITY_PARAMS)
        .await
    {
        Ok(analysis) => {
            info!("Eligibility scorecard generated");
            HttpResponse::Ok().json(EligibilityResponse { analysis })
        }
        Err(e) => {
            error!(error = %e, "Eligibility request to Groq failed");
            HttpResponse::InternalServerError().json(json!({
                "message": "AI service temporarily unavailable. Please try again later."
            }))
        }
    }
}

/// AI government scheme finder
#[utoipa::path(
    post,
    path = "/api/ai/find-schemes",
    request_body = SchemeFinderRequest,
    responses(
        (status = 200, body = SchemeFinderResponse),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "AI key missing or AI service failure", body = Object, example = json!({
            "message": "Failed to fetch schemes. Please try again."
        }))
    ),
    security(("bearer_auth" = [])),
    tag = "AI"
)]
#[instrument(
    name = "ai_find_schemes",
    skip(llm, cache, payload),
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn find_schemes(
    llm: web::Data<GroqClient>,
    cache: web::Data<SchemeCache>,
    payload: web::Json<SchemeFinderRequest>,
) -> impl Responder {
    if !llm.is_configured() {
        error!("GROQ_API_KEY is not set");
        return HttpResponse::InternalServerError().json(json!({
            "message": "Groq API key not configured."
        }));
    }

    let description = payload.business_description.as_deref().unwrap_or_default();
    let language = Language::from_code(payload.language.as_deref());

    if let Some(schemes) = cache.get(description, language).await {
        info!("Scheme finder answer served from cache");
        return HttpResponse::Ok().json(SchemeFinderResponse {
            schemes,
            sources: Vec::new(),
        });
    }

    let prompt = scheme_finder_prompt(&payload);

    match llm
        .complete(SCHEME_FINDER_SYSTEM_PROMPT, &prompt, SCHEME_FINDER_PARAMS)
        .await
    {
        Ok(schemes) => {
            cache.insert(description, language, schemes.clone()).await;
            HttpResponse::Ok().json(SchemeFinderResponse {
                schemes,
                sources: Vec::new(),
            })
        }
        Err(e) => {
            error!(error = %e, "Scheme finder request to Groq failed");
            HttpResponse::InternalServerError().json(json!({
                "message": "Failed to fetch schemes. Please try again."
            }))
        }
    }
}
