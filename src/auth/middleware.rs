use crate::auth::auth::AuthUser;
use crate::auth::jwt::verify_token;
use crate::config::Config;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    http::Method,
    web::Data,
};
use serde_json::json;

pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    // CORS preflight carries no credentials
    if req.method() == Method::OPTIONS {
        return next.call(req).await;
    }

    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("App config missing"))?;

    let token = match req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .filter(|h| h.starts_with("Bearer"))
    {
        // A scheme with no token still counts as a presented credential
        Some(h) => h.split(' ').nth(1).unwrap_or_default(),
        None => {
            let resp =
                HttpResponse::Unauthorized().json(json!({"message": "Not authorized, no token"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    let claims = match verify_token(token, &config.jwt_secret) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            let resp = HttpResponse::Unauthorized()
                .json(json!({"message": "Not authorized, token failed"}));
            return Ok(req.into_response(resp.map_into_boxed_body()));
        }
    };

    req.extensions_mut().insert(AuthUser {
        user_id: claims.id,
    });

    next.call(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::test_support::token_for;
    use actix_web::middleware::from_fn;
    use actix_web::{App, Responder, test, web};

    async fn whoami(user: AuthUser) -> impl Responder {
        HttpResponse::Ok().json(json!({ "user_id": user.user_id }))
    }

    async fn preflight() -> impl Responder {
        HttpResponse::NoContent().finish()
    }

    macro_rules! protected_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(Data::new(Config::for_tests("test-secret")))
                    .service(
                        web::scope("/api")
                            .wrap(from_fn(auth_middleware))
                            .service(
                                web::resource("/me")
                                    .route(web::get().to(whoami))
                                    .route(web::method(Method::OPTIONS).to(preflight)),
                            ),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = protected_app!();
        let req = test::TestRequest::get().uri("/api/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not authorized, no token");
    }

    #[actix_web::test]
    async fn test_bad_token_is_unauthorized() {
        let app = protected_app!();
        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_bare_bearer_scheme_is_token_failure() {
        let app = protected_app!();
        for header in ["Bearer", "Bearer ", "Bearerabc"] {
            let req = test::TestRequest::get()
                .uri("/api/me")
                .insert_header(("Authorization", header))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401, "{header:?}");
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Not authorized, token failed");
        }
    }

    #[actix_web::test]
    async fn test_other_scheme_is_no_token() {
        let app = protected_app!();
        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Not authorized, no token");
    }

    #[actix_web::test]
    async fn test_token_signed_with_other_secret_is_unauthorized() {
        let app = protected_app!();
        let token = token_for(7, "someone-else", 900);
        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let app = protected_app!();
        let token = token_for(7, "test-secret", 900);
        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["user_id"], 7);
    }

    #[actix_web::test]
    async fn test_preflight_skips_auth() {
        let app = protected_app!();
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/me")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }
}
