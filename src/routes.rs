use crate::{
    api::{ai, compliance, reference, transaction},
    auth::middleware::auth_middleware,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

// Helper to build per-scope limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("per_ms and burst_size are non-zero");
    Governor::new(&cfg)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));
    let ai_limiter = Arc::new(build_limiter(config.rate_ai_per_min));

    // Everything under the prefix needs a bearer token
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            .wrap(protected_limiter)
            .service(
                web::scope("/data")
                    // /data/transactions
                    .service(
                        web::resource("/transactions")
                            .app_data(
                                web::JsonConfig::default()
                                    .error_handler(transaction::json_error_handler),
                            )
                            .route(web::get().to(transaction::list_transactions))
                            .route(web::post().to(transaction::add_transaction)),
                    )
                    // /data/transactions/{id}
                    .service(
                        web::resource("/transactions/{id}")
                            .route(web::delete().to(transaction::delete_transaction)),
                    )
                    // /data/compliance-report
                    .service(
                        web::resource("/compliance-report")
                            .route(web::post().to(compliance::compliance_report)),
                    )
                    // mock reference data
                    .service(web::resource("/credit-kit").route(web::get().to(reference::credit_kit)))
                    .service(web::resource("/schemes").route(web::get().to(reference::schemes))),
            )
            .service(
                web::scope("/ai")
                    .wrap(ai_limiter)
                    .service(
                        web::resource("/check-eligibility")
                            .route(web::post().to(ai::check_eligibility)),
                    )
                    .service(
                        web::resource("/find-schemes").route(web::post().to(ai::find_schemes)),
                    ),
            ),
    );
}
