use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::auth::auth::AuthUser;
use crate::model::transaction::{Transaction, TransactionRow, TransactionType};

const SELECT_COLUMNS: &str = r#"
    SELECT id, date, party_name, details, amount, type, user_id, created_at, updated_at
    FROM transactions
"#;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransaction {
    #[schema(example = "2026-01-15", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Sharma Traders")]
    pub party_name: String,
    #[schema(example = "Invoice #221")]
    pub details: Option<String>,
    #[schema(example = "15000.00", value_type = String)]
    pub amount: Decimal,
    #[serde(rename = "type")]
    #[schema(example = "income")]
    pub kind: TransactionType,
}

impl CreateTransaction {
    fn validate(&self) -> Result<(), String> {
        if self.party_name.trim().is_empty() {
            return Err("partyName must not be empty".to_string());
        }
        // DECIMAL(10, 2)
        if self.amount.round_dp(2).abs() >= Decimal::new(100_000_000, 0) {
            return Err("amount is out of range".to_string());
        }
        Ok(())
    }
}

fn add_error(detail: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "message": "Error adding transaction",
        "error": detail.into()
    }))
}

/// Error handler for malformed transaction bodies, so they read like any other add failure.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let detail = err.to_string();
    actix_web::error::InternalError::from_response(err, add_error(detail)).into()
}

async fn fetch_for_user(
    pool: &MySqlPool,
    user_id: u64,
    id: u64,
) -> Result<Option<Transaction>, sqlx::Error> {
    let row = sqlx::query_as::<_, TransactionRow>(&format!(
        "{SELECT_COLUMNS} WHERE id = ? AND user_id = ?"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    row.map(Transaction::try_from)
        .transpose()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

/// List the caller's transactions, newest first
#[utoipa::path(
    get,
    path = "/api/data/transactions",
    responses(
        (status = 200, body = [Transaction]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Server error fetching transactions"
        }))
    ),
    security(("bearer_auth" = [])),
    tag = "Transactions"
)]
pub async fn list_transactions(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
) -> actix_web::Result<impl Responder> {
    let rows = sqlx::query_as::<_, TransactionRow>(&format!(
        "{SELECT_COLUMNS} WHERE user_id = ? ORDER BY date DESC, id DESC"
    ))
    .bind(auth.user_id)
    .fetch_all(pool.get_ref())
    .await;

    let transactions = rows
        .map_err(|e| e.to_string())
        .and_then(|rows| {
            rows.into_iter()
                .map(Transaction::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.to_string())
        });

    match transactions {
        Ok(transactions) => {
            debug!(user_id = auth.user_id, count = transactions.len(), "Listed transactions");
            Ok(HttpResponse::Ok().json(transactions))
        }
        Err(e) => {
            error!(error = %e, user_id = auth.user_id, "Failed to fetch transactions");
            Ok(HttpResponse::InternalServerError().json(json!({
                "message": "Server error fetching transactions"
            })))
        }
    }
}

/// Record a transaction for the caller
#[utoipa::path(
    post,
    path = "/api/data/transactions",
    request_body = CreateTransaction,
    responses(
        (status = 201, description = "Transaction created", body = Transaction),
        (status = 400, description = "Invalid transaction", body = Object, example = json!({
            "message": "Error adding transaction",
            "error": "partyName must not be empty"
        })),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Transactions"
)]
pub async fn add_transaction(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateTransaction>,
) -> actix_web::Result<impl Responder> {
    if let Err(e) = payload.validate() {
        return Ok(add_error(e));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO transactions (date, party_name, details, amount, type, user_id)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(payload.date)
    .bind(payload.party_name.trim())
    .bind(payload.details.as_deref())
    .bind(payload.amount)
    .bind(payload.kind.as_ref())
    .bind(auth.user_id)
    .execute(pool.get_ref())
    .await;

    let id = match result {
        Ok(done) => done.last_insert_id(),
        Err(e) => {
            error!(error = %e, user_id = auth.user_id, "Failed to insert transaction");
            return Ok(add_error(e.to_string()));
        }
    };

    match fetch_for_user(pool.get_ref(), auth.user_id, id).await {
        Ok(Some(transaction)) => Ok(HttpResponse::Created().json(transaction)),
        Ok(None) => Ok(add_error("Transaction was not stored")),
        Err(e) => {
            error!(error = %e, id, "Failed to read back transaction");
            Ok(add_error(e.to_string()))
        }
    }
}

/// Delete one of the caller's transactions
#[utoipa::path(
    delete,
    path = "/api/data/transactions/{id}",
    params(("id", description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction removed", body = Object, example = json!({
            "message": "Transaction removed"
        })),
        (status = 404, description = "Not found or owned by another user", body = Object, example = json!({
            "message": "Transaction not found"
        })),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Transactions"
)]
pub async fn delete_transaction(
    auth: AuthUser,
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM transactions WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(auth.user_id)
        .execute(pool.get_ref())
        .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => Ok(HttpResponse::NotFound().json(json!({
            "message": "Transaction not found"
        }))),
        Ok(_) => {
            debug!(id, user_id = auth.user_id, "Transaction removed");
            Ok(HttpResponse::Ok().json(json!({ "message": "Transaction removed" })))
        }
        Err(e) => {
            error!(error = %e, id, user_id = auth.user_id, "Failed to delete transaction");
            Ok(HttpResponse::InternalServerError().json(json!({ "message": "Server Error" })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    fn payload(body: Value) -> CreateTransaction {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_create_body_uses_client_field_names() {
        let tx = payload(json!({
            "date": "2026-01-15",
            "partyName": "Sharma Traders",
            "amount": 1500.5,
            "type": "expense"
        }));
        assert_eq!(tx.party_name, "Sharma Traders");
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.amount, Decimal::new(15005, 1));
        assert!(tx.details.is_none());
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_amount_accepts_string() {
        let tx = payload(json!({
            "date": "2026-01-15",
            "partyName": "Sharma Traders",
            "amount": "15000.00",
            "type": "income"
        }));
        assert_eq!(tx.amount, Decimal::new(15000, 0));
    }

    #[test]
    fn test_blank_party_name_is_invalid() {
        let tx = payload(json!({
            "date": "2026-01-15",
            "partyName": "   ",
            "amount": 10,
            "type": "income"
        }));
        assert!(tx.validate().is_err());
    }

    #[test]
    fn test_amount_beyond_column_is_invalid() {
        let tx = payload(json!({
            "date": "2026-01-15",
            "partyName": "Big Order",
            "amount": "100000000",
            "type": "income"
        }));
        assert!(tx.validate().is_err());
    }

    async fn echo(payload: web::Json<CreateTransaction>) -> impl Responder {
        HttpResponse::Ok().body(payload.party_name.clone())
    }

    #[actix_web::test]
    async fn test_unknown_type_reads_as_add_error() {
        let app = actix_test::init_service(
            App::new().service(
                web::resource("/transactions")
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .route(web::post().to(echo)),
            ),
        )
        .await;
        let req = actix_test::TestRequest::post()
            .uri("/transactions")
            .set_json(json!({
                "date": "2026-01-15",
                "partyName": "Sharma Traders",
                "amount": 10,
                "type": "refund"
            }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["message"], "Error adding transaction");
        assert!(body["error"].as_str().is_some());
    }
}
