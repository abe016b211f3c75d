use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Row as stored; `type` is kept as text in the table.
#[derive(Debug, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: u64,
    pub date: NaiveDate,
    pub party_name: String,
    pub details: Option<String>,
    pub amount: Decimal,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "id": 12,
    "date": "2026-01-15",
    "partyName": "Sharma Traders",
    "details": "Invoice #221",
    "amount": "15000.00",
    "type": "income",
    "userId": 3,
    "createdAt": "2026-01-15T10:20:00Z",
    "updatedAt": "2026-01-15T10:20:00Z"
}))]
pub struct Transaction {
    pub id: u64,
    #[schema(value_type = String, format = "date")]
    pub date: NaiveDate,
    pub party_name: String,
    pub details: Option<String>,
    #[schema(value_type = String, example = "15000.00")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub user_id: u64,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String, format = "date-time")]
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = strum::ParseError;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            date: row.date,
            party_name: row.party_name,
            details: row.details,
            amount: row.amount,
            kind: TransactionType::from_str(&row.kind)?,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
