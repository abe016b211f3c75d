use serde::{Deserialize, Serialize};

/// Bearer token payload issued by the account service.
/// Only the user id is read here; any other claims are ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: u64,
    pub exp: usize,
}
