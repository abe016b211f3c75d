use crate::models::Claims;
use jsonwebtoken::{DecodingKey, Validation, decode};

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}


#[cfg(test)]
mod tests {
    use super::test_support::token_for;
    use super::*;

    #[test]
    fn test_verify_round_trips_user_id() {
        let token = token_for(42, "secret", 900);
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.id, 42);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = token_for(42, "secret", 900);
        assert!(verify_token(&token, "other").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = token_for(42, "secret", -3600);
        assert!(verify_token(&token, "secret").is_err());
    }
}
