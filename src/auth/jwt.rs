use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::types::Identity;

pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 30; // 30 days

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
}

pub fn make_session_jwt(identity: &Identity, secret: &str) -> Result<String> {
    let exp = (chrono::Utc::now().timestamp() + SESSION_TTL_SECS) as usize;

    let claims = Claims {
        sub: identity.id.clone(),
        email: identity.email.clone(),
        exp,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn decode_session_jwt(token: &str, secret: &str) -> Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::{decode_session_jwt, make_session_jwt, SESSION_TTL_SECS};
    use crate::auth::types::Identity;

    fn identity() -> Identity {
        Identity {
            id: "u1".into(),
            email: "alice@example.com".into(),
        }
    }

    #[test]
    fn round_trips_identity_claims() {
        let token = make_session_jwt(&identity(), "secret").unwrap();
        let claims = decode_session_jwt(&token, "secret").unwrap();

        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.email, "alice@example.com");
    }

    #[test]
    fn expiry_is_thirty_days_out() {
        let token = make_session_jwt(&identity(), "secret").unwrap();
        let claims = decode_session_jwt(&token, "secret").unwrap();

        let now = chrono::Utc::now().timestamp();
        let exp = claims.exp as i64;
        assert!(exp > now + SESSION_TTL_SECS - 60);
        assert!(exp <= now + SESSION_TTL_SECS + 60);
    }

    #[test]
    fn rejects_wrong_secret() {
        let token = make_session_jwt(&identity(), "secret").unwrap();
        assert!(decode_session_jwt(&token, "other").is_err());
    }
}
