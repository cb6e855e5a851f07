//! JWT session tokens.
//!
//! Implements the `TokenCodec` port from `soilcare-core` with HS256-signed
//! JWTs. Tokens carry the user id as `sub` plus issued-at and expiry
//! timestamps; nothing is stored server-side.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use soilcare_core::auth::token::TokenCodec;
use soilcare_types::error::TokenError;

/// How long an issued token stays valid.
const TOKEN_TTL_DAYS: i64 = 30;

/// JWT claims embedded in session tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// Subject -- the user id.
    sub: String,
    /// Issued at (unix timestamp).
    iat: i64,
    /// Expiry (unix timestamp).
    exp: i64,
}

/// HS256 codec over a shared signing secret.
///
/// No Debug derive: the keys wrap the signing secret.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtTokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Signing)
    }

    fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_codec() -> JwtTokenCodec {
        JwtTokenCodec::new(b"test-signing-secret")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let codec = make_codec();
        let user_id = Uuid::now_v7();

        let token = codec.issue(user_id).unwrap();
        assert_eq!(codec.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = make_codec();
        let past = Utc::now() - Duration::days(60);
        let claims = Claims {
            sub: Uuid::now_v7().to_string(),
            iat: past.timestamp(),
            exp: (past + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-signing-secret"),
        )
        .unwrap();

        assert!(matches!(codec.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = make_codec().issue(Uuid::now_v7()).unwrap();
        let other = JwtTokenCodec::new(b"different-secret");

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let codec = make_codec();

        assert!(matches!(
            codec.verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
        assert!(matches!(codec.verify(""), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let codec = make_codec();
        let now = Utc::now();
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-signing-secret"),
        )
        .unwrap();

        assert!(matches!(codec.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_token_lives_thirty_days() {
        let codec = make_codec();
        let token = codec.issue(Uuid::now_v7()).unwrap();

        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-signing-secret"),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 30 * 24 * 60 * 60);
    }
}
