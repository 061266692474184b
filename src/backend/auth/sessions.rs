/**
 * Session Tokens
 *
 * Sessions are stateless: a successful login yields an HS256 JWT carrying the
 * user ID (`sub`), the issue time (`iat`) and an expiry (`exp`). Nothing is
 * stored server-side, so "logged in" is re-derived from the token on every
 * request and logout cannot revoke a token before it expires.
 *
 * The signing secret is read once at startup and kept in `TokenIssuer`,
 * shared through the application state.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on the request
    #[error("Missing Authorization Header")]
    MissingToken,
    /// The token is not three dot-separated segments, or names no user
    #[error("Malformed token")]
    Malformed,
    /// The signature does not match the header and payload
    #[error("Signature verification failed")]
    InvalidSignature,
    /// The token is past its expiry
    #[error("Token has expired")]
    Expired,
}

/// Token issuing failure
#[derive(Debug, Error)]
pub enum TokenError {
    /// The configured lifetime puts the expiry outside the representable range
    #[error("token expiry is out of range")]
    ExpiryOutOfRange,
    #[error(transparent)]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens with the process-wide secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`; tokens live for `ttl`
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; a token is rejected the second it expires.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token asserting `user_id`
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify `token` and return the user ID it asserts
    pub fn verify(&self, token: &str) -> Result<i64, AuthError> {
        if !is_well_formed(token) {
            return Err(AuthError::Malformed);
        }

        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(classify)?;

        data.claims.sub.parse::<i64>().map_err(|_| AuthError::Malformed)
    }
}

/// A JWT is exactly three non-empty segments joined by dots
fn is_well_formed(token: &str) -> bool {
    let segments: Vec<&str> = token.split('.').collect();
    segments.len() == 3 && segments.iter().all(|segment| !segment.is_empty())
}

/// Map a decoding failure of a structurally intact token
///
/// Any failure other than expiry means the segments do not match the
/// signature we would have produced, so it is reported as a signature
/// failure. jsonwebtoken checks the signature before the expiry, so a
/// tampered expired token is reported as tampered.
fn classify(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        _ => AuthError::InvalidSignature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", Duration::minutes(15))
    }

    fn tamper(token: &str, index: usize) -> String {
        let mut bytes = token.as_bytes().to_vec();
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        let token = issuer().issue(42).unwrap();
        assert_eq!(issuer().verify(&token), Ok(42));
    }

    #[test]
    fn test_claims_carry_expiry() {
        let token = issuer().issue(7).unwrap();
        let claims = decode::<Claims>(&token, &issuer().decoding, &issuer().validation)
            .unwrap()
            .claims;
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_expired_token() {
        let expired = TokenIssuer::new("test-secret", Duration::seconds(-10));
        let token = expired.issue(42).unwrap();
        assert_eq!(issuer().verify(&token), Err(AuthError::Expired));
    }

    #[test]
    fn test_unrepresentable_expiry_is_an_error() {
        let forever = TokenIssuer::new("test-secret", Duration::MAX);
        assert!(matches!(forever.issue(42), Err(TokenError::ExpiryOutOfRange)));
    }

    #[test]
    fn test_wrong_secret() {
        let other = TokenIssuer::new("another-secret", Duration::minutes(15));
        let token = other.issue(42).unwrap();
        assert_eq!(issuer().verify(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn test_any_altered_byte_is_detected() {
        let token = issuer().issue(42).unwrap();
        for index in 0..token.len() {
            if token.as_bytes()[index] == b'.' {
                continue;
            }
            let altered = tamper(&token, index);
            assert_eq!(
                issuer().verify(&altered),
                Err(AuthError::InvalidSignature),
                "alteration at byte {} went unnoticed",
                index
            );
        }
    }

    #[test]
    fn test_malformed_tokens() {
        assert_eq!(issuer().verify(""), Err(AuthError::Malformed));
        assert_eq!(issuer().verify("invalid_token"), Err(AuthError::Malformed));
        assert_eq!(issuer().verify("a.b"), Err(AuthError::Malformed));
        assert_eq!(issuer().verify("a..c"), Err(AuthError::Malformed));
        assert_eq!(issuer().verify("a.b.c.d"), Err(AuthError::Malformed));
    }

    #[test]
    fn test_non_numeric_subject_is_malformed() {
        let issuer = issuer();
        let claims = Claims {
            sub: "not-a-user".to_string(),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &issuer.encoding).unwrap();
        assert_eq!(issuer.verify(&token), Err(AuthError::Malformed));
    }
}
