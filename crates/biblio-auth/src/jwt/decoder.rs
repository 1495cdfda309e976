//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use biblio_core::config::auth::AuthConfig;
use biblio_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens against the process-wide signing secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Fails with Unauthorized when the signature does not match, the
    /// payload is malformed, or the token has expired.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use biblio_core::config::auth::AuthConfig;
    use uuid::Uuid;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_hours: 24,
            admin_email: "admin@gmail.com".to_string(),
            password_min_length: 8,
        }
    }

    #[test]
    fn test_issue_decode_round_trip() {
        let config = test_config("secret-a");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let id = Uuid::new_v4();
        let token = encoder.issue(id, "a@b.com").unwrap();
        let claims = decoder.decode(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = test_config("secret-a");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let mut token = encoder.issue(Uuid::new_v4(), "a@b.com").unwrap();
        // Flip a character in the payload segment.
        let mid = token.len() / 2;
        let replacement = if token.as_bytes()[mid] == b'A' { 'B' } else { 'A' };
        token.replace_range(mid..mid + 1, &replacement.to_string());

        assert!(decoder.decode(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&test_config("secret-a"));
        let decoder = JwtDecoder::new(&test_config("secret-b"));

        let token = encoder.issue(Uuid::new_v4(), "a@b.com").unwrap();
        assert!(decoder.decode(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let decoder = JwtDecoder::new(&test_config("secret-a"));

        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(b"secret-a"),
        )
        .unwrap();

        let err = decoder.decode(&token).unwrap_err();
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let decoder = JwtDecoder::new(&test_config("secret-a"));
        assert!(decoder.decode("definitely.not.a-jwt").is_err());
        assert!(decoder.decode("").is_err());
    }
}
