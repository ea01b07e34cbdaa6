/// Access token issue and validation
///
/// Tokens are HS256-signed with a shared secret from configuration. Keys are
/// built once at startup and handed to the app through `AppState`.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

pub use jsonwebtoken::errors::Error as JwtError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expire_minutes: i64,
}

impl JwtKeys {
    pub fn from_secret(secret: &str, expire_minutes: i64) -> Self {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expire_minutes,
        }
    }

    pub fn expire_minutes(&self) -> i64 {
        self.expire_minutes
    }

    /// Issue an access token for `subject` with the configured lifetime.
    pub fn create_access_token(&self, subject: &str) -> Result<String, JwtError> {
        self.create_token(subject, Duration::minutes(self.expire_minutes))
    }

    pub fn create_token(&self, subject: &str, expires_in: Duration) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding)
    }

    /// Verify signature and expiry, returning the claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("algorithm", &JWT_ALGORITHM)
            .field("expire_minutes", &self.expire_minutes)
            .finish_non_exhaustive()
    }
}
