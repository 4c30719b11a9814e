//! Bearer token issuing and verification
//!
//! Members authenticate with a short-lived access token. A longer-lived
//! refresh token of the same shape is exchanged for a new pair at the
//! refresh endpoint.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::AppError;

/// Which half of a token pair a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims carried by every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Member id, as a decimal string
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: TokenType,
    /// Login session the pair was issued for; kept across refreshes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl Claims {
    /// The authenticated member's id
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` if the subject is not a member id
    pub fn member_id(&self) -> Result<i64, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Access and refresh token returned at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Signs and verifies HS256 tokens with a shared secret
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: i64,
    refresh_ttl: i64,
}

impl JwtService {
    #[must_use]
    pub fn new(secret: &str, access_ttl: i64, refresh_ttl: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(
            &config.secret,
            config.access_token_expiry,
            config.refresh_token_expiry,
        )
    }

    /// Issue a fresh pair for a member
    ///
    /// # Errors
    /// Returns an internal error if signing fails
    pub fn issue(&self, member_id: i64, session_id: Option<String>) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.sign(member_id, TokenType::Access, session_id.clone())?,
            refresh_token: self.sign(member_id, TokenType::Refresh, session_id)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl,
        })
    }

    fn sign(
        &self,
        member_id: i64,
        token_type: TokenType,
        session_id: Option<String>,
    ) -> Result<String, AppError> {
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let now = Utc::now();
        let claims = Claims {
            sub: member_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl)).timestamp(),
            token_type,
            session_id,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("failed to sign token: {e}")))
    }

    /// Verify signature and expiry, then check the token type
    ///
    /// # Errors
    /// `TokenExpired` for an expired token, `InvalidToken` for anything else
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?
            .claims;

        if claims.token_type != expected {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }

    /// Verify an access token
    ///
    /// # Errors
    /// See [`JwtService::verify`]
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.verify(token, TokenType::Access)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
