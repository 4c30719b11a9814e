//! Authentication service
//!
//! Handles member registration, login, and token refresh. Refresh tokens are
//! stateless: a valid, unexpired refresh token for an existing member is
//! exchanged for a new pair in the same session.

use catale_common::auth::{hash_password, validate_password_strength, verify_password, TokenType};
use catale_common::AppError;
use catale_core::entities::{Member, NewMember};
use catale_core::error::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new member and log them in
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let new_member = NewMember::new(request.email, request.nickname);
        if self.ctx.member_repo().email_exists(&new_member.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;
        let member = self.ctx.member_repo().create(&new_member, &password_hash).await?;

        info!(member_id = member.id, "Member registered");

        self.start_session(&member)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password both answer `INVALID_CREDENTIALS`.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();

        let Some(member) = self.ctx.member_repo().find_by_email(&email).await? else {
            warn!("Login failed: member not found");
            return Err(AppError::InvalidCredentials.into());
        };

        let password_hash = self
            .ctx
            .member_repo()
            .get_password_hash(member.id)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(member_id = member.id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(member_id = member.id, "Member logged in");

        self.start_session(&member)
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .verify(&request.refresh_token, TokenType::Refresh)?;
        let member_id = claims.member_id()?;

        // A deleted member's tokens stop working
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(AppError::InvalidToken)?;

        let tokens = self.ctx.jwt_service().issue(member.id, claims.session_id)?;
        Ok(AuthResponse::new(tokens, &member))
    }

    fn start_session(&self, member: &Member) -> ServiceResult<AuthResponse> {
        let session_id = Uuid::new_v4().to_string();
        let tokens = self.ctx.jwt_service().issue(member.id, Some(session_id))?;
        Ok(AuthResponse::new(tokens, member))
    }
}
