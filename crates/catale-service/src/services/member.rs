//! Member service

use catale_core::error::DomainError;
use tracing::instrument;

use crate::dto::MemberResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Profile of the authenticated member
    #[instrument(skip(self))]
    pub async fn get_current_member(&self, member_id: i64) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        Ok(MemberResponse::from(member))
    }
}
