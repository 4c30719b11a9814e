//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Cocktail, Diary, Like, Member, NewDiary, NewMember, NewReview, Review};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Cocktail Repository (catalog store)
// ============================================================================

#[async_trait]
pub trait CocktailRepository: Send + Sync {
    /// Find cocktail by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Cocktail>>;

    /// List every cocktail in catalog order
    async fn find_all(&self) -> RepoResult<Vec<Cocktail>>;

    /// List every cocktail ordered by like count (most liked first)
    async fn find_all_by_likes(&self) -> RepoResult<Vec<Cocktail>>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Check if the member likes the cocktail
    async fn exists(&self, member_id: i64, cocktail_id: i64) -> RepoResult<bool>;

    /// Create a like
    async fn create(&self, like: &Like) -> RepoResult<()>;

    /// Remove a like
    async fn delete(&self, member_id: i64, cocktail_id: i64) -> RepoResult<()>;

    /// Cocktails liked by a member (most recently liked first)
    async fn find_liked_cocktails(&self, member_id: i64) -> RepoResult<Vec<Cocktail>>;

    /// Flip the like state for a pair and return the new state (`true` = liked)
    ///
    /// The default is a plain check-then-act sequence. Stores that can run it
    /// atomically should override it.
    async fn toggle(&self, member_id: i64, cocktail_id: i64) -> RepoResult<bool> {
        if self.exists(member_id, cocktail_id).await? {
            self.delete(member_id, cocktail_id).await?;
            Ok(false)
        } else {
            self.create(&Like::new(member_id, cocktail_id)).await?;
            Ok(true)
        }
    }
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// List reviews for a cocktail (newest first); empty when there are none
    async fn find_by_cocktail(&self, cocktail_id: i64) -> RepoResult<Vec<Review>>;

    /// Create a review
    async fn create(&self, review: &NewReview) -> RepoResult<Review>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Find member by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new member
    async fn create(&self, member: &NewMember, password_hash: &str) -> RepoResult<Member>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Diary Repository
// ============================================================================

#[async_trait]
pub trait DiaryRepository: Send + Sync {
    /// Find a live (not deleted) diary by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Diary>>;

    /// List a member's live diaries for one month (oldest first)
    async fn find_by_member_and_month(
        &self,
        member_id: i64,
        year: i32,
        month: i32,
    ) -> RepoResult<Vec<Diary>>;

    /// Create a diary entry
    async fn create(&self, diary: &NewDiary) -> RepoResult<Diary>;

    /// Soft delete a diary
    async fn soft_delete(&self, id: i64) -> RepoResult<()>;
}
