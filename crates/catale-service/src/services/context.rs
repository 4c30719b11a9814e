//! Service context - dependency container for services
//!
//! Holds the repositories and the JWT service. Repositories are trait objects,
//! so the same services run against PostgreSQL or in-memory stores.

use std::sync::Arc;

use catale_common::auth::JwtService;
use catale_core::traits::{
    CocktailRepository, DiaryRepository, LikeRepository, MemberRepository, ReviewRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    cocktail_repo: Arc<dyn CocktailRepository>,
    like_repo: Arc<dyn LikeRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    member_repo: Arc<dyn MemberRepository>,
    diary_repo: Arc<dyn DiaryRepository>,
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::default()
    }

    // === Repositories ===

    /// Catalog store
    pub fn cocktail_repo(&self) -> &dyn CocktailRepository {
        self.cocktail_repo.as_ref()
    }

    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn diary_repo(&self) -> &dyn DiaryRepository {
        self.diary_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for [`ServiceContext`]; every dependency is required
#[derive(Default)]
pub struct ServiceContextBuilder {
    cocktail_repo: Option<Arc<dyn CocktailRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    diary_repo: Option<Arc<dyn DiaryRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cocktail_repo(mut self, repo: Arc<dyn CocktailRepository>) -> Self {
        self.cocktail_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn diary_repo(mut self, repo: Arc<dyn DiaryRepository>) -> Self {
        self.diary_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            cocktail_repo: required(self.cocktail_repo, "cocktail_repo")?,
            like_repo: required(self.like_repo, "like_repo")?,
            review_repo: required(self.review_repo, "review_repo")?,
            member_repo: required(self.member_repo, "member_repo")?,
            diary_repo: required(self.diary_repo, "diary_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
        })
    }
}
