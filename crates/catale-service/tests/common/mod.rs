//! In-memory repositories for service tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use catale_common::JwtService;
use catale_core::entities::{
    Cocktail, Diary, Like, Member, NewDiary, NewMember, NewReview, Review,
};
use catale_core::error::DomainError;
use catale_core::traits::{
    CocktailRepository, DiaryRepository, LikeRepository, MemberRepository, RepoResult,
    ReviewRepository,
};
use catale_core::value_objects::EmotionVector;
use catale_service::ServiceContext;

#[derive(Default)]
struct State {
    next_id: i64,
    cocktails: Vec<Cocktail>,
    /// Insertion order
    likes: Vec<Like>,
    reviews: Vec<Review>,
    members: Vec<(Member, String)>,
    diaries: Vec<Diary>,
    fail_reviews: bool,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn like_count(&self, cocktail_id: i64) -> i64 {
        self.likes.iter().filter(|l| l.cocktail_id == cocktail_id).count() as i64
    }

    fn with_count(&self, cocktail: &Cocktail) -> Cocktail {
        Cocktail {
            like_count: self.like_count(cocktail.id),
            ..cocktail.clone()
        }
    }
}

/// One shared store implementing every repository trait
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    pub fn context(&self) -> ServiceContext {
        let store = Arc::new(self.clone());
        ServiceContext::builder()
            .cocktail_repo(store.clone())
            .like_repo(store.clone())
            .review_repo(store.clone())
            .member_repo(store.clone())
            .diary_repo(store)
            .jwt_service(Arc::new(JwtService::new("service-test-secret", 900, 3600)))
            .build()
            .unwrap()
    }

    pub fn add_cocktail(&self, name: &str, emotion: (i32, i32, i32)) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        state.cocktails.push(Cocktail {
            id,
            name: name.to_string(),
            image_url: None,
            content: format!("{name} description"),
            ingredients: "ice".to_string(),
            alcohol_level: 2,
            sweetness: 2,
            emotion: EmotionVector::from(emotion),
            like_count: 0,
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_member(&self, nickname: &str) -> i64 {
        let mut state = self.state();
        let id = state.next_id();
        let now = Utc::now();
        state.members.push((
            Member {
                id,
                email: format!("{nickname}@catale.test"),
                nickname: nickname.to_string(),
                created_at: now,
                updated_at: now,
            },
            "unused-hash".to_string(),
        ));
        id
    }

    pub fn add_review(&self, cocktail_id: i64, member_id: i64, rating: i32) {
        let mut state = self.state();
        let id = state.next_id();
        state.reviews.push(Review {
            id,
            cocktail_id,
            member_id,
            rating,
            content: format!("rated {rating}"),
            created_at: Utc::now(),
        });
    }

    pub fn like_rows(&self) -> usize {
        self.state().likes.len()
    }

    pub fn fail_reviews(&self) {
        self.state().fail_reviews = true;
    }

    /// Raw row lookup that ignores the soft-delete filter
    pub fn stored_diary(&self, id: i64) -> Option<Diary> {
        self.state().diaries.iter().find(|d| d.id == id).cloned()
    }
}

#[async_trait]
impl CocktailRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Cocktail>> {
        let state = self.state();
        Ok(state
            .cocktails
            .iter()
            .find(|c| c.id == id)
            .map(|c| state.with_count(c)))
    }

    async fn find_all(&self) -> RepoResult<Vec<Cocktail>> {
        let state = self.state();
        Ok(state.cocktails.iter().map(|c| state.with_count(c)).collect())
    }

    async fn find_all_by_likes(&self) -> RepoResult<Vec<Cocktail>> {
        let mut all = self.find_all().await?;
        all.sort_by(|a, b| b.like_count.cmp(&a.like_count).then(a.id.cmp(&b.id)));
        Ok(all)
    }
}

#[async_trait]
impl LikeRepository for MemoryStore {
    async fn exists(&self, member_id: i64, cocktail_id: i64) -> RepoResult<bool> {
        Ok(self.state().likes.iter().any(|l| l.links(member_id, cocktail_id)))
    }

    async fn create(&self, like: &Like) -> RepoResult<()> {
        let mut state = self.state();
        if !state.likes.iter().any(|l| l.links(like.member_id, like.cocktail_id)) {
            state.likes.push(like.clone());
        }
        Ok(())
    }

    async fn delete(&self, member_id: i64, cocktail_id: i64) -> RepoResult<()> {
        self.state().likes.retain(|l| !l.links(member_id, cocktail_id));
        Ok(())
    }

    async fn find_liked_cocktails(&self, member_id: i64) -> RepoResult<Vec<Cocktail>> {
        let state = self.state();
        Ok(state
            .likes
            .iter()
            .rev()
            .filter(|l| l.member_id == member_id)
            .filter_map(|l| state.cocktails.iter().find(|c| c.id == l.cocktail_id))
            .map(|c| state.with_count(c))
            .collect())
    }
}

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn find_by_cocktail(&self, cocktail_id: i64) -> RepoResult<Vec<Review>> {
        let state = self.state();
        if state.fail_reviews {
            return Err(DomainError::DatabaseError("review store offline".to_string()));
        }
        Ok(state
            .reviews
            .iter()
            .rev()
            .filter(|r| r.cocktail_id == cocktail_id)
            .cloned()
            .collect())
    }

    async fn create(&self, review: &NewReview) -> RepoResult<Review> {
        let mut state = self.state();
        let created = Review {
            id: state.next_id(),
            cocktail_id: review.cocktail_id,
            member_id: review.member_id,
            rating: review.rating,
            content: review.content.clone(),
            created_at: Utc::now(),
        };
        state.reviews.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        Ok(self
            .state()
            .members
            .iter()
            .find(|(m, _)| m.id == id)
            .map(|(m, _)| m.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .state()
            .members
            .iter()
            .find(|(m, _)| m.email == email)
            .map(|(m, _)| m.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.state().members.iter().any(|(m, _)| m.email == email))
    }

    async fn create(&self, member: &NewMember, password_hash: &str) -> RepoResult<Member> {
        let mut state = self.state();
        if state.members.iter().any(|(m, _)| m.email == member.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let now = Utc::now();
        let created = Member {
            id: state.next_id(),
            email: member.email.clone(),
            nickname: member.nickname.clone(),
            created_at: now,
            updated_at: now,
        };
        state.members.push((created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        Ok(self
            .state()
            .members
            .iter()
            .find(|(m, _)| m.id == id)
            .map(|(_, hash)| hash.clone()))
    }
}

#[async_trait]
impl DiaryRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Diary>> {
        Ok(self
            .state()
            .diaries
            .iter()
            .find(|d| d.id == id && !d.is_deleted())
            .cloned())
    }

    async fn find_by_member_and_month(
        &self,
        member_id: i64,
        year: i32,
        month: i32,
    ) -> RepoResult<Vec<Diary>> {
        Ok(self
            .state()
            .diaries
            .iter()
            .filter(|d| {
                d.member_id == member_id && d.year == year && d.month == month && !d.is_deleted()
            })
            .cloned()
            .collect())
    }

    async fn create(&self, diary: &NewDiary) -> RepoResult<Diary> {
        let mut state = self.state();
        let created = Diary {
            id: state.next_id(),
            member_id: diary.member_id,
            cocktail_id: diary.cocktail_id,
            mood: diary.mood,
            comment: diary.comment.clone(),
            reason: diary.reason.clone(),
            year: diary.year,
            month: diary.month,
            emotion: diary.emotion,
            created_at: Utc::now(),
            deleted_at: None,
        };
        state.diaries.push(created.clone());
        Ok(created)
    }

    async fn soft_delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state();
        let diary = state
            .diaries
            .iter_mut()
            .find(|d| d.id == id && !d.is_deleted())
            .ok_or(DomainError::DiaryNotFound(id))?;
        diary.deleted_at = Some(Utc::now());
        Ok(())
    }
}
