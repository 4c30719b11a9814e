//! Entity to DTO mappers

use catale_common::TokenPair;
use catale_core::entities::{Cocktail, Diary, Member, Review};

use super::responses::{
    AuthResponse, CocktailResponse, DiaryResponse, LikeToggleResponse, MemberResponse,
    ReviewResponse,
};

impl CocktailResponse {
    /// Annotate a cocktail with the viewer's like flag
    pub fn with_like(cocktail: Cocktail, is_liked: bool) -> Self {
        let (emotion1, emotion2, emotion3) = cocktail.emotion.as_tuple();
        Self {
            id: cocktail.id,
            name: cocktail.name,
            image_url: cocktail.image_url,
            content: cocktail.content,
            ingredients: cocktail.ingredients,
            alcohol_level: cocktail.alcohol_level,
            sweetness: cocktail.sweetness,
            emotion1,
            emotion2,
            emotion3,
            like_count: cocktail.like_count,
            is_liked,
        }
    }
}

impl LikeToggleResponse {
    pub fn new(cocktail_id: i64, liked: bool) -> Self {
        Self { cocktail_id, liked }
    }
}

impl AuthResponse {
    pub fn new(tokens: TokenPair, member: &Member) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            member: MemberResponse::from(member),
        }
    }
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            email: member.email.clone(),
            nickname: member.nickname.clone(),
            created_at: member.created_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            cocktail_id: review.cocktail_id,
            member_id: review.member_id,
            rating: review.rating,
            content: review.content,
            created_at: review.created_at,
        }
    }
}

impl From<Diary> for DiaryResponse {
    fn from(diary: Diary) -> Self {
        let (emotion1, emotion2, emotion3) = diary.emotion.as_tuple();
        Self {
            id: diary.id,
            cocktail_id: diary.cocktail_id,
            mood: diary.mood,
            comment: diary.comment,
            reason: diary.reason,
            year: diary.year,
            month: diary.month,
            emotion1,
            emotion2,
            emotion3,
            created_at: diary.created_at,
        }
    }
}
