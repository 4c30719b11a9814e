//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in catale-core.

mod cocktail;
mod diary;
mod error;
mod like;
mod member;
mod review;

pub use cocktail::PgCocktailRepository;
pub use diary::PgDiaryRepository;
pub use like::PgLikeRepository;
pub use member::PgMemberRepository;
pub use review::PgReviewRepository;
