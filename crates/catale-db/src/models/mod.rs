//! Database models - SQLx-compatible structs for PostgreSQL tables

mod cocktail;
mod diary;
mod member;
mod review;

pub use cocktail::CocktailModel;
pub use diary::DiaryModel;
pub use member::MemberModel;
pub use review::ReviewModel;
