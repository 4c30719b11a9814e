//! Domain entities - core business objects

mod cocktail;
mod diary;
mod like;
mod member;
mod review;

pub use cocktail::Cocktail;
pub use diary::{Diary, NewDiary};
pub use like::Like;
pub use member::{Member, NewMember};
pub use review::{NewReview, Review};
