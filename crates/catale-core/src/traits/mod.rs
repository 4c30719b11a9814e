//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CocktailRepository, DiaryRepository, LikeRepository, MemberRepository, RepoResult,
    ReviewRepository,
};
