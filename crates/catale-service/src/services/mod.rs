//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates repository calls for one area of the app.

pub mod auth;
pub mod cocktail;
pub mod context;
pub mod diary;
pub mod error;
pub mod member;
pub mod review;

pub use auth::AuthService;
pub use cocktail::CocktailService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use diary::DiaryService;
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use review::ReviewService;
