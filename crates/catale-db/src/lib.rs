//! # catale-db
//!
//! PostgreSQL implementations of the repository traits defined in `catale-core`.
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use catale_db::{create_pool, run_migrations, DatabaseConfig, PgCocktailRepository};
//!
//! let pool = create_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! let cocktails = PgCocktailRepository::new(pool);
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, MIGRATIONS_DIR};
pub use repositories::{
    PgCocktailRepository, PgDiaryRepository, PgLikeRepository, PgMemberRepository,
    PgReviewRepository,
};
