//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions for rows read from PostgreSQL.

mod cocktail;
mod diary;
mod member;
mod review;
