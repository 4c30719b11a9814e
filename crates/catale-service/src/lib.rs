//! # catale-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CocktailService, DiaryService, MemberService, ReviewService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
