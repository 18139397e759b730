//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserProfileRepository** - `profiles` lookups
//! - **PgStoreRepository** - `lojas` listing, also the network existence check
//! - **PgPromotionRepository** - `promocoes`
//! - **PgSurveyRepository** - `pesquisas`
//! - **PgBirthdayRepository** - `mensagens_aniversario`
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgStoreRepository, PgPromotionRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let store_repo = PgStoreRepository::new(pool.clone());
//!     let promotion_repo = PgPromotionRepository::new(pool.clone());
//! }
//! ```

pub mod user_profile_repository;
pub mod store_repository;
pub mod promotion_repository;
pub mod survey_repository;
pub mod birthday_repository;

pub use user_profile_repository::PgUserProfileRepository;
pub use store_repository::PgStoreRepository;
pub use promotion_repository::PgPromotionRepository;
pub use survey_repository::PgSurveyRepository;
pub use birthday_repository::PgBirthdayRepository;
