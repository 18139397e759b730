//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **NetworkScopeService**: read/write scoping shared by every feature
//! - **ProfileService**: network context and diagnostics of a user
//! - **PromotionService**: promotion listing and creation
//! - **StoreService**: store listing
//! - **SurveyService**: survey listing
//! - **BirthdayService**: birthday message templates

pub mod network_scope_service;
pub mod profile_service;
pub mod promotion_service;
pub mod store_service;
pub mod survey_service;
pub mod birthday_service;

// Re-export scope service types
pub use network_scope_service::{NetworkScopeService, ScopeError};

// Re-export profile service types
pub use profile_service::{ProfileService, ProfileServiceImpl};

// Re-export promotion service types
pub use promotion_service::{CreatePromotionDto, PromotionError, PromotionService, PromotionServiceImpl};

// Re-export store service types
pub use store_service::{StoreService, StoreServiceImpl};

// Re-export survey service types
pub use survey_service::{SurveyService, SurveyServiceImpl};

// Re-export birthday service types
pub use birthday_service::{BirthdayError, BirthdayService, BirthdayServiceImpl, CreateBirthdayMessageDto};
