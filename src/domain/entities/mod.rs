//! # Domain Entities
//!
//! Core domain entities representing the main business objects of the
//! marketing dashboard. Every tenant-owned entity carries the `rede` it
//! belongs to.
//!
//! ## Core Entities
//!
//! - **UserProfile**: dashboard user with the network fields used for scoping
//! - **Store**: a physical store (loja) of a network
//!
//! ## Campaign Entities
//!
//! - **Promotion**: time-boxed promotion broadcast by the bot
//! - **Survey**: customer satisfaction survey
//! - **BirthdayMessage**: message template sent on customer birthdays
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod user_profile;
mod store;
mod promotion;
mod survey;
mod birthday;

pub use user_profile::{UserProfile, UserProfileRepository};
pub use store::{Store, StoreLookup, StoreRepository};
pub use promotion::{NewPromotion, Promotion, PromotionRepository};
pub use survey::{Survey, SurveyRepository};
pub use birthday::{BirthdayMessage, BirthdayRepository, NewBirthdayMessage, MAX_BIRTHDAY_LEAD_DAYS};

#[cfg(test)]
pub use user_profile::MockUserProfileRepository;
#[cfg(test)]
pub use store::{MockStoreLookup, MockStoreRepository};
#[cfg(test)]
pub use promotion::MockPromotionRepository;
#[cfg(test)]
pub use survey::MockSurveyRepository;
#[cfg(test)]
pub use birthday::MockBirthdayRepository;
