//! Database entity definitions.
//!
//! Entities map table rows one-to-one; conversion into domain models happens
//! via `From` impls so repositories return domain types.

pub mod area;
pub mod community;
pub mod event;
pub mod igroup;
pub mod person;
pub mod prospect;
pub mod registrant;
pub mod transaction;
pub mod user;
pub mod venue;
pub mod warrior;

pub use area::AreaEntity;
pub use community::CommunityEntity;
pub use event::EventEntity;
pub use igroup::IGroupEntity;
pub use person::PersonEntity;
pub use prospect::ProspectEntity;
pub use registrant::RegistrantEntity;
pub use transaction::TransactionEntity;
pub use user::UserEntity;
pub use venue::VenueEntity;
pub use warrior::WarriorEntity;
