//! Repository implementations, one per resource.

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

pub use area::AreaRepository;
pub use community::CommunityRepository;
pub use event::EventRepository;
pub use igroup::IGroupRepository;
pub use person::PersonRepository;
pub use prospect::ProspectRepository;
pub use registrant::RegistrantRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;
pub use venue::VenueRepository;
pub use warrior::WarriorRepository;
