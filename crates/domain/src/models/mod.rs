//! Domain models and request/response DTOs.

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

pub use area::Area;
pub use community::Community;
pub use event::{Event, EventResponse, EventType, PublicationStatus, ScheduleEntry};
pub use igroup::IGroup;
pub use person::Person;
pub use prospect::Prospect;
pub use registrant::{Audience, Registrant, RegistrantStatus};
pub use transaction::{PaymentMethod, Transaction, TransactionType};
pub use user::{User, UserRole};
pub use venue::Venue;
pub use warrior::{Warrior, WarriorStatus};
