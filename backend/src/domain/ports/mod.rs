//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`, [`LoginService`],
//! [`UserRegistration`]) are what inbound adapters call. Driven ports
//! (`*Repository`, [`PasswordHasher`], [`DatabaseProbe`]) are what services
//! call and outbound adapters implement.

mod macros;
pub(crate) use macros::define_port_error;

mod activity_command;
mod activity_query;
mod activity_repository;
mod booking_command;
mod booking_query;
mod booking_repository;
mod database_probe;
mod gallery_command;
mod gallery_query;
mod gallery_repository;
mod login_service;
mod password_hasher;
mod user_registration;
mod user_repository;

pub use activity_command::ActivityCommand;
#[cfg(test)]
pub use activity_command::MockActivityCommand;
pub use activity_query::ActivityQuery;
#[cfg(test)]
pub use activity_query::MockActivityQuery;
#[cfg(test)]
pub use activity_repository::MockActivityRepository;
pub use activity_repository::{ActivityRepository, ActivityRepositoryError};
pub use booking_command::BookingCommand;
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_query::BookingQuery;
#[cfg(test)]
pub use booking_query::MockBookingQuery;
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingInsertOutcome, BookingRepository, BookingRepositoryError};
#[cfg(test)]
pub use database_probe::MockDatabaseProbe;
pub use database_probe::{DatabaseProbe, DatabaseProbeError, DetachedDatabaseProbe};
pub use gallery_command::GalleryCommand;
#[cfg(test)]
pub use gallery_command::MockGalleryCommand;
pub use gallery_query::GalleryQuery;
#[cfg(test)]
pub use gallery_query::MockGalleryQuery;
#[cfg(test)]
pub use gallery_repository::MockGalleryRepository;
pub use gallery_repository::{GalleryRepository, GalleryRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{LoginService, login_failure};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::{RegistrationSubmission, UserRegistration};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
