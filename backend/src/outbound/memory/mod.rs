//! Process-local adapters used when no database URL is configured and by the
//! end-to-end HTTP tests. Contents are lost on restart.

mod bookings;
mod content;
mod users;

pub use bookings::InMemoryBookingRepository;
pub use content::{InMemoryActivityRepository, InMemoryGalleryRepository};
pub use users::InMemoryUserRepository;
