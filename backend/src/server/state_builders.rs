//! Assemble domain services over the selected repository adapters.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{
    ActivityRepository, BookingRepository, DatabaseProbe, DetachedDatabaseProbe,
    GalleryRepository, PasswordHasher, UserRepository,
};
use crate::domain::{
    ActivityService, AuthService, BookingService, GalleryService, Messages, RegistrationService,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{
    InMemoryActivityRepository, InMemoryBookingRepository, InMemoryGalleryRepository,
    InMemoryUserRepository,
};
use crate::outbound::persistence::{
    DbPool, DieselActivityRepository, DieselBookingRepository, DieselDatabaseProbe,
    DieselGalleryRepository, DieselUserRepository,
};
use crate::outbound::security::BcryptPasswordHasher;

/// Driven adapters for one deployment.
pub struct Adapters<U, B, A, G, H> {
    pub users: Arc<U>,
    pub bookings: Arc<B>,
    pub activities: Arc<A>,
    pub gallery: Arc<G>,
    pub hasher: Arc<H>,
    pub database: Arc<dyn DatabaseProbe>,
}

/// Wrap each repository in its service and expose the driving ports.
pub fn assemble_ports<U, B, A, G, H>(
    adapters: Adapters<U, B, A, G, H>,
    clock: Arc<dyn Clock>,
    messages: Messages,
) -> HttpStatePorts
where
    U: UserRepository + 'static,
    B: BookingRepository + 'static,
    A: ActivityRepository + 'static,
    G: GalleryRepository + 'static,
    H: PasswordHasher + 'static,
{
    let Adapters {
        users,
        bookings,
        activities,
        gallery,
        hasher,
        database,
    } = adapters;

    let login = Arc::new(AuthService::new(users.clone(), hasher.clone(), messages));
    let registration = Arc::new(RegistrationService::new(
        users,
        hasher,
        clock.clone(),
        messages,
    ));
    let booking_service = Arc::new(BookingService::new(bookings, clock.clone(), messages));
    let activity_service = Arc::new(ActivityService::new(activities, clock.clone(), messages));
    let gallery_service = Arc::new(GalleryService::new(gallery, clock, messages));

    HttpStatePorts {
        login,
        registration,
        bookings: booking_service.clone(),
        bookings_query: booking_service,
        activities: activity_service.clone(),
        activities_query: activity_service,
        gallery: gallery_service.clone(),
        gallery_query: gallery_service,
        database,
    }
}

/// PostgreSQL-backed state sharing one pool across every repository.
pub fn persistent_state(pool: &DbPool, messages: Messages) -> HttpState {
    let adapters = Adapters {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        bookings: Arc::new(DieselBookingRepository::new(pool.clone())),
        activities: Arc::new(DieselActivityRepository::new(pool.clone())),
        gallery: Arc::new(DieselGalleryRepository::new(pool.clone())),
        hasher: Arc::new(BcryptPasswordHasher::new()),
        database: Arc::new(DieselDatabaseProbe::new(pool.clone())),
    };
    HttpState::new(
        assemble_ports(adapters, Arc::new(DefaultClock), messages),
        messages,
    )
}

/// Process-local state over the given credential store.
///
/// `hasher` is injectable so tests can use a cheap bcrypt cost.
pub fn in_memory_state(
    users: Arc<InMemoryUserRepository>,
    hasher: BcryptPasswordHasher,
    clock: Arc<dyn Clock>,
    messages: Messages,
) -> HttpState {
    let adapters = Adapters {
        users,
        bookings: Arc::new(InMemoryBookingRepository::new()),
        activities: Arc::new(InMemoryActivityRepository::new()),
        gallery: Arc::new(InMemoryGalleryRepository::new()),
        hasher: Arc::new(hasher),
        database: Arc::new(DetachedDatabaseProbe),
    };
    HttpState::new(assemble_ports(adapters, clock, messages), messages)
}

pub(super) fn build_http_state(pool: Option<&DbPool>, messages: Messages) -> HttpState {
    match pool {
        Some(pool) => persistent_state(pool, messages),
        None => in_memory_state(
            Arc::new(InMemoryUserRepository::new()),
            BcryptPasswordHasher::new(),
            Arc::new(DefaultClock),
            messages,
        ),
    }
}
