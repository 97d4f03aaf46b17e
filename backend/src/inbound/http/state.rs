//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised with mocks or the in-memory adapters.

use std::sync::Arc;

use crate::domain::Messages;
use crate::domain::ports::{
    ActivityCommand, ActivityQuery, BookingCommand, BookingQuery, DatabaseProbe, GalleryCommand,
    GalleryQuery, LoginService, UserRegistration,
};

/// Port bundle handed to [`HttpState::new`].
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn UserRegistration>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub activities: Arc<dyn ActivityCommand>,
    pub activities_query: Arc<dyn ActivityQuery>,
    pub gallery: Arc<dyn GalleryCommand>,
    pub gallery_query: Arc<dyn GalleryQuery>,
    pub database: Arc<dyn DatabaseProbe>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn UserRegistration>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub activities: Arc<dyn ActivityCommand>,
    pub activities_query: Arc<dyn ActivityQuery>,
    pub gallery: Arc<dyn GalleryCommand>,
    pub gallery_query: Arc<dyn GalleryQuery>,
    pub database: Arc<dyn DatabaseProbe>,
    pub messages: Messages,
}

impl HttpState {
    /// Bind the ports to the response locale.
    pub fn new(ports: HttpStatePorts, messages: Messages) -> Self {
        let HttpStatePorts {
            login,
            registration,
            bookings,
            bookings_query,
            activities,
            activities_query,
            gallery,
            gallery_query,
            database,
        } = ports;
        Self {
            login,
            registration,
            bookings,
            bookings_query,
            activities,
            activities_query,
            gallery,
            gallery_query,
            database,
            messages,
        }
    }
}
