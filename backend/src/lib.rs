//! Temple website backend.
//!
//! Hexagonal layout: `domain` holds types, services and ports; `inbound`
//! adapts HTTP onto the driving ports; `outbound` implements the driven
//! ports over PostgreSQL, process memory and bcrypt; `server` assembles the
//! Actix application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(test)]
mod test_support;

pub use doc::ApiDoc;
pub use middleware::Trace;
