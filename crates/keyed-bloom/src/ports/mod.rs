//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - membership API for callers
//! - Driven Ports (outbound) - capabilities the filter consumes

pub mod inbound;
pub mod outbound;

pub use inbound::MembershipApi;
pub use outbound::KeyedHasher;
