// --- Module Structure ---

// Core client services and components.
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod session;
pub mod transport;

// Module for the role-segregated navigation policy (Guest, User, Admin).
pub mod routes;

// --- Public Re-exports ---

// Makes the core types easily accessible to the host application and to the
// binary entry point (main.rs).
pub use config::ClientConfig;
pub use error::{ApiError, TransportError};
pub use gateway::ApiGateway;
pub use routes::{RouteDecision, resolve, select_tree};
pub use session::{Role, Session, SessionUser};
pub use transport::{HttpTransport, MockTransport, Transport, TransportState};
