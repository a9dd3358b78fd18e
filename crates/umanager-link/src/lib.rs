//! gRPC handler for the umanager link service.
//!
//! [`LinkGrpcServer`] translates `link.v1.LinkService` calls into calls on a
//! [`LinkRepository`](umanager_core::LinkRepository), bounding each one with a
//! fixed timeout and mapping storage failures onto gRPC status codes.
//! [`server::router`] wires it, together with the health service, into a
//! tonic router.

pub mod error;
pub mod grpc;
pub mod server;

pub use error::LinkServiceError;
pub use grpc::{LinkGrpcServer, DEFAULT_REQUEST_TIMEOUT};
