//! Core types and traits for the umanager link service.
//!
//! This crate provides the link record, its identifier, and the storage
//! contract shared by the storage backends and the gRPC handler.

pub mod error;
pub mod link;
pub mod link_id;
pub mod repository;

pub use error::{CoreError, StorageError};
pub use link::{CreateLinkParams, Link, UpdateLinkParams};
pub use link_id::LinkId;
pub use repository::{LinkRepository, ReadLinkRepository};
