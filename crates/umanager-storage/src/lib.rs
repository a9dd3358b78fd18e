//! Storage backends for the umanager link service.

pub mod memory;

pub use memory::InMemoryLinkRepository;
pub use umanager_core::error::{Result, StorageError};
pub use umanager_core::repository::{LinkRepository, ReadLinkRepository};
