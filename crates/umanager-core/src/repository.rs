use crate::error::Result;
use crate::link::{CreateLinkParams, Link, UpdateLinkParams};
use crate::link_id::LinkId;
use async_trait::async_trait;
use std::sync::Arc;

/// A read-only view of link storage.
#[async_trait]
pub trait ReadLinkRepository: Send + Sync + 'static {
    /// Returns every link owned by `user_id`, possibly none.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Link>>;

    /// Returns the link with the given id.
    /// Fails with [`StorageError::NotFound`](crate::StorageError::NotFound) if absent.
    async fn find_by_id(&self, id: &LinkId) -> Result<Link>;

    /// Returns every stored link.
    async fn find_all(&self) -> Result<Vec<Link>>;
}

/// Link storage with write access.
///
/// Implementations assign identifiers and timestamps; callers never supply
/// them.
#[async_trait]
pub trait LinkRepository: ReadLinkRepository {
    /// Stores a new link and returns it with its assigned id and timestamps.
    async fn create(&self, params: CreateLinkParams) -> Result<Link>;

    /// Replaces the mutable fields of an existing link and bumps `updated_at`.
    /// Fails with [`StorageError::NotFound`](crate::StorageError::NotFound) if absent.
    async fn update(&self, params: UpdateLinkParams) -> Result<Link>;

    /// Removes the link permanently. Removing an absent id is not an error.
    async fn delete(&self, id: &LinkId) -> Result<()>;
}

#[async_trait]
impl<R: ReadLinkRepository> ReadLinkRepository for Arc<R> {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Link>> {
        (**self).find_by_user_id(user_id).await
    }

    async fn find_by_id(&self, id: &LinkId) -> Result<Link> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Link>> {
        (**self).find_all().await
    }
}

#[async_trait]
impl<R: LinkRepository> LinkRepository for Arc<R> {
    async fn create(&self, params: CreateLinkParams) -> Result<Link> {
        (**self).create(params).await
    }

    async fn update(&self, params: UpdateLinkParams) -> Result<Link> {
        (**self).update(params).await
    }

    async fn delete(&self, id: &LinkId) -> Result<()> {
        (**self).delete(id).await
    }
}
