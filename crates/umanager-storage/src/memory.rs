use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use tracing::trace;
use umanager_core::error::{Result, StorageError};
use umanager_core::link::{CreateLinkParams, Link, UpdateLinkParams};
use umanager_core::link_id::LinkId;
use umanager_core::repository::{LinkRepository, ReadLinkRepository};

/// In-memory implementation of the link repository using DashMap.
///
/// DashMap shards its locks, so operations on different links do not block
/// each other. Listings are returned in creation order.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    storage: DashMap<LinkId, Link>,
}

impl InMemoryLinkRepository {
    /// Creates a new, empty repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn collect<F>(&self, filter: F) -> Vec<Link>
    where
        F: Fn(&Link) -> bool,
    {
        let mut links: Vec<Link> = self
            .storage
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        links
    }

    /// Stores `link` unless its id is already taken; never overwrites.
    fn insert_new(&self, link: Link) -> Result<Link> {
        match self.storage.entry(link.id) {
            // Only possible if the id counter wraps within one second.
            Entry::Occupied(_) => Err(StorageError::Operation(format!(
                "generated link id {} already exists",
                link.id
            ))),
            Entry::Vacant(slot) => {
                trace!(id = %link.id, "storing link");
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }
}

#[async_trait]
impl ReadLinkRepository for InMemoryLinkRepository {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Link>> {
        Ok(self.collect(|link| link.user_id == user_id))
    }

    async fn find_by_id(&self, id: &LinkId) -> Result<Link> {
        self.storage
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Link>> {
        Ok(self.collect(|_| true))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, params: CreateLinkParams) -> Result<Link> {
        let now = Timestamp::now();
        let link = Link {
            id: LinkId::generate_at(now),
            title: params.title,
            url: params.url,
            images: params.images,
            tags: params.tags,
            user_id: params.user_id,
            created_at: now,
            updated_at: now,
        };

        self.insert_new(link)
    }

    async fn update(&self, params: UpdateLinkParams) -> Result<Link> {
        let Some(mut entry) = self.storage.get_mut(&params.id) else {
            return Err(StorageError::NotFound(params.id.to_string()));
        };

        let link = entry.value_mut();
        link.user_id = params.user_id;
        link.title = params.title;
        link.url = params.url;
        link.images = params.images;
        link.tags = params.tags;
        link.updated_at = Timestamp::now().max(link.updated_at);

        trace!(id = %link.id, "updated link");
        Ok(link.clone())
    }

    async fn delete(&self, id: &LinkId) -> Result<()> {
        if self.storage.remove(id).is_some() {
            trace!(id = %id, "deleted link");
        }
        Ok(())
    }
}
