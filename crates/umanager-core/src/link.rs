use crate::link_id::LinkId;
use jiff::Timestamp;
use typed_builder::TypedBuilder;

/// A stored link (bookmark) record.
///
/// `id`, `created_at` and `updated_at` are owned by the storage backend and
/// never copied from client input.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    /// Identifier of the owning user, opaque to this service.
    pub user_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields accepted when creating a link.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct CreateLinkParams {
    #[builder(setter(into))]
    pub user_id: String,
    #[builder(setter(into))]
    pub title: String,
    #[builder(setter(into))]
    pub url: String,
    #[builder(default)]
    pub images: Vec<String>,
    #[builder(default)]
    pub tags: Vec<String>,
}

/// Replacement values for every mutable field of an existing link.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct UpdateLinkParams {
    pub id: LinkId,
    #[builder(setter(into))]
    pub user_id: String,
    #[builder(setter(into))]
    pub title: String,
    #[builder(setter(into))]
    pub url: String,
    #[builder(default)]
    pub images: Vec<String>,
    #[builder(default)]
    pub tags: Vec<String>,
}
