use jiff::Timestamp;
use thiserror::Error;
use umanager_core as domain;
use umanager_core::LinkId;

tonic::include_proto!("link.v1");

/// Wire timestamp layout: RFC 3339 in UTC with second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("link id is malformed: {0}")]
    MalformedLinkId(String),
}

impl From<domain::CoreError> for ConversionError {
    fn from(error: domain::CoreError) -> Self {
        match error {
            domain::CoreError::InvalidLinkId { .. } => Self::MalformedLinkId(error.to_string()),
        }
    }
}

/// Renders a storage timestamp the way it appears on the wire.
pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp.strftime(TIMESTAMP_FORMAT).to_string()
}

impl From<domain::Link> for Link {
    fn from(link: domain::Link) -> Self {
        Self {
            id: link.id.to_hex(),
            title: link.title,
            url: link.url,
            images: link.images,
            tags: link.tags,
            user_id: link.user_id,
            created_at: format_timestamp(link.created_at),
            updated_at: format_timestamp(link.updated_at),
        }
    }
}

impl From<Vec<domain::Link>> for ListLinksResponse {
    fn from(links: Vec<domain::Link>) -> Self {
        Self {
            links: links.into_iter().map(Link::from).collect(),
        }
    }
}

impl From<CreateLinkRequest> for domain::CreateLinkParams {
    fn from(request: CreateLinkRequest) -> Self {
        Self {
            user_id: request.user_id,
            title: request.title,
            url: request.url,
            images: request.images,
            tags: request.tags,
        }
    }
}

impl TryFrom<UpdateLinkRequest> for domain::UpdateLinkParams {
    type Error = ConversionError;

    fn try_from(request: UpdateLinkRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LinkId::parse(&request.id)?,
            user_id: request.user_id,
            title: request.title,
            url: request.url,
            images: request.images,
            tags: request.tags,
        })
    }
}

impl TryFrom<&GetLinkRequest> for LinkId {
    type Error = ConversionError;

    fn try_from(request: &GetLinkRequest) -> Result<Self, Self::Error> {
        LinkId::parse(&request.id).map_err(ConversionError::from)
    }
}

impl TryFrom<&DeleteLinkRequest> for LinkId {
    type Error = ConversionError;

    fn try_from(request: &DeleteLinkRequest) -> Result<Self, Self::Error> {
        LinkId::parse(&request.id).map_err(ConversionError::from)
    }
}
