use crate::error::LinkServiceError;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tonic::{Request, Response, Status};
use tracing::{debug, warn};
use umanager_core::{LinkId, LinkRepository, StorageError, UpdateLinkParams};
use umanager_proto_schema::v1 as proto;
use umanager_proto_schema::v1::link_service_server::LinkService;

/// Timeout applied to each storage call when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// `link.v1.LinkService` backed by a [`LinkRepository`].
///
/// The server holds no per-call state: every call bounds its single storage
/// operation with `timeout` and translates the outcome. Nothing is retried.
#[derive(Debug)]
pub struct LinkGrpcServer<R> {
    repository: Arc<R>,
    timeout: Duration,
}

impl<R> Clone for LinkGrpcServer<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            timeout: self.timeout,
        }
    }
}

impl<R: LinkRepository> LinkGrpcServer<R> {
    pub fn new(repository: R, timeout: Duration) -> Self {
        Self {
            repository: Arc::new(repository),
            timeout,
        }
    }

    /// Runs a storage operation under the configured timeout.
    ///
    /// On expiry the operation future is dropped, which cancels it.
    async fn bounded<T, F>(&self, operation: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(result) => result,
            Err(_) => Err(StorageError::Timeout(format!(
                "no response within {} ms",
                self.timeout.as_millis()
            ))),
        }
    }

    async fn links_by_user_id(
        &self,
        request: proto::GetLinksByUserIdRequest,
    ) -> Result<proto::ListLinksResponse, LinkServiceError> {
        let links = self
            .bounded(self.repository.find_by_user_id(&request.user_id))
            .await?;
        debug!(user_id = %request.user_id, count = links.len(), "found links by user");
        Ok(links.into())
    }

    async fn create(
        &self,
        request: proto::CreateLinkRequest,
    ) -> Result<proto::Empty, LinkServiceError> {
        let link = self.bounded(self.repository.create(request.into())).await?;
        debug!(id = %link.id, user_id = %link.user_id, "created link");
        Ok(proto::Empty {})
    }

    async fn get(&self, request: proto::GetLinkRequest) -> Result<proto::Link, LinkServiceError> {
        let id = LinkId::try_from(&request)?;
        let link = self
            .bounded(self.repository.find_by_id(&id))
            .await
            .map_err(LinkServiceError::from_lookup)?;
        Ok(link.into())
    }

    async fn update(
        &self,
        request: proto::UpdateLinkRequest,
    ) -> Result<proto::Empty, LinkServiceError> {
        let params = UpdateLinkParams::try_from(request)?;
        let link = self.bounded(self.repository.update(params)).await?;
        debug!(id = %link.id, "updated link");
        Ok(proto::Empty {})
    }

    async fn delete(
        &self,
        request: proto::DeleteLinkRequest,
    ) -> Result<proto::Empty, LinkServiceError> {
        let id = LinkId::try_from(&request)?;
        self.bounded(self.repository.delete(&id)).await?;
        debug!(id = %id, "deleted link");
        Ok(proto::Empty {})
    }

    async fn list(&self) -> Result<proto::ListLinksResponse, LinkServiceError> {
        let links = self.bounded(self.repository.find_all()).await?;
        Ok(links.into())
    }
}

fn respond<T>(
    method: &'static str,
    result: Result<T, LinkServiceError>,
) -> Result<Response<T>, Status> {
    match result {
        Ok(message) => Ok(Response::new(message)),
        Err(error) => {
            warn!(method, code = ?error.code(), error = %error, "link request failed");
            Err(error.into())
        }
    }
}

#[tonic::async_trait]
impl<R: LinkRepository> LinkService for LinkGrpcServer<R> {
    async fn get_links_by_user_id(
        &self,
        request: Request<proto::GetLinksByUserIdRequest>,
    ) -> Result<Response<proto::ListLinksResponse>, Status> {
        respond(
            "GetLinksByUserId",
            self.links_by_user_id(request.into_inner()).await,
        )
    }

    async fn create_link(
        &self,
        request: Request<proto::CreateLinkRequest>,
    ) -> Result<Response<proto::Empty>, Status> {
        respond("CreateLink", self.create(request.into_inner()).await)
    }

    async fn get_link(
        &self,
        request: Request<proto::GetLinkRequest>,
    ) -> Result<Response<proto::Link>, Status> {
        respond("GetLink", self.get(request.into_inner()).await)
    }

    async fn update_link(
        &self,
        request: Request<proto::UpdateLinkRequest>,
    ) -> Result<Response<proto::Empty>, Status> {
        respond("UpdateLink", self.update(request.into_inner()).await)
    }

    async fn delete_link(
        &self,
        request: Request<proto::DeleteLinkRequest>,
    ) -> Result<Response<proto::Empty>, Status> {
        respond("DeleteLink", self.delete(request.into_inner()).await)
    }

    async fn list_links(
        &self,
        _request: Request<proto::Empty>,
    ) -> Result<Response<proto::ListLinksResponse>, Status> {
        respond("ListLinks", self.list().await)
    }
}
