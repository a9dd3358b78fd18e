//! Transport wiring shared by the server binary and the integration tests.

use crate::grpc::LinkGrpcServer;
use tonic::transport::server::Router;
use tonic::transport::Server;
use tracing::info_span;
use umanager_core::LinkRepository;
use umanager_proto_schema::v1::link_service_server::LinkServiceServer;

/// Builds the tonic router serving `link.v1.LinkService` and the standard
/// `grpc.health.v1.Health` service, with the link service reported as
/// SERVING.
///
/// Every request runs inside a `grpc_request` span tagged with its path.
pub async fn router<R: LinkRepository>(service: LinkGrpcServer<R>) -> Router {
    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<LinkServiceServer<LinkGrpcServer<R>>>()
        .await;

    Server::builder()
        .trace_fn(|request| info_span!("grpc_request", path = %request.uri().path()))
        .add_service(health_service)
        .add_service(LinkServiceServer::new(service))
}
