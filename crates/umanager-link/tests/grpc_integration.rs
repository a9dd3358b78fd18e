//! End-to-end tests for the link gRPC server.
//!
//! Each test binds a real server to an ephemeral port and drives it with the
//! generated tonic client.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::Code;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;
use umanager_link::LinkGrpcServer;
use umanager_proto_schema::v1::link_service_client::LinkServiceClient;
use umanager_proto_schema::v1::{
    CreateLinkRequest, DeleteLinkRequest, Empty, GetLinkRequest, GetLinksByUserIdRequest,
    UpdateLinkRequest,
};
use umanager_storage::InMemoryLinkRepository;

async fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = LinkGrpcServer::new(InMemoryLinkRepository::new(), Duration::from_secs(2));

    let router = umanager_link::server::router(service).await;

    tokio::spawn(async move {
        router
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    addr
}

async fn client(addr: SocketAddr) -> LinkServiceClient<Channel> {
    LinkServiceClient::connect(format!("http://{addr}"))
        .await
        .unwrap()
}

fn go_docs() -> CreateLinkRequest {
    CreateLinkRequest {
        user_id: "u1".to_string(),
        title: "Go Docs".to_string(),
        url: "https://go.dev".to_string(),
        images: vec![],
        tags: vec!["lang".to_string()],
    }
}

#[tokio::test]
async fn link_lifecycle() {
    let mut client = client(start_server().await).await;

    client.create_link(go_docs()).await.unwrap();

    let links = client.list_links(Empty {}).await.unwrap().into_inner().links;
    assert_eq!(links.len(), 1);
    let listed = links.into_iter().next().unwrap();
    assert_eq!(listed.title, "Go Docs");
    assert_eq!(listed.url, "https://go.dev");
    assert_eq!(listed.tags, vec!["lang".to_string()]);
    assert_eq!(listed.user_id, "u1");
    assert!(!listed.created_at.is_empty());
    assert!(!listed.updated_at.is_empty());

    let fetched = client
        .get_link(GetLinkRequest {
            id: listed.id.clone(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(fetched, listed);

    client
        .update_link(UpdateLinkRequest {
            id: listed.id.clone(),
            user_id: "u1".to_string(),
            title: "The Go Programming Language".to_string(),
            url: "https://go.dev".to_string(),
            images: vec!["https://go.dev/images/go-logo-blue.svg".to_string()],
            tags: vec!["lang".to_string(), "docs".to_string()],
        })
        .await
        .unwrap();

    let by_user = client
        .get_links_by_user_id(GetLinksByUserIdRequest {
            user_id: "u1".to_string(),
        })
        .await
        .unwrap()
        .into_inner()
        .links;
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].id, listed.id);
    assert_eq!(by_user[0].title, "The Go Programming Language");
    assert_eq!(by_user[0].images.len(), 1);
    assert_eq!(by_user[0].created_at, listed.created_at);

    client
        .delete_link(DeleteLinkRequest {
            id: listed.id.clone(),
        })
        .await
        .unwrap();

    let status = client
        .get_link(GetLinkRequest { id: listed.id })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let links = client.list_links(Empty {}).await.unwrap().into_inner().links;
    assert!(links.is_empty());
}

#[tokio::test]
async fn malformed_ids_are_invalid_argument() {
    let mut client = client(start_server().await).await;

    let status = client
        .get_link(GetLinkRequest {
            id: "not-a-valid-id".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = client
        .update_link(UpdateLinkRequest {
            id: "not-a-valid-id".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = client
        .delete_link(DeleteLinkRequest {
            id: "not-a-valid-id".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn unknown_link_is_not_found() {
    let mut client = client(start_server().await).await;

    let status = client
        .get_link(GetLinkRequest {
            id: "65f1c2a9e4b0a1b2c3d4e5f6".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn links_are_scoped_by_owner() {
    let mut client = client(start_server().await).await;

    client.create_link(go_docs()).await.unwrap();
    client
        .create_link(CreateLinkRequest {
            user_id: "u2".to_string(),
            ..go_docs()
        })
        .await
        .unwrap();

    for user in ["u1", "u2"] {
        let links = client
            .get_links_by_user_id(GetLinksByUserIdRequest {
                user_id: user.to_string(),
            })
            .await
            .unwrap()
            .into_inner()
            .links;
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].user_id, user);
    }

    let links = client.list_links(Empty {}).await.unwrap().into_inner().links;
    assert_eq!(links.len(), 2);
}

#[tokio::test]
async fn health_reports_link_service_serving() {
    let addr = start_server().await;
    let channel = Channel::from_shared(format!("http://{addr}"))
        .unwrap()
        .connect()
        .await
        .unwrap();
    let mut health = HealthClient::new(channel);

    let response = health
        .check(HealthCheckRequest {
            service: "link.v1.LinkService".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.status, ServingStatus::Serving as i32);

    let status = health
        .check(HealthCheckRequest {
            service: "link.v1.NoSuchService".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}
