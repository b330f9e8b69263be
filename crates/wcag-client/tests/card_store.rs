//! Real client against the real router on an ephemeral port.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use wcag_client::{CardStoreClient, StoreError};
use wcag_core::responses::SignupRequest;
use wcag_core::{CardPatch, Level, NewCard, Role};
use wcag_server::identity::MemoryIdentity;
use wcag_server::{AppState, router};

const PREFIX: &str = "/make-server-6cf82b18";

async fn start() -> (CardStoreClient, Arc<MemoryIdentity>) {
    let (state, _kv, identity) = AppState::in_memory();
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        wcag_server::serve(listener, router(state, PREFIX))
            .await
            .expect("serve");
    });
    let client = CardStoreClient::new(
        format!("http://{addr}{PREFIX}"),
        "anon-key",
        Duration::from_secs(5),
    )
    .expect("client");
    (client, identity)
}

async fn signed_in(
    client: &CardStoreClient,
    identity: &MemoryIdentity,
    email: &str,
    role: Role,
) -> String {
    client
        .sign_up(&SignupRequest {
            email: email.into(),
            password: "secret-pw".into(),
            name: "Tester".into(),
            role: Some(role),
        })
        .await
        .expect("sign up");
    identity
        .sign_in(email, "secret-pw")
        .await
        .expect("sign in")
        .0
}

fn card() -> NewCard {
    NewCard {
        criterion_id: "9.9.9".into(),
        title: "9.9.9 Custom [AA]".into(),
        level: Level::Aa,
        principle: "Robust".into(),
        category: "Compatible".into(),
        description: "A custom criterion.".into(),
        keywords: vec!["custom".into()],
        url: None,
    }
}

#[tokio::test]
async fn health_init_and_anonymous_listing() {
    let (client, _) = start().await;
    assert!(client.health().await.expect("health").is_ok());
    assert_eq!(
        client.init().await.expect("init").message,
        "Database initialized successfully"
    );
    assert!(client.list_cards().await.expect("list").is_empty());
}

#[tokio::test]
async fn admin_card_lifecycle() {
    let (client, identity) = start().await;
    let token = signed_in(&client, &identity, "admin@example.com", Role::Admin).await;

    let created = client.create_card(&card(), &token).await.expect("create");
    assert_eq!(created.criterion_id, "9.9.9");

    let listed = client.list_cards().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    let patch = CardPatch {
        level: Some(Level::Aaa),
        ..CardPatch::default()
    };
    let updated = client
        .update_card(&created.id, &patch, &token)
        .await
        .expect("update");
    assert_eq!(updated.level, Level::Aaa);
    assert!(updated.updated_at >= created.updated_at);

    client.delete_card(&created.id, &token).await.expect("delete");
    assert!(client.list_cards().await.expect("list").is_empty());
}

#[tokio::test]
async fn server_errors_map_to_client_errors() {
    let (client, identity) = start().await;
    let admin = signed_in(&client, &identity, "admin@example.com", Role::Admin).await;
    let user = signed_in(&client, &identity, "user@example.com", Role::User).await;

    let err = client.create_card(&card(), &user).await.unwrap_err();
    assert!(matches!(err, StoreError::Forbidden(_)), "{err:?}");

    let err = client.create_card(&card(), "bogus").await.unwrap_err();
    assert!(err.is_unauthorized(), "{err:?}");

    let err = client.delete_card("404", &admin).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)), "{err:?}");

    let err = client
        .sign_up(&SignupRequest {
            email: "admin@example.com".into(),
            password: "secret-pw".into(),
            name: String::new(),
            role: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)), "{err:?}");
}

#[tokio::test]
async fn profile_reports_role() {
    let (client, identity) = start().await;
    let token = signed_in(&client, &identity, "admin@example.com", Role::Admin).await;
    let profile = client.fetch_profile(&token).await.expect("profile");
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.email, "admin@example.com");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = CardStoreClient::new(format!("http://{addr}"), "", Duration::from_secs(2))
        .expect("client");
    assert!(matches!(client.health().await, Err(StoreError::Http(_))));
}
