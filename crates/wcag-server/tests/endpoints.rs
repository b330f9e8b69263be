//! Drives the real router over TCP with in-memory backends.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use wcag_core::Role;
use wcag_server::identity::{IdentityProvider, MemoryIdentity, NewAccount};
use wcag_server::kv::{KvStore, MemoryKv};
use wcag_config::ServerConfig;
use wcag_server::{AppState, router, state_from_config};

const PREFIX: &str = "/make-server-6cf82b18";

struct Harness {
    base: String,
    http: reqwest::Client,
    kv: Arc<MemoryKv>,
    identity: Arc<MemoryIdentity>,
}

impl Harness {
    async fn start() -> Self {
        let (state, kv, identity) = AppState::in_memory();
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, router(state, PREFIX)).await.expect("serve");
        });
        Self {
            base: format!("http://{addr}{PREFIX}"),
            http: reqwest::Client::new(),
            kv,
            identity,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Create an account through `/signup` and sign it in.
    async fn user(&self, email: &str, role: &str) -> String {
        let resp = self
            .http
            .post(self.url("/signup"))
            .json(&json!({ "email": email, "password": "secret-pw", "name": "Tester", "role": role }))
            .send()
            .await
            .expect("signup");
        assert_eq!(resp.status(), 200);
        let (token, _) = self
            .identity
            .sign_in(email, "secret-pw")
            .await
            .expect("sign in");
        token
    }

    async fn create(&self, token: &str, body: Value) -> reqwest::Response {
        self.http
            .post(self.url("/wcag-cards"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .expect("create")
    }

    async fn cards(&self) -> Vec<Value> {
        let body: Value = self
            .http
            .get(self.url("/wcag-cards"))
            .send()
            .await
            .expect("list")
            .json()
            .await
            .expect("json");
        body["cards"].as_array().cloned().unwrap_or_default()
    }
}

fn full_card() -> Value {
    json!({
        "criterion_id": "9.9.9",
        "title": "9.9.9 Custom [AA]",
        "level": "AA",
        "principle": "Robust",
        "category": "Compatible",
        "description": "A custom criterion.",
    })
}

#[tokio::test]
async fn health_and_init() {
    let h = Harness::start().await;
    let health: Value = h
        .http
        .get(h.url("/health"))
        .send()
        .await
        .expect("health")
        .json()
        .await
        .expect("json");
    assert_eq!(health, json!({ "status": "ok" }));

    let resp = h.http.post(h.url("/init")).send().await.expect("init");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        h.kv.get("wcag_cards_table_created").await.expect("get"),
        Some(json!("true"))
    );
}

#[tokio::test]
async fn listing_needs_no_token() {
    let h = Harness::start().await;
    let resp = h.http.get(h.url("/wcag-cards")).send().await.expect("list");
    assert_eq!(resp.status(), 200);
    assert!(h.cards().await.is_empty());
}

#[tokio::test]
async fn admin_creates_updates_and_deletes_a_card() {
    let h = Harness::start().await;
    let token = h.user("admin@example.com", "admin").await;

    let resp = h.create(&token, full_card()).await;
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.expect("json");
    assert_eq!(created["message"], "Card created successfully");
    assert_eq!(created["card"]["keywords"], json!([]));
    let id = created["card"]["id"].as_str().expect("id").to_string();
    assert!(id.parse::<i64>().is_ok(), "id is a millisecond timestamp: {id}");

    let cards = h.cards().await;
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["id"], id.as_str());
    assert_eq!(cards[0]["criterion_id"], "9.9.9");

    let resp = h
        .http
        .put(h.url(&format!("/wcag-cards/{id}")))
        .bearer_auth(&token)
        .json(&json!({ "title": "9.9.9 Renamed [AA]" }))
        .send()
        .await
        .expect("update");
    assert_eq!(resp.status(), 200);
    let updated: Value = resp.json().await.expect("json");
    assert_eq!(updated["card"]["title"], "9.9.9 Renamed [AA]");
    assert_eq!(updated["card"]["description"], "A custom criterion.");

    let resp = h
        .http
        .delete(h.url(&format!("/wcag-cards/{id}")))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete");
    assert_eq!(resp.status(), 200);
    assert!(h.cards().await.is_empty());
}

#[tokio::test]
async fn two_creates_in_the_same_millisecond_get_distinct_ids() {
    let h = Harness::start().await;
    let token = h.user("admin@example.com", "admin").await;
    let (a, b) = tokio::join!(h.create(&token, full_card()), h.create(&token, full_card()));
    assert_eq!(a.status(), 200);
    assert_eq!(b.status(), 200);
    assert_eq!(h.cards().await.len(), 2);
}

#[tokio::test]
async fn missing_title_is_rejected_and_nothing_is_stored() {
    let h = Harness::start().await;
    let token = h.user("admin@example.com", "admin").await;
    let mut body = full_card();
    body.as_object_mut().expect("object").remove("title");

    let resp = h.create(&token, body).await;
    assert_eq!(resp.status(), 400);
    let error: Value = resp.json().await.expect("json");
    assert_eq!(error["error"], "Missing required fields");
    assert!(h.cards().await.is_empty());
}

#[tokio::test]
async fn mutations_require_an_admin_token() {
    let h = Harness::start().await;

    let resp = h
        .http
        .post(h.url("/wcag-cards"))
        .json(&full_card())
        .send()
        .await
        .expect("create");
    assert_eq!(resp.status(), 401);

    let resp = h.create("not-a-token", full_card()).await;
    assert_eq!(resp.status(), 401);
    let error: Value = resp.json().await.expect("json");
    assert_eq!(error["error"], "Invalid token");

    let token = h.user("user@example.com", "user").await;
    let resp = h.create(&token, full_card()).await;
    assert_eq!(resp.status(), 403);
    assert!(h.cards().await.is_empty());
}

#[tokio::test]
async fn token_without_profile_is_not_found() {
    let h = Harness::start().await;
    let user = h
        .identity
        .create_user(NewAccount {
            email: "ghost@example.com".into(),
            password: "secret-pw".into(),
            name: "Ghost".into(),
            role: Role::Admin,
        })
        .await
        .expect("create");
    let token = h.identity.issue_token(&user.id).await.expect("token");

    let resp = h.create(&token, full_card()).await;
    assert_eq!(resp.status(), 404);
    let error: Value = resp.json().await.expect("json");
    assert_eq!(error["error"], "User profile not found");
}

#[tokio::test]
async fn deleting_an_unknown_card_is_not_found_and_changes_nothing() {
    let h = Harness::start().await;
    let token = h.user("admin@example.com", "admin").await;
    assert_eq!(h.create(&token, full_card()).await.status(), 200);
    let before = h.kv.len().await;

    let resp = h
        .http
        .delete(h.url("/wcag-cards/123"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete");
    assert_eq!(resp.status(), 404);
    assert_eq!(h.kv.len().await, before);
    assert_eq!(h.cards().await.len(), 1);
}

#[tokio::test]
async fn signup_validates_and_rejects_duplicates() {
    let h = Harness::start().await;

    let resp = h
        .http
        .post(h.url("/signup"))
        .json(&json!({ "email": "a@b.c" }))
        .send()
        .await
        .expect("signup");
    assert_eq!(resp.status(), 400);
    let error: Value = resp.json().await.expect("json");
    assert_eq!(error["error"], "Email and password are required");

    let body = json!({ "email": "a@b.c", "password": "secret-pw", "name": "A" });
    let resp = h.http.post(h.url("/signup")).json(&body).send().await.expect("signup");
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.expect("json");
    assert_eq!(created["user"]["role"], "user");

    let resp = h.http.post(h.url("/signup")).json(&body).send().await.expect("signup");
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn profile_is_rebuilt_from_metadata_and_persisted() {
    let h = Harness::start().await;
    let user = h
        .identity
        .create_user(NewAccount {
            email: "meta@example.com".into(),
            password: "secret-pw".into(),
            name: "Meta".into(),
            role: Role::Admin,
        })
        .await
        .expect("create");
    let token = h.identity.issue_token(&user.id).await.expect("token");

    let resp = h
        .http
        .get(h.url("/profile"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("profile");
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["profile"]["name"], "Meta");
    assert_eq!(body["profile"]["role"], "admin");
    assert!(
        h.kv.get(&format!("user_profile:{}", user.id))
            .await
            .expect("get")
            .is_some()
    );

    let resp = h.http.get(h.url("/profile")).send().await.expect("profile");
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let h = Harness::start().await;
    let resp = h
        .http
        .request(reqwest::Method::OPTIONS, h.url("/wcag-cards"))
        .header("Origin", "https://example.com")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "authorization,content-type")
        .send()
        .await
        .expect("preflight");
    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        resp.headers()
            .get("access-control-max-age")
            .and_then(|v| v.to_str().ok()),
        Some("600")
    );
}

/// Server built from default config, as `wcag serve` does, so only HTTP is
/// available to reach the accounts.
async fn start_from_default_config() -> (String, reqwest::Client) {
    let state = state_from_config(&ServerConfig::default()).expect("state");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router(state, PREFIX)).await.expect("serve");
    });
    (format!("http://{addr}"), reqwest::Client::new())
}

async fn grant(http: &reqwest::Client, root: &str, grant_type: &str, body: Value) -> reqwest::Response {
    http.post(format!("{root}/auth/v1/token?grant_type={grant_type}"))
        .json(&body)
        .send()
        .await
        .expect("token")
}

#[tokio::test]
async fn local_accounts_sign_in_refresh_and_log_out_over_http() {
    let (root, http) = start_from_default_config().await;
    let resp = http
        .post(format!("{root}{PREFIX}/signup"))
        .json(&json!({ "email": "admin@example.com", "password": "secret-pw", "name": "Ana", "role": "admin" }))
        .send()
        .await
        .expect("signup");
    assert_eq!(resp.status(), 200);

    let wrong = grant(&http, &root, "password", json!({ "email": "admin@example.com", "password": "nope" })).await;
    assert_eq!(wrong.status(), 400);
    let body: Value = wrong.json().await.expect("json");
    assert_eq!(body["error"], "invalid_grant");

    let resp = grant(&http, &root, "password", json!({ "email": "admin@example.com", "password": "secret-pw" })).await;
    assert_eq!(resp.status(), 200);
    let session: Value = resp.json().await.expect("json");
    let access = session["access_token"].as_str().expect("access").to_string();
    let refresh = session["refresh_token"].as_str().expect("refresh").to_string();
    assert_eq!(session["user"]["email"], "admin@example.com");
    assert!(session["expires_in"].as_i64().is_some_and(|secs| secs > 0));

    let created = http
        .post(format!("{root}{PREFIX}/wcag-cards"))
        .bearer_auth(&access)
        .json(&full_card())
        .send()
        .await
        .expect("create");
    assert_eq!(created.status(), 200);

    let renewed: Value = grant(&http, &root, "refresh_token", json!({ "refresh_token": refresh }))
        .await
        .json()
        .await
        .expect("json");
    let renewed_access = renewed["access_token"].as_str().expect("access").to_string();
    let reused = grant(&http, &root, "refresh_token", json!({ "refresh_token": refresh })).await;
    assert_eq!(reused.status(), 400);

    let logout = http
        .post(format!("{root}/auth/v1/logout"))
        .bearer_auth(&renewed_access)
        .send()
        .await
        .expect("logout");
    assert_eq!(logout.status(), 204);
    let profile = http
        .get(format!("{root}{PREFIX}/profile"))
        .bearer_auth(&renewed_access)
        .send()
        .await
        .expect("profile");
    assert_eq!(profile.status(), 401);
}

#[tokio::test]
async fn unknown_grant_type_is_rejected() {
    let (root, http) = start_from_default_config().await;
    let resp = grant(&http, &root, "client_credentials", json!({})).await;
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.expect("json");
    assert_eq!(body["error"], "unsupported_grant_type");
}
