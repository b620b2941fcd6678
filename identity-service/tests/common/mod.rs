use std::sync::Arc;

use auth::Authenticator;
use auth::TokenService;
use identity_service::domain::user::service::UserService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;

const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
const TEST_ISSUER: &str = "blog-backend-test";
const TEST_AUDIENCE: &str = "blog-frontend-test";

/// Test application that spawns a real server over the in-memory directory
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repo = Arc::new(InMemoryUserRepository::new());
        let user_service = Arc::new(UserService::new(user_repo));

        let token_service = TokenService::new(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE, 24);
        let authenticator = Arc::new(Authenticator::new(token_service));

        let router = create_router(user_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a user and return the response body
    pub async fn register(&self, name: &str, email: &str, password: &str) -> serde_json::Value {
        let response = self
            .post("/api/users")
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        response.json().await.expect("Failed to parse response")
    }

    /// Log in and return the token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }
}
