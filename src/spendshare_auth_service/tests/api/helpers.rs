use chrono::Duration;
use fake::{Fake, faker::internet::en::SafeEmail};
use secrecy::Secret;
use serde::Serialize;
use spendshare_adapters::{
    Argon2PasswordHasher, HashMapCredentialRepository, JwtTokenService, TokenSettings,
    config::test,
};
use spendshare_application::{RepositoryCredentialStore, SessionOrchestrator};
use spendshare_auth_service::{AuthService, routes::SessionResponse};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let credential_store = RepositoryCredentialStore::new(
            HashMapCredentialRepository::new(),
            Argon2PasswordHasher::new(),
        );
        let token_service = JwtTokenService::with_system_clock(
            TokenSettings::new(
                Secret::from("access-test-secret".to_string()),
                Duration::minutes(10),
            ),
            TokenSettings::new(
                Secret::from("refresh-test-secret".to_string()),
                Duration::days(1),
            ),
        );
        let auth_service =
            AuthService::new(SessionOrchestrator::new(credential_store, token_service));

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(auth_service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        access_token: Option<&str>,
        body: &B,
    ) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}{}", &self.address, path))
            .json(body);
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_signup<B: Serialize + ?Sized>(&self, body: &B) -> reqwest::Response {
        self.post("/signup", None, body).await
    }

    pub async fn post_login<B: Serialize + ?Sized>(&self, body: &B) -> reqwest::Response {
        self.post("/login", None, body).await
    }

    pub async fn post_refresh<B: Serialize + ?Sized>(&self, body: &B) -> reqwest::Response {
        self.post("/refresh", None, body).await
    }

    pub async fn post_logout(&self, access_token: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/logout", &self.address));
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_update_email<B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        body: &B,
    ) -> reqwest::Response {
        self.post("/update-email", Some(access_token), body).await
    }

    pub async fn post_update_password<B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        body: &B,
    ) -> reqwest::Response {
        self.post("/update-password", Some(access_token), body)
            .await
    }

    pub async fn post_verify_token<B: Serialize + ?Sized>(&self, body: &B) -> reqwest::Response {
        self.post("/verify-token", None, body).await
    }

    /// Sign up a fresh user and return its session.
    pub async fn signup_user(&self, email: &str, password: &str) -> SessionResponse {
        let response = self
            .post_signup(&serde_json::json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
        response
            .json::<SessionResponse>()
            .await
            .expect("Could not deserialize response body to SessionResponse")
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}
