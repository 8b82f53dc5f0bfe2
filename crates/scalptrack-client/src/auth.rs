//! Authentication endpoints.

use std::sync::Arc;

use reqwest::Method;
use scalptrack_core::error::{Result, ScalptrackError};
use scalptrack_core::session::{UserIdentity, extract_identity};
use serde::Serialize;

use crate::gateway::ApiGateway;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Typed wrapper for the `/auth/*` path family.
#[derive(Clone)]
pub struct AuthApi {
    gateway: Arc<ApiGateway>,
}

impl AuthApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Exchanges credentials for a server-side session.
    ///
    /// The session is carried by the cookie set on this response (and by
    /// the bearer token on servers that issue one); the identity itself is
    /// fetched separately via [`Self::me`].
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let request = self
            .gateway
            .request(Method::POST, "/auth/login")
            .json(&LoginRequest { email, password });
        self.gateway.execute(request).await?;
        Ok(())
    }

    /// Creates an account. Like login, this establishes the session.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let request = self
            .gateway
            .request(Method::POST, "/auth/register")
            .json(&RegisterRequest {
                name,
                email,
                password,
            });
        self.gateway.execute(request).await?;
        Ok(())
    }

    /// Asks the server who the ambient credentials belong to.
    ///
    /// Used both by the startup bootstrap probe and by the login/signup
    /// views to fetch the identity after establishing a session.
    pub async fn me(&self) -> Result<UserIdentity> {
        let request = self.gateway.request(Method::GET, "/auth/me");
        let body: serde_json::Value = self.gateway.execute_json(request).await?;
        extract_identity(&body).ok_or_else(|| {
            ScalptrackError::internal("Identity probe returned no recognizable user payload")
        })
    }

    /// Terminates the server-side session.
    pub async fn logout(&self) -> Result<()> {
        let request = self.gateway.request(Method::POST, "/auth/logout");
        self.gateway.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalptrack_core::config::ClientConfig;
    use scalptrack_infrastructure::TokenStorage;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn serve_once(listener: tokio::net::TcpListener, body: &'static str) {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 8192];
        let mut total = 0;
        loop {
            let n = socket.read(&mut buf[total..]).await.unwrap();
            if n == 0 {
                break;
            }
            total += n;
            if buf[..total].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
    }

    #[tokio::test]
    async fn test_me_extracts_identity_from_data_envelope() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(serve_once(
            listener,
            r#"{"success":true,"data":{"id":"1","email":"a@b.com"}}"#,
        ));

        let temp_dir = TempDir::new().unwrap();
        let tokens = Arc::new(TokenStorage::with_path(
            temp_dir.path().join("credentials.json"),
        ));
        let config = ClientConfig {
            base_url: format!("http://{addr}"),
            timeout_secs: 10,
        };
        let auth = AuthApi::new(Arc::new(ApiGateway::new(&config, tokens).unwrap()));

        let identity = auth.me().await.unwrap();
        assert_eq!(identity.id, "1");
        assert_eq!(identity.email.as_deref(), Some("a@b.com"));

        server.await.unwrap();
    }
}
