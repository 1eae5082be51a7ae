use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

#[cfg(test)]
use mockall::automock;

use crate::credentials::Credentials;

/// Gate that decides whether a client may continue towards the identity
/// provider. Called once per authorize/token request, before anything is
/// forwarded upstream.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BackendAuthorizer: Send + Sync {
    /// True iff the backend service accepts the credentials.
    async fn authorize(&self, credentials: &Credentials) -> bool;
}

#[derive(Debug, Serialize)]
struct AuthorizationRequest<'a> {
    app_id: Option<&'a str>,
    app_key: Option<&'a str>,
    redirect_uri: Option<&'a str>,
}

/// [BackendAuthorizer] backed by an external authorization service over HTTP.
///
/// Any outcome other than a 200 response, including an unreachable backend,
/// is treated as "not authorized". There are no partial-success states.
pub struct ServiceAuthorizer {
    client: Client,
    url: Url,
}

impl ServiceAuthorizer {
    pub fn new(client: Client, url: Url) -> Self {
        ServiceAuthorizer { client, url }
    }
}

#[async_trait]
impl BackendAuthorizer for ServiceAuthorizer {
    async fn authorize(&self, credentials: &Credentials) -> bool {
        let request = AuthorizationRequest {
            app_id: credentials.client_id.as_deref(),
            app_key: credentials.client_secret.as_deref(),
            redirect_uri: credentials.redirect_uri.as_deref(),
        };
        match self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!("Backend authorization call failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            client_id: Some("app".to_owned()),
            client_secret: Some("s3cr3t".to_owned()),
            redirect_uri: Some("https://app.example.com/cb".to_owned()),
            access_token: None,
        }
    }

    async fn authorizer_against(mock_server: &MockServer) -> ServiceAuthorizer {
        let url = format!("{}/authorize", mock_server.uri())
            .parse::<Url>()
            .unwrap();
        ServiceAuthorizer::new(Client::new(), url)
    }

    #[tokio::test]
    async fn authorized_on_200() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/authorize"))
            .and(body_partial_json(serde_json::json!({
                "app_id": "app",
                "app_key": "s3cr3t",
                "redirect_uri": "https://app.example.com/cb",
            })))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        let authorizer = authorizer_against(&mock_server).await;

        assert!(authorizer.authorize(&credentials()).await);
    }

    #[tokio::test]
    async fn unauthorized_on_403() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;
        let authorizer = authorizer_against(&mock_server).await;

        assert!(!authorizer.authorize(&credentials()).await);
    }

    #[tokio::test]
    async fn unauthorized_on_500() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        let authorizer = authorizer_against(&mock_server).await;

        assert!(!authorizer.authorize(&credentials()).await);
    }

    #[tokio::test]
    async fn unauthorized_on_unreachable_backend() {
        let mock_server = MockServer::start().await;
        let authorizer = authorizer_against(&mock_server).await;
        drop(mock_server);

        assert!(!authorizer.authorize(&credentials()).await);
    }
}
