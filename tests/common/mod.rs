use oauth2_gateway::{config::GatewayConfig, gateway::Gateway};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const REALM: &str = "internal";

/// Two mock servers (identity provider and backend authorization service)
/// with a gateway wired against both.
pub struct TestContext {
    pub idp: MockServer,
    pub backend: MockServer,
    pub gateway: Gateway,
}

impl TestContext {
    pub async fn new() -> Self {
        // A dedicated listener (instead of wiremock's shared server pool)
        // ensures the port actually closes when the server is dropped, so
        // tests can simulate an unreachable identity provider.
        let idp_listener = std::net::TcpListener::bind("127.0.0.1:0")
            .expect("Failed to bind identity provider listener");
        let idp = MockServer::builder().listener(idp_listener).start().await;
        let backend = MockServer::start().await;
        let config = GatewayConfig::builder()
            .endpoint(idp.uri())
            .realm(REALM)
            .build()
            .expect("Failed to build gateway configuration");
        let gateway = Gateway::builder()
            .config(config)
            .backend_url(format!("{}/authorize", backend.uri()))
            .build()
            .expect("Failed to build gateway");
        TestContext {
            idp,
            backend,
            gateway,
        }
    }

    /// Make the backend authorization service answer every request with
    /// the given status.
    pub async fn backend_responds(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/authorize"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.backend)
            .await;
    }
}
