use std::{
    convert::Infallible,
    task::{Context, Poll},
};

use bytes::Bytes;
use futures_util::future::BoxFuture;
use http::Request;
use tower::Service;

use crate::{gateway::Gateway, response::GatewayResponse};

impl Gateway {
    /// Returns a terminal [tower service](https://docs.rs/tower/latest/tower/trait.Service.html)
    /// for the authorize entry point.
    pub fn authorize_endpoint(&self) -> AuthorizeEndpoint {
        AuthorizeEndpoint {
            gateway: self.clone(),
        }
    }

    /// Returns a terminal [tower service](https://docs.rs/tower/latest/tower/trait.Service.html)
    /// for the token entry point.
    pub fn token_endpoint(&self) -> TokenEndpoint {
        TokenEndpoint {
            gateway: self.clone(),
        }
    }
}

/// `GET /authorize` as a tower service.
///
/// The service is terminal: it writes a response itself and never forwards
/// to an inner service. Routing to it is the caller's concern.
#[derive(Clone)]
pub struct AuthorizeEndpoint {
    gateway: Gateway,
}

impl Service<Request<Bytes>> for AuthorizeEndpoint {
    type Response = GatewayResponse;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<GatewayResponse, Infallible>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let gateway = self.gateway.clone();
        Box::pin(async move { Ok(gateway.authorize(request).await) })
    }
}

/// `POST /token` as a tower service. Terminal, like [AuthorizeEndpoint].
#[derive(Clone)]
pub struct TokenEndpoint {
    gateway: Gateway,
}

impl Service<Request<Bytes>> for TokenEndpoint {
    type Response = GatewayResponse;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<GatewayResponse, Infallible>>;

    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Bytes>) -> Self::Future {
        let gateway = self.gateway.clone();
        Box::pin(async move { Ok(gateway.get_token(request).await) })
    }
}
