//! Client IP resolution behind trusted proxies
//!
//! `X-Forwarded-For` is only believed when the direct peer is on the allow-list.
//! Otherwise the peer address is the client address.

use std::convert::Infallible;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Proxy addresses allowed to report the client address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedProxies(Vec<IpAddr>);

impl TrustedProxies {
    pub fn new(proxies: Vec<IpAddr>) -> Self {
        Self(proxies)
    }

    /// Trust nobody; `X-Forwarded-For` is always ignored.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn is_trusted(&self, ip: &IpAddr) -> bool {
        self.0.contains(ip)
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.0
    }

    /// Resolve the client address for a request from `peer`.
    ///
    /// Walks `X-Forwarded-For` right to left, skipping trusted hops, and returns
    /// the first untrusted address. A malformed hop stops the walk and the peer
    /// address is used instead.
    pub fn client_ip(&self, peer: Option<IpAddr>, headers: &HeaderMap) -> Option<IpAddr> {
        let peer_ip = peer?;
        if !self.is_trusted(&peer_ip) {
            return Some(peer_ip);
        }

        let Some(forwarded) = headers
            .get(FORWARDED_FOR)
            .and_then(|value| value.to_str().ok())
        else {
            return Some(peer_ip);
        };

        let mut hops = Vec::new();
        for hop in forwarded.split(',').map(str::trim) {
            match hop.parse::<IpAddr>() {
                Ok(ip) => hops.push(ip),
                Err(_) => return Some(peer_ip),
            }
        }

        hops.iter()
            .rev()
            .find(|ip| !self.is_trusted(ip))
            .or_else(|| hops.first())
            .copied()
            .or(Some(peer_ip))
    }
}

impl Default for TrustedProxies {
    fn default() -> Self {
        Self(vec![IpAddr::V4(Ipv4Addr::new(192, 168, 1, 2))])
    }
}

impl FromStr for TrustedProxies {
    type Err = AddrParseError;

    /// Comma-separated list of addresses; an empty string trusts nobody.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(IpAddr::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Resolved client address, `None` when the transport gave no peer address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<ClientIp>()
            .copied()
            .unwrap_or(ClientIp(None)))
    }
}

/// Middleware: resolve the client address once and attach it to the request.
pub async fn resolve_client_ip(
    State(proxies): State<Arc<TrustedProxies>>,
    mut request: Request,
    next: Next,
) -> Response {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let client_ip = proxies.client_ip(peer, request.headers());
    request.extensions_mut().insert(ClientIp(client_ip));

    next.run(request).await
}
