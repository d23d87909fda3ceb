use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::HOST;
use axum::http::HeaderMap;
use snip_core::{Registry, ShortCode};
use url::Url;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn Registry>,
    listen_addr: SocketAddr,
    public_base_url: Option<String>,
}

impl AppState {
    pub fn new(registry: Arc<dyn Registry>, listen_addr: SocketAddr) -> Self {
        Self {
            registry,
            listen_addr,
            public_base_url: None,
        }
    }

    /// Pins the base of every `short_url` instead of deriving it per request.
    pub fn with_public_base_url(mut self, base_url: Option<String>) -> Self {
        self.public_base_url = base_url;
        self
    }

    pub fn registry(&self) -> &Arc<dyn Registry> {
        &self.registry
    }

    /// Base for `short_url`: the configured URL, else the request's `Host`,
    /// else the listen address.
    pub fn base_url(&self, headers: &HeaderMap) -> String {
        if let Some(base_url) = &self.public_base_url {
            return base_url.clone();
        }

        match headers.get(HOST).and_then(|host| host.to_str().ok()) {
            Some(host) => format!("http://{}", host),
            None => format!("http://{}", self.listen_addr),
        }
    }

    /// The public URL of `code`, with the code percent-encoded as a single
    /// path segment so codes containing `/`, spaces or `?` stay routable.
    pub fn short_url(&self, headers: &HeaderMap, code: &ShortCode) -> String {
        let base_url = self.base_url(headers);
        let mut url = match Url::parse(&base_url) {
            Ok(url) => url,
            // unparsable Host header; nothing to encode against
            Err(_) => return format!("{}/{}", base_url.trim_end_matches('/'), code),
        };

        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(code.as_str());
            }
            Err(()) => return format!("{}/{}", base_url.trim_end_matches('/'), code),
        }
        url.into()
    }
}
