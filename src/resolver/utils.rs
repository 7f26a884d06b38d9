// Helper functions shared by provider implementations

use super::config::ProviderConfig;
use super::errors::ResolveError;

/// Build the HTTP client used by every provider (timeout + optional proxy)
pub fn build_http_client(config: &ProviderConfig) -> Result<reqwest::Client, ResolveError> {
    let mut builder = reqwest::Client::builder().timeout(config.timeout());

    if let Some(proxy_url) = config.proxy.as_deref() {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ResolveError::InvalidConfig(format!("proxy {}: {}", proxy_url, e)))?;
        log::info!("[Http] Using proxy {}", proxy_url);
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ResolveError::InvalidConfig(format!("HTTP client: {}", e)))
}

/// Join a base host and a path without doubling the slash
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// First characters of a response body, for log lines and error text
pub fn snippet(body: &str) -> String {
    const MAX: usize = 120;
    let mut s: String = body.chars().take(MAX).collect();
    if body.chars().count() > MAX {
        s.push('…');
    }
    s
}
