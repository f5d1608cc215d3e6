//! Direct HTTP transport.

use reqwest::blocking::Client;
use url::Url;

use crate::error::Error;
use crate::fetch::Fetch;

/// Fetches metadata over HTTP from this process.
///
/// Useful when the tool runs on the instance itself and no captured shell
/// is involved. The body text is returned for any status code, matching
/// what a shelled-out `curl` would print for the same request.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies, etc.).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&mut self, url: &Url) -> Result<String, Error> {
        log::debug!("Fetching {}...", url);
        let response = self.client.get(url.clone()).send()?;
        Ok(response.text()?)
    }
}
