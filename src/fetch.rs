//! Page retrieval — raw wiki markdown by page name.

use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Raw markdown root of the TIC-80 wiki.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/wiki/nesbox/TIC-80";

/// Source of raw page text, one blocking call per page.
pub trait Fetch {
    fn fetch(&self, page: &str) -> Result<String>;
}

/// Fetches `<base_url>/<page>.md` over HTTP.
pub struct HttpFetcher {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    pub fn url_for(&self, page: &str) -> String {
        format!("{}/{}.md", self.base_url.trim_end_matches('/'), page)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, page: &str) -> Result<String> {
        let url = self.url_for(page);
        debug!(%url, "fetching page");
        let http_err = |source: ureq::Error| Error::Http {
            page: page.to_string(),
            source: Box::new(source),
        };
        self.agent
            .get(&url)
            .call()
            .map_err(http_err)?
            .into_string()
            .map_err(|e| http_err(e.into()))
    }
}

/// Reads `<dir>/<page>.md` from a local checkout of the wiki.
pub struct DirFetcher {
    dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Fetch for DirFetcher {
    fn fetch(&self, page: &str) -> Result<String> {
        let path = self.dir.join(format!("{page}.md"));
        debug!(path = %path.display(), "reading page");
        fs::read_to_string(&path).map_err(|source| Error::Io { path, source })
    }
}
