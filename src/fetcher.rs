use crate::config::ExtractorConfig;
use crate::error::ExtractError;
use crate::parsers::html;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;

/// Capability interface for the rendering collaborator.
///
/// The pipeline only ever talks to the browser through these
/// operations, so tests can substitute a canned snapshot without a
/// WebDriver server.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Navigates to the URL and returns the final resolved URL after
    /// redirects.
    async fn navigate(&mut self, url: &str) -> Result<String, ExtractError>;

    /// Title of the currently loaded page.
    async fn title(&mut self) -> Result<String, ExtractError>;

    /// Rendered body text of the currently loaded page.
    async fn body_text(&mut self) -> Result<String, ExtractError>;

    /// Raw anchor href values of the currently loaded page.
    async fn anchor_hrefs(&mut self) -> Result<Vec<String>, ExtractError>;

    /// Raw script src values of the currently loaded page.
    async fn script_srcs(&mut self) -> Result<Vec<String>, ExtractError>;

    /// Releases the browser session. Must be called on every exit
    /// path once `navigate` has been attempted.
    async fn close(self);
}

/// WebDriver-backed page fetcher.
///
/// Connects lazily on the first `navigate`, so a target that never
/// passes the liveness probe never touches the WebDriver server.
pub struct WebDriverFetcher {
    webdriver_url: String,
    insecure: bool,
    page_load_timeout: Duration,
    client: Option<Client>,
    current_url: String,
}

impl WebDriverFetcher {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            insecure: config.insecure,
            page_load_timeout: Duration::from_secs(config.page_load_timeout_secs),
            client: None,
            current_url: String::new(),
        }
    }

    async fn connect(&mut self) -> Result<&Client, ExtractError> {
        if self.client.is_none() {
            ::log::debug!("Connecting to WebDriver at {}", self.webdriver_url);
            let mut builder = ClientBuilder::native();
            if self.insecure {
                let mut caps = serde_json::Map::new();
                caps.insert("acceptInsecureCerts".to_string(), serde_json::json!(true));
                builder.capabilities(caps);
            }

            let client = builder.connect(&self.webdriver_url).await.map_err(|e| {
                ExtractError::WebDriverConnect {
                    webdriver_url: self.webdriver_url.clone(),
                    source: Box::new(e),
                }
            })?;
            self.client = Some(client);
        }

        // Connected just above if we weren't already
        Ok(self
            .client
            .as_ref()
            .expect("WebDriver client should be connected"))
    }

    async fn page_source(&self) -> Result<String, ExtractError> {
        let url = self.current_url.clone();
        match &self.client {
            Some(client) => client.source().await.map_err(|e| ExtractError::Extraction {
                url,
                source: Box::new(e),
            }),
            None => Err(ExtractError::Extraction {
                url,
                source: "no page has been loaded".into(),
            }),
        }
    }
}

impl PageFetcher for WebDriverFetcher {
    async fn navigate(&mut self, url: &str) -> Result<String, ExtractError> {
        let target = url.to_string();
        let page_load_timeout = self.page_load_timeout;
        let client = self.connect().await?;

        match timeout(page_load_timeout, client.goto(url)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(ExtractError::Navigation {
                    url: target,
                    source: Box::new(e),
                });
            }
            Err(_) => {
                return Err(ExtractError::Navigation {
                    url: target,
                    source: "page load timed out".into(),
                });
            }
        }

        let final_url = client
            .current_url()
            .await
            .map_err(|e| ExtractError::Navigation {
                url: target,
                source: Box::new(e),
            })?;
        self.current_url = final_url.to_string();
        ::log::debug!("Navigation landed on {}", self.current_url);
        Ok(self.current_url.clone())
    }

    async fn title(&mut self) -> Result<String, ExtractError> {
        Ok(html::extract_title(&self.page_source().await?))
    }

    async fn body_text(&mut self) -> Result<String, ExtractError> {
        Ok(html::extract_body_text(&self.page_source().await?))
    }

    async fn anchor_hrefs(&mut self) -> Result<Vec<String>, ExtractError> {
        Ok(html::extract_anchor_hrefs(&self.page_source().await?))
    }

    async fn script_srcs(&mut self) -> Result<Vec<String>, ExtractError> {
        Ok(html::extract_script_srcs(&self.page_source().await?))
    }

    async fn close(self) {
        if let Some(client) = self.client {
            if let Err(e) = client.close().await {
                ::log::warn!("Failed to close WebDriver session: {}", e);
            }
        }
    }
}
