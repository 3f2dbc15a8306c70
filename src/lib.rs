// Re-export modules
pub mod classify;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod output;
pub mod parsers;
pub mod pipeline;
pub mod probe;
pub mod results;
pub mod tokenize;

// Re-export commonly used types for convenience
pub use error::ExtractError;
pub use pipeline::PipelineState;
pub use results::{ExtractionResult, PageSnapshot};

use config::ExtractorConfig;
use output::{OutputRouter, SinkConfig};
use std::time::Duration;

/// Builder for a single extraction run.
///
/// ```no_run
/// use pageprowl::Extractor;
///
/// # async fn demo() -> Result<(), pageprowl::ExtractError> {
/// let state = Extractor::new("https://example.com")
///     .with_insecure(false)
///     .run()
///     .await?;
/// assert!(state.is_terminal());
/// # Ok(())
/// # }
/// ```
pub struct Extractor {
    config: ExtractorConfig,
    sinks: SinkConfig,
}

impl Extractor {
    /// Create a new extractor for the given URL with default settings.
    pub fn new(url: &str) -> Self {
        Self {
            config: ExtractorConfig::new(url),
            sinks: SinkConfig::default(),
        }
    }

    /// Replace the full configuration, keeping the target URL it names.
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Disable certificate validation on the probe and navigation.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.config.insecure = insecure;
        self
    }

    /// Point at a specific WebDriver server.
    pub fn with_webdriver_url(mut self, webdriver_url: &str) -> Self {
        self.config.webdriver_url = webdriver_url.to_string();
        self
    }

    /// Configure the output sinks.
    pub fn with_sinks(mut self, sinks: SinkConfig) -> Self {
        self.sinks = sinks;
        self
    }

    /// Run the pipeline to a terminal state.
    pub async fn run(mut self) -> Result<PipelineState, ExtractError> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        let probe = probe::HttpProbe::new(
            self.config.insecure,
            Duration::from_secs(self.config.probe_timeout_secs),
        )?;
        let fetcher = fetcher::WebDriverFetcher::new(&self.config);
        let mut router = OutputRouter::new(&self.sinks)?;
        let target = results::ExtractionTarget::new(&self.config.url);

        pipeline::run(&probe, fetcher, &mut router, &target).await
    }
}
