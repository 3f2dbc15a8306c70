use std::path::PathBuf;
use thiserror::Error;

/// A boxed collaborator error (WebDriver, HTTP, IO).
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Errors that terminate an extraction run.
///
/// An endpoint that fails the liveness probe is not an error; the
/// pipeline reports it as a terminal state instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The rendering collaborator could not load or resolve the page.
    #[error("failed to navigate to {url}: {source}")]
    Navigation {
        url: String,
        #[source]
        source: BoxedCause,
    },

    /// Connecting to the WebDriver server failed.
    #[error("failed to connect to WebDriver at {webdriver_url}: {source}")]
    WebDriverConnect {
        webdriver_url: String,
        #[source]
        source: BoxedCause,
    },

    /// A rendered-DOM query failed after navigation had succeeded.
    #[error("failed to query rendered page {url}: {source}")]
    Extraction {
        url: String,
        #[source]
        source: BoxedCause,
    },

    /// An output file could not be opened or written.
    #[error("failed to write output file {path}: {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The liveness probe HTTP client could not be constructed.
    #[error("failed to build liveness probe client: {0}")]
    ProbeClient(#[from] reqwest::Error),

    #[error("invalid word pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
