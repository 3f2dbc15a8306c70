use crate::error::ExtractError;
use std::time::Duration;

/// Reachability check that gates the pipeline before any browser work.
#[allow(async_fn_in_trait)]
pub trait LivenessProbe {
    /// Reports whether the endpoint is live. Never fails: transport
    /// errors count as "not live".
    async fn check_live(&self, url: &str) -> bool;
}

/// HEAD-request probe with a strict success policy: only an HTTP 200
/// counts as live. Redirects are not followed; a 3xx answer is "not
/// live" by design, since following one would just report some other
/// endpoint's status.
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(insecure: bool, timeout: Duration) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pageprowl/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(insecure)
            .build()?;
        Ok(Self { client })
    }
}

impl LivenessProbe for HttpProbe {
    async fn check_live(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status != reqwest::StatusCode::OK {
                    ::log::debug!("Probe for {} returned status {}", url, status);
                }
                status == reqwest::StatusCode::OK
            }
            Err(e) => {
                ::log::debug!("Probe for {} failed: {}", url, e);
                false
            }
        }
    }
}
